#![allow(missing_docs)]

mod conversions;
mod round_trip;
pub(crate) mod util;
