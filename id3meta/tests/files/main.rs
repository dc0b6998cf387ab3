#![allow(missing_docs)]

mod mpeg;
mod tta;
pub(crate) mod util;
