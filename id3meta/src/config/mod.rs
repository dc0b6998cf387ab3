//! Options for reading and writing metadata

mod settings;

pub use settings::Settings;
