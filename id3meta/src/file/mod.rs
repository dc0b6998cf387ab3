//! Format-specific file handling

mod format;
mod id3_file;

pub use format::{FileFormat, InfoHook};
pub use id3_file::Id3File;
