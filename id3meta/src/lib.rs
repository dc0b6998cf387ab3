//! Translate ID3v2 tags to and from a flat metadata record.
//!
//! An ID3v2 tag is a list of typed frames (`TPE1`, `COMM`, `APIC`, `POPM`, ...). Applications
//! rarely care about frames, they want fields like `artist`, `comment:<description>` or
//! `musicbrainz_albumid`. This crate maps a curated set of frames to such fields and back,
//! taking care of the differences between ID3v2.3 and ID3v2.4 along the way.
//!
//! # Supported formats
//!
//! * MPEG audio (`mp3`, `mp2`), see [`FileFormat::MPEG`]
//! * The True Audio (`tta`), see [`FileFormat::TRUE_AUDIO`]
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> id3meta::error::Result<()> {
//! use id3meta::Id3File;
//! use id3meta::config::Settings;
//!
//! let path = "test.mp3";
//! let metadata = Id3File::for_path(path)?.load(path, &Settings::default())?;
//!
//! println!("Artist: {:?}", metadata.get("artist"));
//! println!("Format: {:?}", metadata.get("~format"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing a file
//!
//! ```rust,no_run
//! # fn main() -> id3meta::error::Result<()> {
//! use id3meta::config::Settings;
//! use id3meta::{Id3File, Metadata};
//!
//! let mut metadata = Metadata::new();
//! metadata.add("artist", "Foo artist");
//! metadata.add("tracknumber", "3");
//! metadata.add("totaltracks", "12");
//! metadata.add("~rating", "4");
//!
//! // Write an ID3v2.3 tag, without an ID3v1 trailer
//! let settings = Settings::new().write_id3v23(true).write_id3v1(false);
//! Id3File::mpeg().save("test.mp3", &metadata, &settings)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Important notes
//!
//! * Only curated frames are read. Frames the crate doesn't know about are kept in the file when
//!   saving, but never show up in a [`Metadata`].
//! * `~id3:<frame id>` and `~id3:TXXX:<description>` fields can be used to write frames that have
//!   no field of their own. They are never produced when reading.
//! * ID3v2.3 has no counterpart for several ID3v2.4 frames (such as `TMOO` or `TSOA`). They are
//!   dropped when writing with [`Settings::write_id3v23`](config::Settings::write_id3v23).

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod metadata;
mod util;

mod ape;
mod file;
mod id3;
mod mpeg;
mod tta;

pub use crate::file::{FileFormat, Id3File, InfoHook};
pub use crate::metadata::{Image, Metadata};

pub use util::text::TextEncoding;
