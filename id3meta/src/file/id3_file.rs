use super::FileFormat;
use crate::ape;
use crate::config::Settings;
use crate::error::Result;
use crate::id3::{mappings, read, read_tag, v1, version, write};
use crate::macros::err;
use crate::metadata::Metadata;

use std::fs::File;
use std::path::Path;

use id3::Version;

/// Reads and writes [`Metadata`] through a file's ID3v2 tag
///
/// # Examples
///
/// ```rust,no_run
/// use id3meta::config::Settings;
/// use id3meta::Id3File;
///
/// # fn main() -> id3meta::error::Result<()> {
/// let settings = Settings::new().write_id3v23(true);
///
/// let file = Id3File::for_path("track.mp3")?;
/// let mut metadata = file.load("track.mp3", &settings)?;
///
/// metadata.set("title", "Foo title");
/// file.save("track.mp3", &metadata, &settings)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3File {
	format: FileFormat,
}

impl Id3File {
	/// Create an `Id3File` for a format
	pub const fn new(format: FileFormat) -> Self {
		Self { format }
	}

	/// Create an `Id3File` for MPEG audio
	pub const fn mpeg() -> Self {
		Self::new(FileFormat::MPEG)
	}

	/// Create an `Id3File` for True Audio
	pub const fn true_audio() -> Self {
		Self::new(FileFormat::TRUE_AUDIO)
	}

	/// Create an `Id3File` from a path's extension
	///
	/// # Errors
	///
	/// The extension doesn't belong to any of [`FileFormat::ALL`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::{FileFormat, Id3File};
	///
	/// # fn main() -> id3meta::error::Result<()> {
	/// let file = Id3File::for_path("music/track.tta")?;
	/// assert_eq!(file.format(), &FileFormat::TRUE_AUDIO);
	///
	/// assert!(Id3File::for_path("music/track.flac").is_err());
	/// # Ok(()) }
	/// ```
	pub fn for_path<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		match FileFormat::from_path(path) {
			Some(format) => Ok(Self::new(format)),
			None => err!(UnknownFormat),
		}
	}

	/// The file's format
	pub fn format(&self) -> &FileFormat {
		&self.format
	}

	/// Whether a field can be stored in an ID3v2 tag
	///
	/// Only fields with a dedicated frame or `TXXX` description are supported, along with
	/// `performer:<role>` fields. This does not depend on the contents of any file.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::Id3File;
	///
	/// assert!(Id3File::supports_tag("performer:guitar"));
	/// assert!(Id3File::supports_tag("musicbrainz_albumid"));
	/// assert!(!Id3File::supports_tag("unknownfield"));
	/// ```
	pub fn supports_tag(name: &str) -> bool {
		mappings::supports_field(name)
	}

	/// Read the metadata of a file
	///
	/// A file without an ID3v2 tag produces a [`Metadata`] holding only the computed fields.
	///
	/// # Errors
	///
	/// * The file can't be opened
	/// * The ID3v2 tag can't be decoded
	/// * The format's [`InfoHook`](crate::InfoHook) fails
	pub fn load<P>(&self, path: P, settings: &Settings) -> Result<Metadata>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Loading {} as {}", path.display(), self.format.name);

		let mut tag = read_tag(path)?;
		version::upgrade(&mut tag);

		let mut metadata = read::read_metadata(&tag, settings);
		metadata.set("~format", self.format.name);

		let mut file = File::open(path)?;
		(self.format.read_info)(&mut metadata, &mut file)?;

		Ok(metadata)
	}

	/// Write metadata to a file
	///
	/// The existing tag is amended, frames for fields missing from `metadata` are kept unless
	/// [`Settings::clear_existing_tags`] is set.
	///
	/// # Errors
	///
	/// * The file can't be opened or written to
	/// * The existing ID3v2 tag can't be decoded
	///
	/// Failing to remove an APEv2 tag is not an error.
	pub fn save<P>(&self, path: P, metadata: &Metadata, settings: &Settings) -> Result<()>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		log::debug!("Saving {} as {}", path.display(), self.format.name);

		let mut tag = read_tag(path)?;
		version::upgrade(&mut tag);

		write::apply_metadata(&mut tag, metadata, settings);

		let version = if settings.write_id3v23 {
			version::downgrade(&mut tag);
			Version::Id3v23
		} else {
			version::strip_legacy_frames(&mut tag);
			Version::Id3v24
		};

		tag.write_to_path(path, version)?;
		v1::update_trailer(path, settings.write_id3v1.then_some(&tag))?;

		if self.format.strips_ape && settings.remove_ape_from_mp3 {
			match ape::strip_ape_tag(path) {
				Ok(true) => log::debug!("Removed APEv2 tag from {}", path.display()),
				Ok(false) => {},
				Err(err) => log::warn!("Unable to remove APEv2 tag, ignoring: {err}"),
			}
		}

		Ok(())
	}
}
