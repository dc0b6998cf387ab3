use crate::error::Result;
use crate::metadata::Metadata;

use std::ffi::OsStr;
use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::path::Path;

/// Fills in the computed (`~`-prefixed) fields of a file, such as `~sample_rate`
///
/// The file is positioned at its start. `~format` is already set to [`FileFormat::name`] and may
/// be overwritten.
pub type InfoHook = fn(&mut Metadata, &mut File) -> Result<()>;

/// The container formats that carry ID3v2 tags, and their differences
///
/// Every format shares the same frame translation. A format only decides which files it applies
/// to and what stream information is added while loading.
#[derive(Copy, Clone)]
pub struct FileFormat {
	pub(crate) name: &'static str,
	pub(crate) extensions: &'static [&'static str],
	pub(crate) read_info: InfoHook,
	pub(crate) strips_ape: bool,
}

impl FileFormat {
	/// MPEG audio (MP3, MP2)
	///
	/// These files may also carry an APEv2 tag, which can be removed when saving.
	pub const MPEG: Self = Self::new(
		"MPEG-1 Audio",
		&["mp3", "mp2"],
		crate::mpeg::read_info,
		true,
	);

	/// The True Audio (TTA)
	pub const TRUE_AUDIO: Self = Self::new("The True Audio", &["tta"], crate::tta::read_info, false);

	/// Every built-in format, in the order they're matched against extensions
	pub const ALL: &'static [Self] = &[Self::MPEG, Self::TRUE_AUDIO];

	/// Create a custom format
	///
	/// `extensions` are compared case-insensitively, and should be given in lowercase.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::FileFormat;
	///
	/// fn no_info(
	/// 	_metadata: &mut id3meta::Metadata,
	/// 	_: &mut std::fs::File,
	/// ) -> id3meta::error::Result<()> {
	/// 	Ok(())
	/// }
	///
	/// let format = FileFormat::new("Tagged WAV", &["wav"], no_info, false);
	/// assert_eq!(format.name(), "Tagged WAV");
	/// ```
	pub const fn new(
		name: &'static str,
		extensions: &'static [&'static str],
		read_info: InfoHook,
		strips_ape: bool,
	) -> Self {
		Self {
			name,
			extensions,
			read_info,
			strips_ape,
		}
	}

	/// The name of the format, used as the default `~format`
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The extensions of files in this format
	pub fn extensions(&self) -> &'static [&'static str] {
		self.extensions
	}

	/// Whether saving removes APEv2 tags (with [`Settings::remove_ape_from_mp3`](crate::config::Settings::remove_ape_from_mp3))
	pub fn strips_ape(&self) -> bool {
		self.strips_ape
	}

	/// Attempts to find a built-in format from an extension
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::FileFormat;
	///
	/// assert_eq!(FileFormat::from_ext("MP3"), Some(FileFormat::MPEG));
	/// assert_eq!(FileFormat::from_ext("flac"), None);
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		Self::ALL
			.iter()
			.find(|format| format.extensions.contains(&ext.as_str()))
			.copied()
	}

	/// Attempts to find a built-in format from a path's extension
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::FileFormat;
	/// use std::path::Path;
	///
	/// let path = Path::new("path/to/my.tta");
	/// assert_eq!(FileFormat::from_path(path), Some(FileFormat::TRUE_AUDIO));
	/// ```
	pub fn from_path<P>(path: P) -> Option<Self>
	where
		P: AsRef<Path>,
	{
		let ext = path.as_ref().extension();
		ext.and_then(Self::from_ext)
	}
}

impl Debug for FileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FileFormat")
			.field("name", &self.name)
			.field("extensions", &self.extensions)
			.field("strips_ape", &self.strips_ape)
			.finish_non_exhaustive()
	}
}

// Formats are identified by their name, hooks can't be compared reliably
impl PartialEq for FileFormat {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Eq for FileFormat {}
