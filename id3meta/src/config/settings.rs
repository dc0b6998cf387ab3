use crate::error::Result;
use crate::macros::err;
use crate::util::text::TextEncoding;

use std::borrow::Cow;

/// Options controlling how metadata is read from and written to a file
///
/// This is best used as an application global config that gets set once. Values can either be
/// chained through the builder methods or filled from a flat key/value source with
/// [`Settings::set_option`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct Settings {
	pub(crate) clear_existing_tags: bool,
	pub(crate) remove_images_from_tags: bool,
	pub(crate) save_images_to_tags: bool,
	pub(crate) write_id3v1: bool,
	pub(crate) write_id3v23: bool,
	pub(crate) id3v2_encoding: TextEncoding,
	pub(crate) remove_ape_from_mp3: bool,
	pub(crate) rating_user_email: Cow<'static, str>,
	pub(crate) rating_steps: u32,
}

impl Settings {
	/// Default identity used to find the rating frame
	pub const DEFAULT_RATING_USER_EMAIL: &'static str = "users@musicbrainz.org";
	/// Default number of rating steps (a 0-5 scale)
	pub const DEFAULT_RATING_STEPS: u32 = 6;

	/// Creates a new `Settings`, alias for `Default` implementation
	///
	/// See also: [`Settings::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::config::Settings;
	///
	/// let settings = Settings::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			clear_existing_tags: false,
			remove_images_from_tags: false,
			save_images_to_tags: true,
			write_id3v1: true,
			write_id3v23: false,
			id3v2_encoding: TextEncoding::UTF16,
			remove_ape_from_mp3: false,
			rating_user_email: Cow::Borrowed(Self::DEFAULT_RATING_USER_EMAIL),
			rating_steps: Self::DEFAULT_RATING_STEPS,
		}
	}

	/// Discard every existing frame before writing
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::config::Settings;
	///
	/// // Only the fields I provide should end up in the file
	/// let settings = Settings::new().clear_existing_tags(true);
	/// ```
	pub fn clear_existing_tags(mut self, clear_existing_tags: bool) -> Self {
		self.clear_existing_tags = clear_existing_tags;
		self
	}

	/// Remove every existing picture before writing
	pub fn remove_images_from_tags(mut self, remove_images_from_tags: bool) -> Self {
		self.remove_images_from_tags = remove_images_from_tags;
		self
	}

	/// Whether to embed the metadata's images when writing
	pub fn save_images_to_tags(mut self, save_images_to_tags: bool) -> Self {
		self.save_images_to_tags = save_images_to_tags;
		self
	}

	/// Whether to write an ID3v1 trailer alongside the ID3v2 tag
	///
	/// If set to `false`, an existing trailer will be removed.
	pub fn write_id3v1(mut self, write_id3v1: bool) -> Self {
		self.write_id3v1 = write_id3v1;
		self
	}

	/// Write ID3v2.3 instead of ID3v2.4
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::config::Settings;
	///
	/// // My car stereo doesn't understand ID3v2.4
	/// let settings = Settings::new().write_id3v23(true);
	/// ```
	pub fn write_id3v23(mut self, write_id3v23: bool) -> Self {
		self.write_id3v23 = write_id3v23;
		self
	}

	/// The encoding used for text frames
	///
	/// NOTE: `TRCK`, `TPOS` and pictures are always written as Latin-1. When writing
	///       ID3v2.3, UTF-8 and UTF-16BE are substituted with UTF-16.
	pub fn id3v2_encoding(mut self, id3v2_encoding: TextEncoding) -> Self {
		self.id3v2_encoding = id3v2_encoding;
		self
	}

	/// Attempt to delete an APEv2 tag from MPEG files after writing
	///
	/// Failures are ignored.
	pub fn remove_ape_from_mp3(mut self, remove_ape_from_mp3: bool) -> Self {
		self.remove_ape_from_mp3 = remove_ape_from_mp3;
		self
	}

	/// The identity of the `POPM` frame holding the rating
	pub fn rating_user_email(mut self, rating_user_email: impl Into<String>) -> Self {
		self.rating_user_email = Cow::Owned(rating_user_email.into());
		self
	}

	/// The number of steps on the rating scale, including 0
	///
	/// NOTE: A value below 2 disables reading and writing ratings.
	pub fn rating_steps(mut self, rating_steps: u32) -> Self {
		self.rating_steps = rating_steps;
		self
	}

	/// Set an option by name
	///
	/// Option names are the names of the builder methods. Booleans accept `true`/`false`,
	/// `1`/`0`, `yes`/`no` and `on`/`off`. Unrecognized text encodings fall back to Latin-1.
	///
	/// # Errors
	///
	/// * `key` is not a known option
	/// * `value` can't be parsed for the option
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::config::Settings;
	///
	/// # fn main() -> id3meta::error::Result<()> {
	/// let mut settings = Settings::new();
	/// settings.set_option("write_id3v23", "true")?;
	/// settings.set_option("id3v2_encoding", "utf-8")?;
	///
	/// assert!(settings.set_option("rating_steps", "many").is_err());
	/// # Ok(()) }
	/// ```
	pub fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
		match key {
			"clear_existing_tags" => self.clear_existing_tags = parse_bool(key, value)?,
			"remove_images_from_tags" => self.remove_images_from_tags = parse_bool(key, value)?,
			"save_images_to_tags" => self.save_images_to_tags = parse_bool(key, value)?,
			"write_id3v1" => self.write_id3v1 = parse_bool(key, value)?,
			"write_id3v23" => self.write_id3v23 = parse_bool(key, value)?,
			"remove_ape_from_mp3" => self.remove_ape_from_mp3 = parse_bool(key, value)?,
			"id3v2_encoding" => {
				self.id3v2_encoding = value.parse().unwrap_or_else(|_| {
					log::debug!("Unknown text encoding {value:?}, using Latin-1");
					TextEncoding::Latin1
				})
			},
			"rating_user_email" => self.rating_user_email = Cow::Owned(value.to_owned()),
			"rating_steps" => {
				let Ok(steps) = value.trim().parse() else {
					err!(BadSetting(format!("`{key}` expects an integer, got {value:?}")));
				};

				self.rating_steps = steps;
			},
			_ => err!(BadSetting(format!("unknown option `{key}`"))),
		}

		Ok(())
	}
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => err!(BadSetting(format!("`{key}` expects a boolean, got {value:?}"))),
	}
}

impl Default for Settings {
	/// The default implementation for `Settings`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// Settings {
	///     clear_existing_tags: false,
	///     remove_images_from_tags: false,
	///     save_images_to_tags: true,
	///     write_id3v1: true,
	///     write_id3v23: false,
	///     id3v2_encoding: TextEncoding::UTF16,
	///     remove_ape_from_mp3: false,
	///     rating_user_email: "users@musicbrainz.org",
	///     rating_steps: 6,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
