//! Contains the errors that can arise within id3meta
//!
//! The primary error is [`Id3MetaError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Id3MetaError>`
pub type Result<T> = std::result::Result<T, Id3MetaError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Unable to determine the container format from a path
	UnknownFormat,
	/// Errors that occur while decoding a file's container data (APE footers, audio headers)
	FileDecoding(&'static str),
	/// Errors that arise while decoding text
	TextDecode(&'static str),
	/// A configuration key or value was rejected
	BadSetting(String),

	// Conversions for external errors
	/// Errors raised by the ID3v2 frame codec
	Id3(id3::Error),
	/// Unable to convert bytes to a String
	StringFromUtf8(std::string::FromUtf8Error),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within id3meta
pub struct Id3MetaError {
	pub(crate) kind: ErrorKind,
}

impl Id3MetaError {
	/// Create an `Id3MetaError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::error::{ErrorKind, Id3MetaError};
	///
	/// let unknown_format = Id3MetaError::new(ErrorKind::UnknownFormat);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::error::{ErrorKind, Id3MetaError};
	///
	/// let unknown_format = Id3MetaError::new(ErrorKind::UnknownFormat);
	/// if let ErrorKind::UnknownFormat = unknown_format.kind() {
	/// 	println!("What's the format?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Id3MetaError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Id3(ref err) => Some(err),
			ErrorKind::StringFromUtf8(ref err) => Some(err),
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Id3MetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<id3::Error> for Id3MetaError {
	fn from(input: id3::Error) -> Self {
		Self {
			kind: ErrorKind::Id3(input),
		}
	}
}

impl From<std::io::Error> for Id3MetaError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::string::FromUtf8Error> for Id3MetaError {
	fn from(input: std::string::FromUtf8Error) -> Self {
		Self {
			kind: ErrorKind::StringFromUtf8(input),
		}
	}
}

impl Display for Id3MetaError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Id3(ref err) => write!(f, "ID3v2: {err}"),
			ErrorKind::StringFromUtf8(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::UnknownFormat => {
				write!(f, "No format could be determined from the provided path")
			},
			ErrorKind::FileDecoding(message) => write!(f, "File decoding: {message}"),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),
			ErrorKind::BadSetting(ref message) => write!(f, "Invalid setting: {message}"),
		}
	}
}
