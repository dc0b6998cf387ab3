use crate::error::{ErrorKind, Id3MetaError, Result};
use crate::macros::err;

use std::borrow::Cow;
use std::str::FromStr;

/// Separator between the values of a multi-valued text frame
pub(crate) const VALUE_SEPARATOR: char = '\0';

/// The text encoding for use in ID3v2 frames
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash)]
#[repr(u8)]
pub enum TextEncoding {
	/// ISO-8859-1
	Latin1 = 0,
	/// UTF-16 with a byte order mark
	UTF16 = 1,
	/// UTF-16 big endian
	UTF16BE = 2,
	/// UTF-8
	UTF8 = 3,
}

impl TextEncoding {
	/// Get a `TextEncoding` from a u8, must be 0-3 inclusive
	///
	/// # Examples
	///
	/// ```rust
	/// use id3meta::TextEncoding;
	///
	/// assert_eq!(TextEncoding::from_u8(3), Some(TextEncoding::UTF8));
	/// assert_eq!(TextEncoding::from_u8(4), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 => Some(Self::UTF16),
			2 => Some(Self::UTF16BE),
			3 => Some(Self::UTF8),
			_ => None,
		}
	}

	pub(crate) fn verify_latin1(text: &str) -> bool {
		text.chars().all(|c| c as u32 <= 255)
	}

	/// ID3v2.4 introduced two new text encodings.
	///
	/// When writing ID3v2.3, we just substitute with UTF-16.
	pub(crate) fn to_id3v23(self) -> Self {
		match self {
			Self::UTF8 | Self::UTF16BE => {
				log::warn!(
					"Text encoding {:?} is not supported in ID3v2.3, substituting with UTF-16",
					self
				);
				Self::UTF16
			},
			_ => self,
		}
	}

	fn can_encode(self, c: char) -> bool {
		match self {
			Self::Latin1 => c as u32 <= 255,
			_ => true,
		}
	}

	/// Drops every character that can't be represented in this encoding
	pub(crate) fn sanitize(self, text: &str) -> Cow<'_, str> {
		if self != Self::Latin1 || Self::verify_latin1(text) {
			return Cow::Borrowed(text);
		}

		log::warn!(
			"Dropping characters that can't be represented in {:?}: {:?}",
			self,
			text
		);
		Cow::Owned(text.chars().filter(|c| self.can_encode(*c)).collect())
	}

	pub(crate) fn terminator(self) -> &'static [u8] {
		match self {
			Self::Latin1 | Self::UTF8 => &[0],
			Self::UTF16 | Self::UTF16BE => &[0, 0],
		}
	}

	/// Encodes `text`, dropping any character the encoding can't represent
	pub(crate) fn encode(self, text: &str, terminated: bool) -> Vec<u8> {
		let text = self.sanitize(text);

		let mut out = match self {
			Self::Latin1 => text.chars().map(|c| c as u8).collect(),
			Self::UTF16 => utf16_encode(&text, u16::to_le_bytes, true),
			Self::UTF16BE => utf16_encode(&text, u16::to_be_bytes, false),
			Self::UTF8 => text.as_bytes().to_vec(),
		};

		if terminated {
			out.extend_from_slice(self.terminator());
		}

		out
	}

	/// Encodes a list of values, separated by the encoding's terminator
	///
	/// Every value is written terminated, the terminator following the final value is removed.
	pub(crate) fn encode_values<I, S>(self, values: I) -> Vec<u8>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut out = Vec::new();
		for value in values {
			out.extend(self.encode(value.as_ref(), true));
		}

		let terminator = self.terminator();
		if out.ends_with(terminator) {
			out.truncate(out.len() - terminator.len());
		}

		out
	}
}

impl FromStr for TextEncoding {
	type Err = Id3MetaError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"iso-8859-1" | "latin-1" | "latin1" => Ok(Self::Latin1),
			"utf-16" | "utf16" => Ok(Self::UTF16),
			"utf-16be" | "utf16be" => Ok(Self::UTF16BE),
			"utf-8" | "utf8" => Ok(Self::UTF8),
			_ => err!(BadSetting(format!("unknown text encoding \"{s}\""))),
		}
	}
}

impl From<TextEncoding> for id3::Encoding {
	fn from(input: TextEncoding) -> Self {
		match input {
			TextEncoding::Latin1 => id3::Encoding::Latin1,
			TextEncoding::UTF16 => id3::Encoding::UTF16,
			TextEncoding::UTF16BE => id3::Encoding::UTF16BE,
			TextEncoding::UTF8 => id3::Encoding::UTF8,
		}
	}
}

impl From<id3::Encoding> for TextEncoding {
	fn from(input: id3::Encoding) -> Self {
		match input {
			id3::Encoding::Latin1 => TextEncoding::Latin1,
			id3::Encoding::UTF16BE => TextEncoding::UTF16BE,
			id3::Encoding::UTF8 => TextEncoding::UTF8,
			_ => TextEncoding::UTF16,
		}
	}
}

/// Joins values into the codec's multi-value text representation
///
/// Only the separator following the final value is removed, trailing empty values are kept.
pub(crate) fn join_values<I, S>(values: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut joined = String::new();
	for value in values {
		joined.push_str(value.as_ref());
		joined.push(VALUE_SEPARATOR);
	}

	joined.pop();
	joined
}

pub(crate) fn split_values(text: &str) -> impl Iterator<Item = &str> {
	text.split(VALUE_SEPARATOR)
}

/// Decodes a raw text frame body: an encoding byte followed by terminated values
pub(crate) fn decode_text_frame(body: &[u8]) -> Result<(TextEncoding, Vec<String>)> {
	let Some((&encoding_byte, content)) = body.split_first() else {
		err!(TextDecode("Text frame has no content"));
	};

	let Some(encoding) = TextEncoding::from_u8(encoding_byte) else {
		err!(TextDecode("Found invalid encoding"));
	};

	let mut values = Vec::new();
	let mut bom = None;
	for raw in split_terminated(content, encoding) {
		let value = match encoding {
			TextEncoding::UTF16 => {
				let (value, value_bom) = utf16_decode_with_bom(raw, bom)?;
				bom = bom.or(value_bom);
				value
			},
			_ => decode_text(raw, encoding)?,
		};

		values.push(value);
	}

	Ok((encoding, values))
}

pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
	let mut text = match encoding {
		TextEncoding::Latin1 => latin1_decode(bytes),
		TextEncoding::UTF16 => utf16_decode_with_bom(bytes, None)?.0,
		TextEncoding::UTF16BE => utf16_decode_bytes(bytes, u16::from_be_bytes)?,
		TextEncoding::UTF8 => String::from_utf8(bytes.to_vec())
			.map_err(|_| Id3MetaError::new(ErrorKind::TextDecode("Expected a UTF-8 string")))?,
	};

	trim_end_nulls(&mut text);
	Ok(text)
}

// Splits on the encoding's terminator, 2-byte terminators only match on even offsets.
// A trailing terminator doesn't produce an empty value.
fn split_terminated(bytes: &[u8], encoding: TextEncoding) -> Vec<&[u8]> {
	let width = encoding.terminator().len();

	let mut values = Vec::new();
	let mut start = 0;
	let mut pos = 0;
	while pos + width <= bytes.len() {
		if bytes[pos..pos + width].iter().all(|b| *b == 0) {
			values.push(&bytes[start..pos]);
			start = pos + width;
		}

		pos += width;
	}

	if start < bytes.len() {
		values.push(&bytes[start..]);
	}

	values
}

pub(crate) fn latin1_decode(bytes: &[u8]) -> String {
	let mut text = bytes.iter().map(|c| *c as char).collect::<String>();
	trim_end_nulls(&mut text);
	text
}

pub(crate) fn latin1_encode_lossy(text: &str) -> impl Iterator<Item = u8> + '_ {
	text.chars().filter(|c| *c as u32 <= 255).map(|c| c as u8)
}

fn utf16_decode_with_bom(
	bytes: &[u8],
	fallback_bom: Option<[u8; 2]>,
) -> Result<(String, Option<[u8; 2]>)> {
	if bytes.is_empty() {
		return Ok((String::new(), None));
	}

	if bytes.len() < 2 {
		err!(TextDecode("UTF-16 string has an invalid length (< 2)"));
	}

	let (bom, content) = match [bytes[0], bytes[1]] {
		bom @ ([0xFE, 0xFF] | [0xFF, 0xFE]) => (bom, &bytes[2..]),
		_ => match fallback_bom {
			Some(bom) => (bom, bytes),
			None => err!(TextDecode("UTF-16 string has an invalid byte order mark")),
		},
	};

	let text = match bom {
		[0xFE, 0xFF] => utf16_decode_bytes(content, u16::from_be_bytes)?,
		_ => utf16_decode_bytes(content, u16::from_le_bytes)?,
	};

	Ok((text, Some(bom)))
}

pub(crate) fn utf16_decode_bytes(bytes: &[u8], endianness: fn([u8; 2]) -> u16) -> Result<String> {
	if bytes.len() % 2 != 0 {
		err!(TextDecode("UTF-16 string has an odd length"));
	}

	let unverified: Vec<u16> = bytes
		.chunks_exact(2)
		.map(|c| endianness([c[0], c[1]]))
		.collect();

	let mut text = String::from_utf16(&unverified)
		.map_err(|_| Id3MetaError::new(ErrorKind::TextDecode("Given an invalid UTF-16 string")))?;
	trim_end_nulls(&mut text);
	Ok(text)
}

fn utf16_encode(text: &str, endianness: fn(u16) -> [u8; 2], bom: bool) -> Vec<u8> {
	let mut encoded = Vec::<u8>::new();

	if bom {
		encoded.extend_from_slice(&endianness(0xFEFF_u16));
	}

	for ch in text.encode_utf16() {
		encoded.extend_from_slice(&endianness(ch));
	}

	encoded
}

pub(crate) fn trim_end_nulls(text: &mut String) {
	if text.ends_with('\0') {
		let new_len = text.trim_end_matches('\0').len();
		text.truncate(new_len);
	}
}
