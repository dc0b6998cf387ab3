//! APEv2 tag removal
//!
//! APE tags are never read or written, but some MPEG files carry one next to their ID3 tags.
//! Since players disagree on which tag takes precedence, an APE tag can optionally be removed
//! when saving.

use crate::error::Result;
use crate::id3::v1::find_id3v1;
use crate::macros::decode_err;

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

pub(crate) const APE_PREAMBLE: &[u8; 8] = b"APETAGEX";

// The header and footer are the same size
const APE_FOOTER_SIZE: u64 = 32;
const HAS_HEADER_FLAG: u32 = 1 << 31;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApeFooter {
	pub(crate) version: u32,
	/// Size of the items and footer, excluding the header
	pub(crate) size: u32,
	pub(crate) item_count: u32,
	pub(crate) has_header: bool,
}

impl ApeFooter {
	/// Total size of the tag, including the header if present
	pub(crate) fn tag_size(&self) -> u64 {
		let mut size = u64::from(self.size);
		if self.has_header {
			size += APE_FOOTER_SIZE;
		}

		size
	}
}

pub(crate) fn read_ape_footer<R>(reader: &mut R) -> Result<Option<ApeFooter>>
where
	R: Read,
{
	let mut preamble = [0; 8];
	reader.read_exact(&mut preamble)?;
	if &preamble != APE_PREAMBLE {
		return Ok(None);
	}

	let version = reader.read_u32::<LittleEndian>()?;
	let size = reader.read_u32::<LittleEndian>()?;
	let item_count = reader.read_u32::<LittleEndian>()?;
	let flags = reader.read_u32::<LittleEndian>()?;

	if u64::from(size) < APE_FOOTER_SIZE {
		decode_err!(@BAIL "APE tag has an invalid size (< 32)");
	}

	Ok(Some(ApeFooter {
		version,
		size,
		item_count,
		has_header: flags & HAS_HEADER_FLAG == HAS_HEADER_FLAG,
	}))
}

/// Removes an APEv2 tag from the end of a file, returning whether one was found
///
/// A tag followed by an ID3v1 trailer is found as well, the trailer is kept.
pub(crate) fn strip_ape_tag(path: &Path) -> Result<bool> {
	let mut file = OpenOptions::new().read(true).write(true).open(path)?;

	// Seeks us to the end of the file, or the start of the ID3v1 trailer
	find_id3v1(&mut file)?;
	let tag_end = file.stream_position()?;

	if tag_end < APE_FOOTER_SIZE {
		return Ok(false);
	}

	file.seek(SeekFrom::Start(tag_end - APE_FOOTER_SIZE))?;
	let Some(footer) = read_ape_footer(&mut file)? else {
		return Ok(false);
	};

	log::debug!(
		"APE: Found tag version {} with {} items",
		footer.version,
		footer.item_count
	);

	let Some(tag_start) = tag_end.checked_sub(footer.tag_size()) else {
		decode_err!(@BAIL "APE tag is larger than the file");
	};

	file.seek(SeekFrom::Start(tag_end))?;
	let mut trailing = Vec::new();
	file.read_to_end(&mut trailing)?;

	file.seek(SeekFrom::Start(tag_start))?;
	file.write_all(&trailing)?;
	file.set_len(tag_start + trailing.len() as u64)?;

	log::debug!("APE: Removed {} byte tag", footer.tag_size());
	Ok(true)
}
