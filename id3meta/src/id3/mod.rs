//! Translation between ID3v2 frames and [`Metadata`](crate::Metadata)
//!
//! The frame codec is the [`id3`] crate. This module decides which frames map to which fields,
//! and takes care of everything the codec leaves to its users:
//!
//! * Moving frames between the ID3v2.3 and ID3v2.4 vocabularies
//! * Custom `XSOP`/`XDOR` frames written by older software
//! * ID3v1 trailers
//!
//! Only a curated set of frames is translated. Unrecognized frames are kept in the file when
//! saving, but never show up in the metadata. Arbitrary frames can still be written through the
//! `~id3:<frame id>` and `~id3:TXXX:<description>` escape fields.

pub(crate) mod mappings;
pub(crate) mod pairs;
pub(crate) mod rating;
pub(crate) mod read;
pub(crate) mod v1;
pub(crate) mod version;
pub(crate) mod write;


use crate::error::Result;
use crate::util::text;
use crate::util::unsynch_u32;

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use id3::frame::{Content, InvolvedPeopleListItem};
use id3::{ErrorKind, Frame, Tag};

const ID3V2_HEADER_SIZE: u64 = 10;
const ID3V2_FOOTER_FLAG: u8 = 0x10;

/// Reads the ID3v2 tag of a file, or an empty tag if there is none
pub(crate) fn read_tag(path: &Path) -> Result<Tag> {
	match Tag::read_from_path(path) {
		Ok(tag) => Ok(tag),
		Err(err) if matches!(err.kind, ErrorKind::NoTag) => {
			log::debug!("ID3v2: No tag found in {}", path.display());
			Ok(Tag::new())
		},
		Err(err) => Err(err.into()),
	}
}

/// The (role, name) pairs of a `TIPL`, `TMCL` or `IPLS` frame
///
/// People lists the codec didn't decode are read as alternating role and name values.
pub(crate) fn involved_people(frame: &Frame) -> Vec<InvolvedPeopleListItem> {
	match frame.content() {
		Content::InvolvedPeopleList(list) => list.items.clone(),
		Content::Text(value) => {
			let values = text::split_values(value).collect::<Vec<_>>();
			values
				.chunks(2)
				.map(|pair| InvolvedPeopleListItem {
					involvement: pair[0].to_owned(),
					involvee: pair.get(1).copied().unwrap_or_default().to_owned(),
				})
				.collect()
		},
		_ => Vec::new(),
	}
}

/// Seeks past an ID3v2 tag at the start of the reader, returning the tag's size
///
/// If there is no tag, the reader is left at the start.
pub(crate) fn skip_id3v2<R>(reader: &mut R) -> Result<u64>
where
	R: Read + Seek,
{
	reader.seek(SeekFrom::Start(0))?;

	let mut header = [0; ID3V2_HEADER_SIZE as usize];
	if reader.read_exact(&mut header).is_err() || &header[..3] != b"ID3" {
		reader.seek(SeekFrom::Start(0))?;
		return Ok(0);
	}

	let flags = header[5];
	let size = unsynch_u32(u32::from_be_bytes([header[6], header[7], header[8], header[9]]));

	let mut tag_size = ID3V2_HEADER_SIZE + u64::from(size);
	if flags & ID3V2_FOOTER_FLAG == ID3V2_FOOTER_FLAG {
		tag_size += ID3V2_HEADER_SIZE;
	}

	log::debug!("ID3v2: Skipping {tag_size} byte tag");
	reader.seek(SeekFrom::Start(tag_size))?;
	Ok(tag_size)
}
