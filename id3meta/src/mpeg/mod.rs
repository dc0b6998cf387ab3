//! Stream information for MPEG audio files

pub(crate) mod header;

use crate::error::Result;
use crate::id3::skip_id3v2;
use crate::metadata::Metadata;

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};

/// Fills in the computed fields of an MPEG audio file from its first frame header
///
/// The length is estimated from the first frame's bitrate. A file without any valid frame is
/// not an error, only the format name is kept.
pub(crate) fn read_info(metadata: &mut Metadata, file: &mut File) -> Result<()> {
	let mut reader = BufReader::new(file);

	skip_id3v2(&mut reader)?;
	let Some((audio_start, header)) = header::find_first_header(&mut reader)? else {
		log::warn!("MPEG: File contains no valid frames");
		return Ok(());
	};

	log::debug!("MPEG: First frame found at offset {audio_start}");

	metadata.set(
		"~format",
		format!("MPEG-{} Layer {}", header.version, header.layer as u8),
	);
	metadata.set("~bitrate", header.bitrate.to_string());
	metadata.set("~sample_rate", header.sample_rate.to_string());
	metadata.set("~channels", header.channel_mode.channels().to_string());

	// kbps is bits per millisecond
	let file_len = reader.seek(SeekFrom::End(0))?;
	let audio_len = file_len.saturating_sub(audio_start);
	metadata.set(
		"~length",
		(audio_len * 8 / u64::from(header.bitrate)).to_string(),
	);

	Ok(())
}
