//! Stream information for True Audio files

use crate::error::Result;
use crate::id3::skip_id3v2;
use crate::macros::decode_err;
use crate::metadata::Metadata;

use std::fs::File;
use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

const TTA_MARKER: [u8; 4] = *b"TTA1";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct TtaHeader {
	pub(crate) channels: u16,
	pub(crate) bits_per_sample: u16,
	pub(crate) sample_rate: u32,
	// Samples per channel
	pub(crate) data_length: u32,
}

impl TtaHeader {
	pub(crate) fn read<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		let mut marker = [0; 4];
		reader.read_exact(&mut marker)?;
		if marker != TTA_MARKER {
			decode_err!(@BAIL "File missing \"TTA1\" marker");
		}

		let _format = reader.read_u16::<LittleEndian>()?;
		let channels = reader.read_u16::<LittleEndian>()?;
		let bits_per_sample = reader.read_u16::<LittleEndian>()?;
		let sample_rate = reader.read_u32::<LittleEndian>()?;
		let data_length = reader.read_u32::<LittleEndian>()?;

		if sample_rate == 0 {
			decode_err!(@BAIL "TTA header has a sample rate of 0");
		}

		Ok(Self {
			channels,
			bits_per_sample,
			sample_rate,
			data_length,
		})
	}

	pub(crate) fn length_millis(&self) -> u64 {
		u64::from(self.data_length) * 1000 / u64::from(self.sample_rate)
	}
}

/// Fills in the computed fields of a True Audio file
///
/// A missing or malformed stream header is logged and otherwise ignored.
pub(crate) fn read_info(metadata: &mut Metadata, file: &mut File) -> Result<()> {
	skip_id3v2(file)?;

	let header = match TtaHeader::read(file) {
		Ok(header) => header,
		Err(err) => {
			log::warn!("TTA: Unable to read stream header: {err}");
			return Ok(());
		},
	};

	log::debug!("TTA: {header:?}");

	metadata.set("~channels", header.channels.to_string());
	metadata.set("~bits_per_sample", header.bits_per_sample.to_string());
	metadata.set("~sample_rate", header.sample_rate.to_string());
	metadata.set("~length", header.length_millis().to_string());

	Ok(())
}
