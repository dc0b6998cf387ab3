use crate::error::Result;

use std::fmt::{Display, Formatter};
use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

// [version][layer][bitrate index], in kbps. MPEG-2 and 2.5 share a table.
const BITRATES: [[[u32; 16]; 3]; 2] = [
	[
		[
			0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
		],
		[
			0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
		],
		[
			0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
		],
	],
	[
		[
			0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
		],
		[
			0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
		],
		[
			0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
		],
	],
];

// [version][sample rate index]
const SAMPLE_RATES: [[u32; 3]; 3] = [
	[44100, 48000, 32000],
	[22050, 24000, 16000],
	[11025, 12000, 8000],
];

pub(crate) fn verify_frame_sync(frame_sync: [u8; 2]) -> bool {
	frame_sync[0] == 0xFF && frame_sync[1] >> 5 == 0b111
}

// Searches for a frame sync (11 set bits) in the reader.
// The search starts at the current position and returns the index relative to it.
//
// Note that the search searches in 8 bit steps, i.e. the first 8 bits need to be byte aligned.
pub(crate) fn search_for_frame_sync<R>(input: &mut R) -> std::io::Result<Option<u64>>
where
	R: Read,
{
	let mut iterator = input.bytes();
	let mut buffer = [0u8; 2];

	// Each iteration expects buffer 0 to be set by the previous one
	if let Some(byte) = iterator.next() {
		buffer[0] = byte?;
	}

	for (index, byte) in iterator.enumerate() {
		buffer[1] = byte?;
		if verify_frame_sync(buffer) {
			return Ok(Some(index as u64));
		}

		buffer[0] = buffer[1];
	}

	Ok(None)
}

/// Finds the first valid frame header at or after the reader's position
///
/// Frame syncs that aren't followed by a valid header are skipped.
pub(crate) fn find_first_header<R>(reader: &mut R) -> Result<Option<(u64, Header)>>
where
	R: Read + Seek,
{
	loop {
		let search_start = reader.stream_position()?;
		let Some(relative) = search_for_frame_sync(reader)? else {
			return Ok(None);
		};

		let frame_start = search_start + relative;
		reader.seek(SeekFrom::Start(frame_start))?;

		let Ok(data) = reader.read_u32::<BigEndian>() else {
			return Ok(None);
		};

		if let Some(header) = Header::read(data) {
			return Ok(Some((frame_start, header)));
		}

		log::trace!("MPEG: Skipping invalid frame header at {frame_start}");
		reader.seek(SeekFrom::Start(frame_start + 1))?;
	}
}

/// MPEG Audio version
#[derive(Default, PartialEq, Eq, Copy, Clone, Debug)]
pub(crate) enum MpegVersion {
	#[default]
	V1,
	V2,
	V2_5,
}

impl Display for MpegVersion {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::V1 => f.write_str("1"),
			Self::V2 => f.write_str("2"),
			Self::V2_5 => f.write_str("2.5"),
		}
	}
}

/// MPEG layer
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Layer {
	Layer1 = 1,
	Layer2 = 2,
	#[default]
	Layer3 = 3,
}

/// Channel mode
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum ChannelMode {
	#[default]
	Stereo = 0,
	JointStereo = 1,
	/// Two independent mono channels
	DualChannel = 2,
	SingleChannel = 3,
}

impl ChannelMode {
	pub(crate) fn channels(self) -> u8 {
		match self {
			Self::SingleChannel => 1,
			_ => 2,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Header {
	pub(crate) sample_rate: u32,
	pub(crate) bitrate: u32,
	pub(crate) version: MpegVersion,
	pub(crate) layer: Layer,
	pub(crate) channel_mode: ChannelMode,
}

impl Header {
	pub(crate) fn read(data: u32) -> Option<Self> {
		if !verify_frame_sync([(data >> 24) as u8, (data >> 16) as u8]) {
			return None;
		}

		let version = match (data >> 19) & 0b11 {
			0b00 => MpegVersion::V2_5,
			0b10 => MpegVersion::V2,
			0b11 => MpegVersion::V1,
			_ => return None,
		};

		let version_index = if version == MpegVersion::V1 { 0 } else { 1 };

		let layer = match (data >> 17) & 0b11 {
			0b01 => Layer::Layer3,
			0b10 => Layer::Layer2,
			0b11 => Layer::Layer1,
			_ => {
				log::debug!("MPEG: Frame header uses a reserved layer");
				return None;
			},
		};

		let layer_index = (layer as usize).saturating_sub(1);

		let bitrate_index = (data >> 12) & 0xF;
		let bitrate = BITRATES[version_index][layer_index][bitrate_index as usize];
		if bitrate == 0 {
			return None;
		}

		let sample_rate = match (data >> 10) & 0b11 {
			// This is invalid
			0b11 => return None,
			sample_rate_index => SAMPLE_RATES[version as usize][sample_rate_index as usize],
		};

		let channel_mode = match (data >> 6) & 0b11 {
			0b00 => ChannelMode::Stereo,
			0b01 => ChannelMode::JointStereo,
			0b10 => ChannelMode::DualChannel,
			_ => ChannelMode::SingleChannel,
		};

		Some(Header {
			sample_rate,
			bitrate,
			version,
			layer,
			channel_mode,
		})
	}
}
