use std::io::Write as _;

use tempfile::NamedTempFile;

/// MPEG-1 Layer 3, 128 kbps, 44.1 kHz, joint stereo
pub const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
// 144 * 128000 / 44100, without padding
const MPEG_FRAME_LEN: usize = 417;

/// A stream of silent MPEG frames
pub fn mpeg_frames(count: usize) -> Vec<u8> {
	let mut frame = MPEG_FRAME_HEADER.to_vec();
	frame.resize(MPEG_FRAME_LEN, 0);

	frame.repeat(count)
}

/// A TTA stream header for 2 seconds of 16-bit stereo at 44.1 kHz, followed by some "audio"
pub fn tta_stream() -> Vec<u8> {
	let mut stream = b"TTA1".to_vec();
	stream.extend(1u16.to_le_bytes());
	stream.extend(2u16.to_le_bytes());
	stream.extend(16u16.to_le_bytes());
	stream.extend(44100u32.to_le_bytes());
	stream.extend(88200u32.to_le_bytes());
	stream.extend([0u8; 4]);
	stream.extend([0x55u8; 64]);
	stream
}

/// An empty APEv2 tag, with a header
pub fn ape_tag() -> Vec<u8> {
	let mut block = b"APETAGEX".to_vec();
	block.extend(2000u32.to_le_bytes());
	block.extend(32u32.to_le_bytes());
	block.extend(0u32.to_le_bytes());
	block.extend((1u32 << 31).to_le_bytes());
	block.extend([0u8; 8]);

	block.repeat(2)
}

/// Create a temporary file with the given extension and contents
pub fn temp_file(extension: &str, contents: &[u8]) -> NamedTempFile {
	let mut file = tempfile::Builder::new()
		.suffix(&format!(".{extension}"))
		.tempfile()
		.unwrap();

	file.write_all(contents).unwrap();
	file.flush().unwrap();
	file
}
