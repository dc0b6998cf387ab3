use std::io::Write as _;

use id3::{Tag, Version};
use tempfile::NamedTempFile;

/// An MP3 file holding a few silent MPEG-1 Layer 3 frames and no tags
pub fn mp3_file() -> NamedTempFile {
	let mut frame = vec![0xFF, 0xFB, 0x90, 0x64];
	frame.resize(417, 0);

	let mut file = tempfile::Builder::new().suffix(".mp3").tempfile().unwrap();
	file.write_all(&frame.repeat(4)).unwrap();
	file.flush().unwrap();
	file
}

/// An MP3 file holding `tag`, written as `version`
pub fn mp3_file_with(tag: &Tag, version: Version) -> NamedTempFile {
	let file = mp3_file();
	tag.write_to_path(file.path(), version).unwrap();
	file
}

/// The ID3v2 tag of a file, as the frame codec sees it
pub fn read_tag(file: &NamedTempFile) -> Tag {
	Tag::read_from_path(file.path()).unwrap()
}
