use crate::util::{ape_tag, mpeg_frames, temp_file};

use id3meta::config::Settings;
use id3meta::{FileFormat, Id3File, Metadata};

fn contains_ape_tag(contents: &[u8]) -> bool {
	contents.windows(8).any(|window| window == b"APETAGEX")
}

#[test_log::test]
fn read_stream_info() {
	let file = temp_file("mp3", &mpeg_frames(10));

	let id3_file = Id3File::for_path(file.path()).unwrap();
	assert_eq!(id3_file.format(), &FileFormat::MPEG);

	let metadata = id3_file.load(file.path(), &Settings::default()).unwrap();
	assert_eq!(metadata.get("~format"), Some("MPEG-1 Layer 3"));
	assert_eq!(metadata.get("~bitrate"), Some("128"));
	assert_eq!(metadata.get("~sample_rate"), Some("44100"));
	assert_eq!(metadata.get("~channels"), Some("2"));
	// 4170 bytes at 128 kbps
	assert_eq!(metadata.get("~length"), Some("260"));

	// There is no tag, so only computed fields exist
	assert!(metadata.raw_items().all(|(name, _)| name.starts_with('~')));
}

#[test_log::test]
fn read_stream_info_after_tag_and_junk() {
	let mut contents = vec![0u8; 7];
	contents.extend(mpeg_frames(4));
	let file = temp_file("mp2", &contents);

	let mut metadata = Metadata::new();
	metadata.add("title", "Foo title");

	let id3_file = Id3File::for_path(file.path()).unwrap();
	id3_file
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let metadata = id3_file.load(file.path(), &Settings::default()).unwrap();
	assert_eq!(metadata.get("title"), Some("Foo title"));
	assert_eq!(metadata.get("~format"), Some("MPEG-1 Layer 3"));
	assert_eq!(metadata.get("~bitrate"), Some("128"));
}

#[test_log::test]
fn no_valid_frames() {
	let file = temp_file("mp3", &[0u8; 64]);

	let metadata = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(metadata.get("~format"), Some("MPEG-1 Audio"));
	assert!(!metadata.contains("~bitrate"));
}

#[test_log::test]
fn write_and_remove_id3v1() {
	let frames = mpeg_frames(4);
	let file = temp_file("mp3", &frames);

	let mut metadata = Metadata::new();
	metadata.add("title", "Foo title");
	metadata.add("artist", "Bar artist");

	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let contents = std::fs::read(file.path()).unwrap();
	let trailer = &contents[contents.len() - 128..];
	assert_eq!(&trailer[..3], b"TAG");
	assert_eq!(&trailer[3..12], b"Foo title");
	assert_eq!(&trailer[33..43], b"Bar artist");

	// Saving again must not stack trailers
	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();
	let resaved = std::fs::read(file.path()).unwrap();
	assert_eq!(&resaved[resaved.len() - 128..resaved.len() - 125], b"TAG");
	assert_ne!(&resaved[resaved.len() - 256..resaved.len() - 253], b"TAG");

	Id3File::mpeg()
		.save(
			file.path(),
			&metadata,
			&Settings::new().write_id3v1(false),
		)
		.unwrap();

	let contents = std::fs::read(file.path()).unwrap();
	assert!(contents.ends_with(&frames));
}

#[test_log::test]
fn remove_ape_tag() {
	let frames = mpeg_frames(4);
	let mut contents = frames.clone();
	contents.extend(ape_tag());
	let file = temp_file("mp3", &contents);

	let settings = Settings::new()
		.remove_ape_from_mp3(true)
		.write_id3v1(false);
	Id3File::mpeg()
		.save(file.path(), &Metadata::new(), &settings)
		.unwrap();

	let contents = std::fs::read(file.path()).unwrap();
	assert!(!contains_ape_tag(&contents));
	assert!(contents.ends_with(&frames));
}

#[test_log::test]
fn remove_ape_tag_before_id3v1() {
	let mut contents = mpeg_frames(4);
	contents.extend(ape_tag());
	let file = temp_file("mp3", &contents);

	let settings = Settings::new().remove_ape_from_mp3(true);
	Id3File::mpeg()
		.save(file.path(), &Metadata::new(), &settings)
		.unwrap();

	let contents = std::fs::read(file.path()).unwrap();
	assert!(!contains_ape_tag(&contents));
	assert_eq!(&contents[contents.len() - 128..contents.len() - 125], b"TAG");
}

#[test_log::test]
fn keep_ape_tag_by_default() {
	let mut contents = mpeg_frames(4);
	contents.extend(ape_tag());
	let file = temp_file("mp3", &contents);

	Id3File::mpeg()
		.save(file.path(), &Metadata::new(), &Settings::default())
		.unwrap();

	let contents = std::fs::read(file.path()).unwrap();
	assert!(contains_ape_tag(&contents));
}
