use crate::util::{ape_tag, temp_file, tta_stream};

use id3meta::config::Settings;
use id3meta::{FileFormat, Id3File, Metadata};

#[test_log::test]
fn read_stream_info() {
	let file = temp_file("tta", &tta_stream());

	let id3_file = Id3File::for_path(file.path()).unwrap();
	assert_eq!(id3_file.format(), &FileFormat::TRUE_AUDIO);

	let metadata = id3_file.load(file.path(), &Settings::default()).unwrap();
	assert_eq!(metadata.get("~format"), Some("The True Audio"));
	assert_eq!(metadata.get("~channels"), Some("2"));
	assert_eq!(metadata.get("~sample_rate"), Some("44100"));
	assert_eq!(metadata.get("~bits_per_sample"), Some("16"));
	assert_eq!(metadata.get("~length"), Some("2000"));
}

#[test_log::test]
fn read_after_tag() {
	let file = temp_file("tta", &tta_stream());

	let mut metadata = Metadata::new();
	metadata.add("artist", "Foo artist");
	metadata.add("album", "Bar album");

	Id3File::true_audio()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let loaded = Id3File::true_audio()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(loaded.get("artist"), Some("Foo artist"));
	assert_eq!(loaded.get("album"), Some("Bar album"));
	assert_eq!(loaded.get("~sample_rate"), Some("44100"));
}

#[test_log::test]
fn missing_stream_header() {
	let file = temp_file("tta", b"not a tta stream");

	let metadata = Id3File::true_audio()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(metadata.get("~format"), Some("The True Audio"));
	assert!(!metadata.contains("~sample_rate"));
}

#[test_log::test]
fn ape_tags_are_kept() {
	let mut contents = tta_stream();
	contents.extend(ape_tag());
	let file = temp_file("tta", &contents);

	let settings = Settings::new()
		.remove_ape_from_mp3(true)
		.write_id3v1(false);
	Id3File::true_audio()
		.save(file.path(), &Metadata::new(), &settings)
		.unwrap();

	let contents = std::fs::read(file.path()).unwrap();
	assert!(contents.ends_with(&ape_tag()));
}
