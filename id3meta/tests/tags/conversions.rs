use crate::util::{mp3_file, mp3_file_with, read_tag};

use id3meta::config::Settings;
use id3meta::{Id3File, Metadata};

use id3::frame::{Content, Unknown};
use id3::{Frame, Tag, TagLike, Version};

// The codec can't build `X***` text frames, they are written as a raw Latin-1 body
fn legacy_frame(frame_id: &str, value: &str) -> Frame {
	let mut data = vec![0];
	data.extend(value.bytes());

	Frame::with_content(
		frame_id,
		Content::Unknown(Unknown {
			data,
			version: Version::Id3v23,
		}),
	)
}

#[test_log::test]
fn write_id3v23() {
	let file = mp3_file();

	let mut metadata = Metadata::new();
	metadata.add("title", "Foo title");
	metadata.add("date", "2004-05-06");
	metadata.add("originaldate", "1999");
	metadata.add("artistsort", "Foo artist, The");
	metadata.add("producer", "Foo producer");
	metadata.add("mood", "Happy");

	let settings = Settings::new().write_id3v23(true);
	Id3File::mpeg()
		.save(file.path(), &metadata, &settings)
		.unwrap();

	let tag = read_tag(&file);
	assert_eq!(tag.version(), Version::Id3v23);
	assert_eq!(tag.get("TYER").and_then(|f| f.content().text()), Some("2004"));
	assert!(tag.get("TDRC").is_none());
	assert!(tag.get("TMOO").is_none());
	assert!(tag.get("IPLS").is_some());

	let loaded = Id3File::mpeg().load(file.path(), &settings).unwrap();
	assert_eq!(loaded.get("title"), Some("Foo title"));
	assert_eq!(loaded.get("date"), Some("2004-05-06"));
	assert_eq!(loaded.get("originaldate"), Some("1999"));
	assert_eq!(loaded.get("artistsort"), Some("Foo artist, The"));
	assert_eq!(loaded.get("producer"), Some("Foo producer"));
	assert!(!loaded.contains("mood"));
}

#[test_log::test]
fn slashes_survive_id3v23() {
	let file = mp3_file();

	let mut metadata = Metadata::new();
	metadata.add("artist", "AC/DC");
	metadata.add("composer", "Lennon/McCartney");
	metadata.add("title", "Foo title");

	let settings = Settings::new().write_id3v23(true);
	Id3File::mpeg()
		.save(file.path(), &metadata, &settings)
		.unwrap();

	let loaded = Id3File::mpeg().load(file.path(), &settings).unwrap();
	assert_eq!(loaded.get_all("artist"), ["AC/DC"]);
	assert_eq!(loaded.get_all("composer"), ["Lennon/McCartney"]);

	// Resaving as ID3v2.4 keeps the values intact
	Id3File::mpeg()
		.save(file.path(), &loaded, &Settings::default())
		.unwrap();

	let loaded = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(loaded.get_all("artist"), ["AC/DC"]);
	assert_eq!(loaded.get_all("composer"), ["Lennon/McCartney"]);
}

#[test_log::test]
fn id3v24_drops_legacy_frames() {
	let mut tag = Tag::new();
	tag.add_frame(legacy_frame("XSOP", "Foo"));

	let file = mp3_file_with(&tag, Version::Id3v23);
	Id3File::mpeg()
		.save(file.path(), &Metadata::new(), &Settings::default())
		.unwrap();

	let tag = read_tag(&file);
	assert_eq!(tag.version(), Version::Id3v24);
	assert!(tag.get("XSOP").is_none());
	assert_eq!(tag.get("TSOP").and_then(|f| f.content().text()), Some("Foo"));
}

#[test_log::test]
fn legacy_artist_sort() {
	let mut tag = Tag::new();
	tag.add_frame(legacy_frame("XSOP", "Foo"));

	let file = mp3_file_with(&tag, Version::Id3v23);
	let loaded = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(loaded.get_all("artistsort"), ["Foo"]);

	// The newer frame wins
	tag.add_frame(Frame::text("TSOP", "Bar"));

	let file = mp3_file_with(&tag, Version::Id3v23);
	let loaded = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(loaded.get_all("artistsort"), ["Bar"]);
}

#[test_log::test]
fn clear_existing_tags() {
	let mut tag = Tag::new();
	tag.add_frame(Frame::text("TPE1", "Foo artist"));
	tag.add_frame(Frame::text("TKEY", "Am"));

	let file = mp3_file_with(&tag, Version::Id3v24);

	let mut metadata = Metadata::new();
	metadata.add("title", "Foo title");
	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::new().clear_existing_tags(true))
		.unwrap();

	let tag = read_tag(&file);
	assert!(tag.get("TPE1").is_none());
	assert!(tag.get("TKEY").is_none());
	assert_eq!(tag.get("TIT2").and_then(|f| f.content().text()), Some("Foo title"));
}

#[test_log::test]
fn true_audio_round_trip() {
	let mut file = tempfile::Builder::new().suffix(".tta").tempfile().unwrap();
	std::io::Write::write_all(&mut file, b"TTA1").unwrap();

	let mut metadata = Metadata::new();
	metadata.add("album", "Bar album");

	let tta = Id3File::for_path(file.path()).unwrap();
	tta.save(file.path(), &metadata, &Settings::default()).unwrap();

	let loaded = tta.load(file.path(), &Settings::default()).unwrap();
	assert_eq!(loaded.get("album"), Some("Bar album"));
	assert_eq!(loaded.get("~format"), Some("The True Audio"));
}
