use crate::util::{mp3_file, read_tag};

use id3meta::config::Settings;
use id3meta::{Id3File, Image, Metadata, TextEncoding};

use id3::TagLike;

const CURATED_FIELDS: &[(&str, &str)] = &[
	("artist", "Foo artist"),
	("albumartist", "Foo album artist"),
	("conductor", "Foo conductor"),
	("remixer", "Foo remixer"),
	("composer", "Foo composer"),
	("genre", "Rock"),
	("album", "Bar album"),
	("grouping", "Bar grouping"),
	("title", "Baz title"),
	("subtitle", "Baz subtitle"),
	("discsubtitle", "Baz disc subtitle"),
	("lyricist", "Qux lyricist"),
	("compilation", "1"),
	("date", "2004-05-06"),
	("originaldate", "1999"),
	("mood", "Happy"),
	("media", "CD"),
	("bpm", "120"),
	("website", "https://example.com/artist"),
	("isrc", "USABC0400001"),
	("encodedby", "Qux encoder"),
	("copyright", "2004 Qux"),
	("albumsort", "Bar album, The"),
	("artistsort", "Foo artist, The"),
	("titlesort", "Baz title, The"),
	("label", "Qux records"),
	("musicbrainz_artistid", "a74b1b7f-71a5-4011-9441-d0b5e4122711"),
	("musicbrainz_albumid", "4f5a1b7f-71a5-4011-9441-d0b5e4122711"),
	("musicbrainz_albumartistid", "89ad4ac3-39f7-470e-963a-56509c546377"),
	("releasetype", "album"),
	("releasestatus", "official"),
	("musicbrainz_trmid", "f22ec3d5-1e66-4e01-a8b0-ad2b4e2fef1d"),
	("musicbrainz_discid", "lwHl8fGzJyLXQR33ug60E8jhf4k-"),
	("releasecountry", "GB"),
	("musicip_puid", "a2d3a1e6-2c8b-4b3b-9b9b-9f5a0a0a0a0a"),
	("albumartistsort", "Foo album artist, The"),
	("catalognumber", "QUX-001"),
	("barcode", "0123456789012"),
	("asin", "B000002UAL"),
	("musicip_fingerprint", "fingerprint"),
	("engineer", "Foo engineer"),
	("arranger", "Foo arranger"),
	("producer", "Foo producer"),
	("djmixer", "Foo DJ"),
	("mixer", "Foo mixer"),
	("performer:guitar", "Foo guitarist"),
	("performer:vocals", "Foo singer"),
	("comment:", "Nice"),
	("comment:note", "Noted"),
	("lyrics:", "La la la"),
	("musicbrainz_trackid", "b1a9c0e9-d987-4042-ae91-78d6a3267d69"),
	("tracknumber", "3"),
	("totaltracks", "12"),
	("discnumber", "1"),
	("totaldiscs", "2"),
	("~rating", "3"),
];

fn stored_fields(metadata: &Metadata) -> Vec<(&str, &[String])> {
	let mut fields = metadata
		.raw_items()
		.filter(|(name, _)| !name.starts_with('~') || *name == "~rating")
		.collect::<Vec<_>>();
	fields.sort_unstable();
	fields
}

#[test_log::test]
fn every_curated_field() {
	let mut metadata = Metadata::new();
	for (name, value) in CURATED_FIELDS {
		metadata.add(*name, *value);
	}
	metadata.add("artist", "Second artist");
	metadata.add_image(Image::new("image/png", vec![0x89, b'P', b'N', b'G']));

	for encoding in [TextEncoding::UTF16, TextEncoding::UTF8, TextEncoding::Latin1] {
		let file = mp3_file();
		let settings = Settings::new().id3v2_encoding(encoding);

		Id3File::mpeg()
			.save(file.path(), &metadata, &settings)
			.unwrap();
		let loaded = Id3File::mpeg().load(file.path(), &settings).unwrap();

		assert_eq!(stored_fields(&loaded), stored_fields(&metadata));
		assert_eq!(loaded.images(), metadata.images());
	}
}

#[test_log::test]
fn track_and_disc_numbers() {
	let file = mp3_file();

	let mut metadata = Metadata::new();
	metadata.add("tracknumber", "3");
	metadata.add("totaltracks", "12");
	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let tag = read_tag(&file);
	assert_eq!(tag.get("TRCK").and_then(|f| f.content().text()), Some("3/12"));

	let mut metadata = Metadata::new();
	metadata.add("tracknumber", "5");
	let settings = Settings::new().clear_existing_tags(true);
	Id3File::mpeg()
		.save(file.path(), &metadata, &settings)
		.unwrap();

	let tag = read_tag(&file);
	assert_eq!(tag.get("TRCK").and_then(|f| f.content().text()), Some("5"));

	let loaded = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(loaded.get("tracknumber"), Some("5"));
	assert!(!loaded.contains("totaltracks"));
}

#[test_log::test]
fn existing_frames_are_amended() {
	let file = mp3_file();

	let mut metadata = Metadata::new();
	metadata.add("artist", "Foo artist");
	metadata.add("album", "Bar album");
	metadata.add("~id3:TKEY", "Am");
	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let mut metadata = Metadata::new();
	metadata.add("artist", "New artist");
	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let loaded = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert_eq!(loaded.get_all("artist"), ["New artist"]);
	assert_eq!(loaded.get("album"), Some("Bar album"));

	// Unmapped frames survive, but aren't loaded
	let tag = read_tag(&file);
	assert_eq!(tag.get("TKEY").and_then(|f| f.content().text()), Some("Am"));
	assert!(loaded.raw_items().all(|(name, _)| !name.starts_with("~id3:")));
}

#[test_log::test]
fn escaped_free_text() {
	let file = mp3_file();

	let mut metadata = Metadata::new();
	metadata.add("~id3:TXXX:MyField", "value");
	metadata.add("unknownfield", "dropped");
	Id3File::mpeg()
		.save(file.path(), &metadata, &Settings::default())
		.unwrap();

	let tag = read_tag(&file);
	let extended = tag.extended_texts().collect::<Vec<_>>();
	assert_eq!(extended.len(), 1);
	assert_eq!(extended[0].description, "MyField");
	assert_eq!(extended[0].value, "value");

	let loaded = Id3File::mpeg()
		.load(file.path(), &Settings::default())
		.unwrap();
	assert!(!loaded.contains("~id3:TXXX:MyField"));
	assert!(!loaded.contains("unknownfield"));
}

#[test_log::test]
fn supported_fields() {
	assert!(Id3File::supports_tag("performer:guitar"));
	assert!(Id3File::supports_tag("artist"));
	assert!(Id3File::supports_tag("asin"));
	assert!(!Id3File::supports_tag("unknownfield"));
	assert!(!Id3File::supports_tag("lyrics"));
	assert!(!Id3File::supports_tag("engineer"));
}
