//! ID3v1 trailers
//!
//! An ID3v1 tag occupies the last 128 bytes of a file. It is never read, only derived from the
//! ID3v2 tag that was just written, or removed.

use super::pairs::split_number_pair;
use crate::error::Result;
use crate::util::text::{self, latin1_encode_lossy};

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::WriteBytesExt;
use id3::frame::Content;
use id3::{Tag, TagLike};

pub(crate) const ID3V1_TAG_MARKER: [u8; 3] = *b"TAG";
pub(crate) const ID3V1_TAG_SIZE: u64 = 128;

const NO_GENRE: u8 = 255;

/// The genres an ID3v1 tag can reference by index
pub(crate) const GENRES: &[&str] = &[
	"Blues",
	"Classic Rock",
	"Country",
	"Dance",
	"Disco",
	"Funk",
	"Grunge",
	"Hip-Hop",
	"Jazz",
	"Metal",
	"New Age",
	"Oldies",
	"Other",
	"Pop",
	"R&B",
	"Rap",
	"Reggae",
	"Rock",
	"Techno",
	"Industrial",
	"Alternative",
	"Ska",
	"Death Metal",
	"Pranks",
	"Soundtrack",
	"Euro-Techno",
	"Ambient",
	"Trip-Hop",
	"Vocal",
	"Jazz+Funk",
	"Fusion",
	"Trance",
	"Classical",
	"Instrumental",
	"Acid",
	"House",
	"Game",
	"Sound Clip",
	"Gospel",
	"Noise",
	"AlternRock",
	"Bass",
	"Soul",
	"Punk",
	"Space",
	"Meditative",
	"Instrumental Pop",
	"Instrumental Rock",
	"Ethnic",
	"Gothic",
	"Darkwave",
	"Techno-Industrial",
	"Electronic",
	"Pop-Folk",
	"Eurodance",
	"Dream",
	"Southern Rock",
	"Comedy",
	"Cult",
	"Gangsta",
	"Top 40",
	"Christian Rap",
	"Pop/Funk",
	"Jungle",
	"Native American",
	"Cabaret",
	"New Wave",
	"Psychadelic",
	"Rave",
	"Showtunes",
	"Trailer",
	"Lo-Fi",
	"Tribal",
	"Acid Punk",
	"Acid Jazz",
	"Polka",
	"Retro",
	"Musical",
	"Rock & Roll",
	"Hard Rock",
	"Folk",
	"Folk-Rock",
	"National Folk",
	"Swing",
	"Fast Fusion",
	"Bebob",
	"Latin",
	"Revival",
	"Celtic",
	"Bluegrass",
	"Avantgarde",
	"Gothic Rock",
	"Progressive Rock",
	"Psychedelic Rock",
	"Symphonic Rock",
	"Slow Rock",
	"Big Band",
	"Chorus",
	"Easy Listening",
	"Acoustic",
	"Humour",
	"Speech",
	"Chanson",
	"Opera",
	"Chamber Music",
	"Sonata",
	"Symphony",
	"Booty Bass",
	"Primus",
	"Porn Groove",
	"Satire",
	"Slow Jam",
	"Club",
	"Tango",
	"Samba",
	"Folklore",
	"Ballad",
	"Power Ballad",
	"Rhythmic Soul",
	"Freestyle",
	"Duet",
	"Punk Rock",
	"Drum Solo",
	"A capella",
	"Euro-House",
	"Dance Hall",
	"Goa",
	"Drum & Bass",
	"Club-House",
	"Hardcore",
	"Terror",
	"Indie",
	"BritPop",
	"Negerpunk",
	"Polsk Punk",
	"Beat",
	"Christian Gangsta Rap",
	"Heavy Metal",
	"Black Metal",
	"Crossover",
	"Contemporary Christian",
	"Christian Rock",
	"Merengue",
	"Salsa",
	"Thrash Metal",
	"Anime",
	"JPop",
	"Synthpop",
];

/// The fields of an ID3v1 tag, borrowed from an ID3v2 tag
#[derive(Default, Debug, PartialEq, Eq)]
pub(crate) struct Id3v1Fields<'a> {
	pub(crate) title: Option<&'a str>,
	pub(crate) artist: Option<&'a str>,
	pub(crate) album: Option<&'a str>,
	pub(crate) year: Option<u16>,
	pub(crate) comment: Option<&'a str>,
	pub(crate) track_number: Option<u8>,
	pub(crate) genre: Option<u8>,
}

fn first_text<'a>(tag: &'a Tag, frame_id: &str) -> Option<&'a str> {
	let text = tag.get(frame_id)?.content().text()?;
	text::split_values(text).next()
}

fn genre_index(genre: &str) -> Option<u8> {
	// Numeric references, either bare or in the ID3v2.3 "(17)" form
	let numeric = genre
		.strip_prefix('(')
		.and_then(|g| g.strip_suffix(')'))
		.unwrap_or(genre);
	if let Ok(index) = numeric.parse::<u8>() {
		return (usize::from(index) < GENRES.len()).then_some(index);
	}

	GENRES
		.iter()
		.position(|g| g.eq_ignore_ascii_case(genre))
		.and_then(|index| u8::try_from(index).ok())
}

impl<'a> Id3v1Fields<'a> {
	pub(crate) fn from_tag(tag: &'a Tag) -> Self {
		let year = first_text(tag, "TDRC")
			.or_else(|| first_text(tag, "TYER"))
			.and_then(|date| date.get(..4))
			.and_then(|year| year.parse().ok());

		let comment = tag.frames().find_map(|frame| match frame.content() {
			Content::Comment(comment) if comment.description.is_empty() => {
				text::split_values(&comment.text).next()
			},
			_ => None,
		});

		let track_number = first_text(tag, "TRCK")
			.and_then(|pair| split_number_pair(pair).0.trim().parse().ok());

		Self {
			title: first_text(tag, "TIT2"),
			artist: first_text(tag, "TPE1"),
			album: first_text(tag, "TALB"),
			year,
			comment,
			track_number,
			genre: first_text(tag, "TCON").and_then(genre_index),
		}
	}

	pub(crate) fn encode(&self) -> Result<Vec<u8>> {
		fn resize_string(value: Option<&str>, size: usize) -> Vec<u8> {
			let mut out = vec![0; size];
			if let Some(value) = value {
				for (slot, b) in out.iter_mut().zip(latin1_encode_lossy(value)) {
					*slot = b;
				}
			}

			out
		}

		let mut writer = Vec::with_capacity(ID3V1_TAG_SIZE as usize);

		writer.write_all(&ID3V1_TAG_MARKER)?;
		writer.write_all(&resize_string(self.title, 30))?;
		writer.write_all(&resize_string(self.artist, 30))?;
		writer.write_all(&resize_string(self.album, 30))?;

		let year = match self.year {
			Some(year) => format!("{:04}", year.min(9999)),
			None => String::new(),
		};
		writer.write_all(&resize_string(Some(year.as_str()), 4))?;

		// ID3v1.1, the last two bytes of the comment hold the track number
		writer.write_all(&resize_string(self.comment, 28))?;
		writer.write_u8(0)?;
		writer.write_u8(self.track_number.unwrap_or(0))?;
		writer.write_u8(self.genre.unwrap_or(NO_GENRE))?;

		Ok(writer)
	}
}

// Seeks to where a trailer would be written, returning whether one already exists
pub(crate) fn find_id3v1(file: &mut File) -> Result<bool> {
	let len = file.seek(SeekFrom::End(0))?;
	if len < ID3V1_TAG_SIZE {
		return Ok(false);
	}

	file.seek(SeekFrom::Start(len - ID3V1_TAG_SIZE))?;

	let mut marker = [0; 3];
	file.read_exact(&mut marker)?;

	if marker == ID3V1_TAG_MARKER {
		file.seek(SeekFrom::Start(len - ID3V1_TAG_SIZE))?;
		return Ok(true);
	}

	file.seek(SeekFrom::End(0))?;
	Ok(false)
}

/// Writes a trailer derived from `tag`, or removes an existing one if `tag` is `None`
pub(crate) fn update_trailer(path: &Path, tag: Option<&Tag>) -> Result<()> {
	let Some(tag) = tag else {
		if id3::v1::Tag::remove_from_path(path)? {
			log::debug!("ID3v1: Removed trailer");
		}

		return Ok(());
	};

	let mut file = OpenOptions::new().read(true).write(true).open(path)?;

	// Replaces an existing trailer in place
	find_id3v1(&mut file)?;

	log::debug!("ID3v1: Writing trailer");
	let encoded = Id3v1Fields::from_tag(tag).encode()?;
	file.write_all(&encoded)?;

	Ok(())
}
