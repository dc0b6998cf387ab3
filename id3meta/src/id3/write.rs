use super::mappings::{
	COMMENT_PREFIX, ESCAPE_PREFIX, FRAME_MAP, FREE_TEXT_MAP, FrameKind, LYRICS_FIELD,
	MUSICBRAINZ_UFID_OWNER, PERFORMER_PREFIX, RATING_FIELD, TIPL_MAP, is_passthrough_text_frame,
};
use super::pairs::{NUMBER_PAIR_FRAMES, format_number_pair};
use super::rating;
use crate::config::Settings;
use crate::metadata::Metadata;
use crate::util::text::{self, TextEncoding};

use id3::frame::{
	Comment, Content, ExtendedText, InvolvedPeopleList, InvolvedPeopleListItem, Lyrics, Picture,
	PictureType, Popularimeter, UniqueFileIdentifier,
};
use id3::{Frame, Tag, TagLike};

// ISO-639-2 placeholder for an unknown language
const UNKNOWN_LANGUAGE: &str = "XXX";

const MUSICBRAINZ_TRACK_ID: &str = "musicbrainz_trackid";

/// Amends `tag` with the contents of `metadata`
///
/// Frames for fields that aren't present in `metadata` are left alone, unless
/// [`Settings::clear_existing_tags`] is set.
pub(crate) fn apply_metadata(tag: &mut Tag, metadata: &Metadata, settings: &Settings) {
	if settings.clear_existing_tags {
		log::debug!("ID3v2: Clearing existing frames");
		*tag = Tag::new();
	}

	if settings.remove_images_from_tags {
		tag.remove("APIC");
	}

	for &(frame_id, number_field, total_field) in NUMBER_PAIR_FRAMES {
		if let Some(number) = metadata.get(number_field) {
			let pair = format_number_pair(number, metadata.get(total_field));
			tag.add_frame(text_frame(frame_id, &[pair], TextEncoding::Latin1));
		}
	}

	if settings.save_images_to_tags {
		for image in metadata.images() {
			let picture = Picture {
				mime_type: image.mime_type.clone(),
				picture_type: PictureType::CoverFront,
				description: String::new(),
				data: image.data.clone(),
			};

			tag.add_frame(with_encoding(
				Frame::with_content("APIC", Content::Picture(picture)),
				TextEncoding::Latin1,
			));
		}
	}

	// Compilation flags are never merged with an existing frame
	tag.remove("TCMP");

	let mut writer = FieldWriter {
		tag,
		settings,
		performers: Vec::new(),
		involved: Vec::new(),
	};

	for (name, values) in metadata.raw_items() {
		if values.is_empty() || is_number_pair_field(name) {
			continue;
		}

		writer.write(name, values);
	}

	writer.finish();
}

fn is_number_pair_field(name: &str) -> bool {
	NUMBER_PAIR_FRAMES
		.iter()
		.any(|&(_, number, total)| name == number || name == total)
}

fn with_encoding(frame: Frame, encoding: TextEncoding) -> Frame {
	frame.set_encoding(Some(encoding.into()))
}

fn encode_text(values: &[String], encoding: TextEncoding) -> String {
	text::join_values(values.iter().map(|value| encoding.sanitize(value)))
}

fn text_frame(frame_id: &str, values: &[String], encoding: TextEncoding) -> Frame {
	with_encoding(
		Frame::with_content(frame_id, Content::Text(encode_text(values, encoding))),
		encoding,
	)
}

fn free_text_frame(description: &str, values: &[String], encoding: TextEncoding) -> Frame {
	let extended = ExtendedText {
		description: encoding.sanitize(description).into_owned(),
		value: encode_text(values, encoding),
	};

	with_encoding(
		Frame::with_content("TXXX", Content::ExtendedText(extended)),
		encoding,
	)
}

fn people_frame(frame_id: &str, items: Vec<InvolvedPeopleListItem>, encoding: TextEncoding) -> Frame {
	with_encoding(
		Frame::with_content(
			frame_id,
			Content::InvolvedPeopleList(InvolvedPeopleList { items }),
		),
		encoding,
	)
}

fn person(role: &str, name: &str) -> InvolvedPeopleListItem {
	InvolvedPeopleListItem {
		involvement: role.to_owned(),
		involvee: name.to_owned(),
	}
}

struct FieldWriter<'a> {
	tag: &'a mut Tag,
	settings: &'a Settings,
	performers: Vec<InvolvedPeopleListItem>,
	involved: Vec<InvolvedPeopleListItem>,
}

impl FieldWriter<'_> {
	fn encoding(&self) -> TextEncoding {
		self.settings.id3v2_encoding
	}

	fn write(&mut self, name: &str, values: &[String]) {
		let encoding = self.encoding();

		if let Some(role) = name.strip_prefix(PERFORMER_PREFIX) {
			self.performers
				.extend(values.iter().map(|value| person(role, value)));
		} else if let Some(description) = name.strip_prefix(COMMENT_PREFIX) {
			self.write_comment(description, values);
		} else if let Some(description) = lyrics_description(name) {
			self.write_lyrics(description, values);
		} else if let Some(role) = TIPL_MAP.role_for(name) {
			self.involved
				.extend(values.iter().map(|value| person(role, value)));
		} else if name == MUSICBRAINZ_TRACK_ID {
			let ufid = UniqueFileIdentifier {
				owner_identifier: MUSICBRAINZ_UFID_OWNER.to_owned(),
				identifier: values[0].as_bytes().to_vec(),
			};
			self.tag.add_frame(Frame::with_content(
				"UFID",
				Content::UniqueFileIdentifier(ufid),
			));
		} else if name == RATING_FIELD {
			self.write_rating(&values[0]);
		} else if let Some(frame_id) = FRAME_MAP.frame_id_for(name) {
			match FrameKind::of(frame_id) {
				FrameKind::Url => {
					self.tag.add_frame(Frame::with_content(
						frame_id,
						Content::Link(values[0].clone()),
					));
				},
				FrameKind::Text => {
					self.tag.add_frame(text_frame(frame_id, values, encoding));
				},
				// Plain `comment` fields are written through their `comment:` form
				FrameKind::Comment => log::trace!("ID3v2: Skipping field {name:?}"),
			}
		} else if let Some(description) = FREE_TEXT_MAP.description_for(name) {
			self.tag
				.add_frame(free_text_frame(description, values, encoding));
		} else if let Some(escaped) = name.strip_prefix(ESCAPE_PREFIX) {
			self.write_escaped(escaped, values);
		} else {
			log::trace!("ID3v2: Dropping unmappable field {name:?}");
		}
	}

	fn write_comment(&mut self, description: &str, values: &[String]) {
		let encoding = self.encoding();
		let comment = Comment {
			lang: UNKNOWN_LANGUAGE.to_owned(),
			description: encoding.sanitize(description).into_owned(),
			text: encode_text(values, encoding),
		};

		self.tag.add_frame(with_encoding(
			Frame::with_content("COMM", Content::Comment(comment)),
			encoding,
		));
	}

	// Values sharing a description replace each other, only the last one is kept
	fn write_lyrics(&mut self, description: &str, values: &[String]) {
		let encoding = self.encoding();
		for value in values {
			let lyrics = Lyrics {
				lang: UNKNOWN_LANGUAGE.to_owned(),
				description: encoding.sanitize(description).into_owned(),
				text: encoding.sanitize(value).into_owned(),
			};

			self.tag.add_frame(with_encoding(
				Frame::with_content("USLT", Content::Lyrics(lyrics)),
				encoding,
			));
		}
	}

	fn write_rating(&mut self, value: &str) {
		let Some(rating) = rating::to_popm(value, self.settings.rating_steps) else {
			return;
		};

		let user = self.settings.rating_user_email.as_ref();

		// Ratings of other users are kept, the play count of this user carries over
		let mut counter = None;
		for frame in self.tag.remove("POPM") {
			let previous = match frame.content() {
				Content::Popularimeter(popm) if popm.user == user => Some(popm.counter),
				_ => None,
			};

			match previous {
				Some(previous) => {
					counter.get_or_insert(previous);
				},
				None => {
					self.tag.add_frame(frame);
				},
			}
		}

		let popm = Popularimeter {
			user: user.to_owned(),
			rating,
			counter: counter.unwrap_or(0),
		};

		log::debug!("ID3v2: Writing rating {rating} for {user}");
		self.tag
			.add_frame(Frame::with_content("POPM", Content::Popularimeter(popm)));
	}

	fn write_escaped(&mut self, escaped: &str, values: &[String]) {
		let encoding = self.encoding();

		if let Some(description) = escaped.strip_prefix("TXXX:") {
			self.tag
				.add_frame(free_text_frame(description, values, encoding));
			return;
		}

		match escaped.get(..4).filter(|id| is_passthrough_text_frame(id)) {
			Some(frame_id) => {
				self.tag.add_frame(text_frame(frame_id, values, encoding));
			},
			None => log::trace!("ID3v2: Dropping unknown escaped frame {escaped:?}"),
		}
	}

	fn finish(self) {
		let encoding = self.encoding();

		if !self.performers.is_empty() {
			self.tag
				.add_frame(people_frame("TMCL", self.performers, encoding));
		}

		if !self.involved.is_empty() {
			self.tag
				.add_frame(people_frame("TIPL", self.involved, encoding));
		}
	}
}

// `lyrics` and `lyrics:<description>`, the bare field has an empty description
fn lyrics_description(name: &str) -> Option<&str> {
	if name == LYRICS_FIELD {
		return Some("");
	}

	name.strip_prefix(LYRICS_FIELD)?.strip_prefix(':')
}
