use super::involved_people;
use super::mappings::{
	FRAME_MAP, FREE_TEXT_MAP, FrameKind, LYRICS_FIELD, MUSICBRAINZ_UFID_OWNER, PERFORMER_PREFIX,
	RATING_FIELD, TIPL_MAP,
};
use super::pairs::{NUMBER_PAIR_FRAMES, split_number_pair};
use super::rating;
use crate::config::Settings;
use crate::metadata::{Image, Metadata};
use crate::util::date::sanitize_date;
use crate::util::text;

use id3::frame::Content;
use id3::{Frame, Tag};

/// Translates the frames of an (already upgraded) tag into [`Metadata`]
pub(crate) fn read_metadata(tag: &Tag, settings: &Settings) -> Metadata {
	let mut metadata = Metadata::new();

	for frame in tag.frames() {
		read_frame(&mut metadata, frame, settings);
	}

	if let Some(date) = metadata.get("date").map(sanitize_date) {
		metadata.set("date", date);
	}

	metadata
}

// Every non-empty value of a multi-value text is appended
fn add_values(metadata: &mut Metadata, field: &str, value: &str) {
	for value in text::split_values(value).filter(|v| !v.is_empty()) {
		metadata.add(field, value);
	}
}

fn read_frame(metadata: &mut Metadata, frame: &Frame, settings: &Settings) {
	let id = frame.id();

	if let Some(field) = FRAME_MAP.field_for(id) {
		match (FrameKind::of(id), frame.content()) {
			(FrameKind::Text, Content::Text(value)) => add_values(metadata, field, value),
			(FrameKind::Comment, Content::Comment(comment)) => add_values(
				metadata,
				&format!("{field}:{}", comment.description),
				&comment.text,
			),
			(FrameKind::Url, Content::Link(url)) => metadata.add(field, url.as_str()),
			_ => log::debug!("ID3v2: Skipping {id} frame with unexpected content"),
		}

		return;
	}

	match (id, frame.content()) {
		("TMCL", _) => {
			for person in involved_people(frame) {
				if !person.involvement.is_empty() || !person.involvee.is_empty() {
					metadata.add(
						format!("{PERFORMER_PREFIX}{}", person.involvement),
						person.involvee,
					);
				}
			}
		},
		("TIPL", _) => {
			for person in involved_people(frame) {
				let Some(field) = TIPL_MAP.field_for(&person.involvement) else {
					log::trace!("ID3v2: Skipping TIPL role {:?}", person.involvement);
					continue;
				};

				if !person.involvee.is_empty() {
					metadata.add(field, person.involvee);
				}
			}
		},
		("TXXX", Content::ExtendedText(extended)) => {
			match FREE_TEXT_MAP.field_for(&extended.description) {
				Some(field) => {
					for value in text::split_values(&extended.value) {
						metadata.add(field, value);
					}
				},
				None => log::trace!("ID3v2: Skipping TXXX:{}", extended.description),
			}
		},
		("USLT", Content::Lyrics(lyrics)) => metadata.add(
			format!("{LYRICS_FIELD}:{}", lyrics.description),
			lyrics.text.as_str(),
		),
		("UFID", Content::UniqueFileIdentifier(ufid))
			if ufid.owner_identifier == MUSICBRAINZ_UFID_OWNER =>
		{
			metadata.set(
				"musicbrainz_trackid",
				String::from_utf8_lossy(&ufid.identifier),
			);
		},
		("TRCK" | "TPOS", Content::Text(value)) => read_number_pair(metadata, id, value),
		("APIC", Content::Picture(picture)) => {
			metadata.add_image(Image::new(picture.mime_type.as_str(), picture.data.clone()));
		},
		("POPM", Content::Popularimeter(popm)) if popm.user == settings.rating_user_email => {
			if let Some(rating) = rating::from_popm(popm.rating, settings.rating_steps) {
				metadata.add(RATING_FIELD, rating.to_string());
			}
		},
		_ => log::trace!("ID3v2: Skipping unmapped frame {id}"),
	}
}

fn read_number_pair(metadata: &mut Metadata, frame_id: &str, value: &str) {
	let Some(&(_, number_field, total_field)) = NUMBER_PAIR_FRAMES
		.iter()
		.find(|(id, ..)| *id == frame_id)
	else {
		return;
	};

	let first = text::split_values(value).next().unwrap_or_default();
	let (number, total) = split_number_pair(first);

	metadata.set(number_field, number);
	if let Some(total) = total {
		metadata.set(total_field, total);
	}
}
