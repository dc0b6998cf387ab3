//! Conversions between the ID3v2.3 and ID3v2.4 frame vocabularies
//!
//! Tags are always handled in their ID3v2.4 form, and only downgraded right before writing an
//! ID3v2.3 tag.

use super::involved_people;
use super::mappings::LEGACY_FRAMES;
use crate::util::text::{self, TextEncoding};

use id3::frame::{Content, InvolvedPeopleList, Unknown};
use id3::{Frame, Tag, TagLike, Timestamp, Version};

// Frames introduced in ID3v2.4 that have no ID3v2.3 counterpart
const V24_ONLY_FRAMES: &[&str] = &[
	"ASPI", "EQU2", "RVA2", "SEEK", "SIGN", "TDEN", "TDRL", "TDTG", "TMOO", "TPRO", "TSOA", "TSOT",
	"TSST",
];

// ID3v2.3 frames that are dropped once their contents have been moved to ID3v2.4 frames
const V23_ONLY_FRAMES: &[&str] = &["TYER", "TDAT", "TIME", "TORY", "TRDA", "TSIZ", "IPLS"];

// Frames the codec splits on `/` when reading ID3v2.2 and ID3v2.3 tags
const SLASH_SPLIT_FRAMES: &[&str] = &["TPE1", "TCOM", "TEXT", "TOLY", "TOPE"];

fn first_value<'a>(frames: &'a [Frame]) -> Option<&'a str> {
	let text = frames.first()?.content().text()?;
	text::split_values(text).next()
}

fn timestamp_of(tag: &Tag, frame_id: &str) -> Option<Timestamp> {
	let text = tag.get(frame_id)?.content().text()?;
	text::split_values(text).next()?.trim().parse().ok()
}

fn is_digits(text: &str, len: usize) -> bool {
	text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

fn digit_pair(text: &str) -> Option<u8> {
	text.parse().ok()
}

/// Moves ID3v2.3 frames and custom legacy frames to their ID3v2.4 counterparts
///
/// Frames are only moved if the tag doesn't already contain the newer frame.
pub(crate) fn upgrade(tag: &mut Tag) {
	restore_slashes(tag);
	upgrade_v23_frames(tag);
	upgrade_legacy_frames(tag);
}

// Before ID3v2.4, a `/` in these frames is part of the value
fn restore_slashes(tag: &mut Tag) {
	if tag.version() == Version::Id3v24 {
		return;
	}

	for &frame_id in SLASH_SPLIT_FRAMES {
		let Some(frame) = tag.get(frame_id) else {
			continue;
		};

		let Content::Text(value) = frame.content() else {
			continue;
		};

		if !value.contains(text::VALUE_SEPARATOR) {
			continue;
		}

		let restored = Frame::with_content(
			frame_id,
			Content::Text(value.replace(text::VALUE_SEPARATOR, "/")),
		)
		.set_encoding(frame.encoding());

		tag.add_frame(restored);
	}
}

fn upgrade_v23_frames(tag: &mut Tag) {
	let year = tag.remove("TYER");
	let date = tag.remove("TDAT");
	let time = tag.remove("TIME");

	if tag.get("TDRC").is_none() {
		if let Some(year) = first_value(&year).and_then(|y| y.trim().parse::<i32>().ok()) {
			let mut timestamp = Timestamp {
				year,
				month: None,
				day: None,
				hour: None,
				minute: None,
				second: None,
			};

			// TDAT is DDMM, TIME is HHMM
			if let Some(ddmm) = first_value(&date).filter(|d| is_digits(d, 4)) {
				timestamp.day = digit_pair(&ddmm[..2]);
				timestamp.month = digit_pair(&ddmm[2..]);

				if let Some(hhmm) = first_value(&time).filter(|t| is_digits(t, 4)) {
					timestamp.hour = digit_pair(&hhmm[..2]);
					timestamp.minute = digit_pair(&hhmm[2..]);
				}
			}

			log::debug!("ID3v2: Upgrading TYER/TDAT/TIME to TDRC ({timestamp})");
			tag.add_frame(Frame::text("TDRC", timestamp.to_string()));
		}
	}

	let original_year = tag.remove("TORY");
	if tag.get("TDOR").is_none() {
		if let Some(year) = first_value(&original_year) {
			log::debug!("ID3v2: Upgrading TORY to TDOR");
			tag.add_frame(Frame::text("TDOR", year.trim()));
		}
	}

	let involved = tag.remove("IPLS");
	if tag.get("TIPL").is_none() {
		let items = involved.iter().flat_map(involved_people).collect::<Vec<_>>();
		if !items.is_empty() {
			log::debug!("ID3v2: Upgrading IPLS to TIPL");
			tag.add_frame(Frame::with_content(
				"TIPL",
				Content::InvolvedPeopleList(InvolvedPeopleList { items }),
			));
		}
	}

	for frame_id in V23_ONLY_FRAMES {
		tag.remove(frame_id);
	}
}

fn upgrade_legacy_frames(tag: &mut Tag) {
	for &(legacy, modern) in LEGACY_FRAMES {
		if tag.get(legacy).is_none() || tag.get(modern).is_some() {
			continue;
		}

		let Some(frame) = tag.remove(legacy).into_iter().next() else {
			continue;
		};

		let Some((encoding, values)) = legacy_text(&frame) else {
			log::warn!("ID3v2: Unable to read the contents of a {legacy} frame, discarding");
			continue;
		};

		log::debug!("ID3v2: Upgrading {legacy} to {modern}");

		let upgraded = Frame::with_content(modern, Content::new_text_values(values))
			.set_encoding(Some(encoding.into()));
		tag.add_frame(upgraded);
	}
}

// The codec only decodes frames it knows, custom frames are left as raw bodies
fn legacy_text(frame: &Frame) -> Option<(TextEncoding, Vec<String>)> {
	match frame.content() {
		Content::Text(text) => {
			let encoding = frame.encoding().map_or(TextEncoding::UTF16, TextEncoding::from);
			Some((encoding, text::split_values(text).map(String::from).collect()))
		},
		Content::Unknown(unknown) => match text::decode_text_frame(&unknown.data) {
			Ok(decoded) => Some(decoded),
			Err(err) => {
				log::debug!("ID3v2: {err}");
				None
			},
		},
		_ => None,
	}
}

/// Removes any custom legacy frames, for tags written as ID3v2.4
pub(crate) fn strip_legacy_frames(tag: &mut Tag) {
	for &(legacy, _) in LEGACY_FRAMES {
		tag.remove(legacy);
	}
}

/// Rewrites an ID3v2.4 tag using only frames and encodings available in ID3v2.3
pub(crate) fn downgrade(tag: &mut Tag) {
	if let Some(timestamp) = timestamp_of(tag, "TDRC") {
		tag.remove("TDRC");
		tag.add_frame(Frame::text("TYER", format!("{:04}", timestamp.year)));

		if let (Some(month), Some(day)) = (timestamp.month, timestamp.day) {
			tag.add_frame(Frame::text("TDAT", format!("{day:02}{month:02}")));
		}

		if let (Some(hour), Some(minute)) = (timestamp.hour, timestamp.minute) {
			tag.add_frame(Frame::text("TIME", format!("{hour:02}{minute:02}")));
		}
	}

	if let Some(timestamp) = timestamp_of(tag, "TDOR") {
		tag.remove("TDOR");
		tag.add_frame(Frame::text("TORY", format!("{:04}", timestamp.year)));
	}

	// TSOP is kept as the custom XSOP frame, which is upgraded again when read
	for frame in tag.remove("TSOP") {
		let Some(value) = frame.content().text() else {
			continue;
		};

		let encoding = frame
			.encoding()
			.map_or(TextEncoding::UTF16, TextEncoding::from)
			.to_id3v23();

		let mut data = vec![encoding as u8];
		data.extend(encoding.encode_values(text::split_values(value)));

		tag.add_frame(Frame::with_content(
			"XSOP",
			Content::Unknown(Unknown {
				data,
				version: Version::Id3v23,
			}),
		));
	}

	let mut items = Vec::new();
	for frame_id in ["TIPL", "TMCL"] {
		for frame in tag.remove(frame_id) {
			items.extend(involved_people(&frame));
		}
	}

	if !items.is_empty() {
		tag.add_frame(Frame::with_content(
			"IPLS",
			Content::InvolvedPeopleList(InvolvedPeopleList { items }),
		));
	}

	for frame_id in V24_ONLY_FRAMES {
		let discarded = tag.remove(frame_id);
		if !discarded.is_empty() {
			log::warn!("ID3v2: Discarding {frame_id}, it has no ID3v2.3 counterpart");
		}
	}

	let mut downgraded = Tag::with_version(Version::Id3v23);
	for mut frame in tag.frames().cloned() {
		if let Some(encoding) = frame.encoding() {
			let encoding = TextEncoding::from(encoding).to_id3v23();
			frame = frame.set_encoding(Some(encoding.into()));
		}

		downgraded.add_frame(frame);
	}

	*tag = downgraded;
}
