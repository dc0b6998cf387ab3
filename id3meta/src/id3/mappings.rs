use std::collections::HashMap;
use std::sync::OnceLock;

pub(crate) const MUSICBRAINZ_UFID_OWNER: &str = "http://musicbrainz.org";

pub(crate) const PERFORMER_PREFIX: &str = "performer:";
pub(crate) const COMMENT_PREFIX: &str = "comment:";
pub(crate) const LYRICS_FIELD: &str = "lyrics";
pub(crate) const ESCAPE_PREFIX: &str = "~id3:";
pub(crate) const RATING_FIELD: &str = "~rating";

/// Custom frames used in place of ID3v2.4 frames missing from ID3v2.3, with their replacements
pub(crate) const LEGACY_FRAMES: &[(&str, &str)] = &[("XSOP", "TSOP"), ("XDOR", "TDRC")];

// A one-to-one mapping, both directions are indexed on first use.
struct Index {
	forward: HashMap<&'static str, &'static str>,
	reverse: HashMap<&'static str, &'static str>,
}

impl Index {
	fn build(entries: &'static [(&'static str, &'static str)]) -> Self {
		let mut forward = HashMap::with_capacity(entries.len());
		let mut reverse = HashMap::with_capacity(entries.len());

		for &(key, value) in entries {
			let duplicate_key = forward.insert(key, value).is_some();
			let duplicate_value = reverse.insert(value, key).is_some();
			debug_assert!(
				!duplicate_key && !duplicate_value,
				"`{key}` => `{value}` is mapped more than once"
			);
		}

		Self { forward, reverse }
	}
}

// Generates a map between two kinds of names. For `$NAME: a => b`, the lookups are
// `$NAME.b_for(a)` and `$NAME.a_for(b)`.
macro_rules! gen_map {
	(
		$(#[$meta:meta])*
		$NAME:ident: $left:ident => $right:ident;

		$($key:literal => $value:literal),+ $(,)?
	) => {
		paste::paste! {
			$(#[$meta])*
			#[allow(non_camel_case_types)]
			pub(crate) struct $NAME;

			impl $NAME {
				pub(crate) const ENTRIES: &'static [(&'static str, &'static str)] = &[$(($key, $value)),+];

				fn index(&self) -> &'static Index {
					static INSTANCE: OnceLock<Index> = OnceLock::new();
					INSTANCE.get_or_init(|| Index::build(Self::ENTRIES))
				}

				pub(crate) fn [<$right _for>](&self, $left: &str) -> Option<&'static str> {
					self.index().forward.get($left).copied()
				}

				pub(crate) fn [<$left _for>](&self, $right: &str) -> Option<&'static str> {
					self.index().reverse.get($right).copied()
				}
			}
		}
	};
}

gen_map!(
	/// Frames with a dedicated field
	FRAME_MAP: frame_id => field;

	"TPE1" => "artist",
	"TPE2" => "albumartist",
	"TPE3" => "conductor",
	"TPE4" => "remixer",
	"TCOM" => "composer",
	"TCON" => "genre",
	"TALB" => "album",
	"TIT1" => "grouping",
	"TIT2" => "title",
	"TIT3" => "subtitle",
	"TSST" => "discsubtitle",
	"TEXT" => "lyricist",
	"TCMP" => "compilation",
	"TDRC" => "date",
	"TDOR" => "originaldate",
	"COMM" => "comment",
	"TMOO" => "mood",
	"TMED" => "media",
	"TBPM" => "bpm",
	"WOAR" => "website",
	"TSRC" => "isrc",
	"TENC" => "encodedby",
	"TCOP" => "copyright",
	"TSOA" => "albumsort",
	"TSOP" => "artistsort",
	"TSOT" => "titlesort",
	"TPUB" => "label",
);

gen_map!(
	/// `TXXX` descriptions with a dedicated field
	FREE_TEXT_MAP: description => field;

	"MusicBrainz Artist Id"            => "musicbrainz_artistid",
	"MusicBrainz Album Id"             => "musicbrainz_albumid",
	"MusicBrainz Album Artist Id"      => "musicbrainz_albumartistid",
	"MusicBrainz Album Type"           => "releasetype",
	"MusicBrainz Album Status"         => "releasestatus",
	"MusicBrainz TRM Id"               => "musicbrainz_trmid",
	"MusicBrainz Disc Id"              => "musicbrainz_discid",
	"MusicBrainz Album Release Country" => "releasecountry",
	"MusicIP PUID"                     => "musicip_puid",
	"ALBUMARTISTSORT"                  => "albumartistsort",
	"CATALOGNUMBER"                    => "catalognumber",
	"BARCODE"                          => "barcode",
	"ASIN"                             => "asin",
	"MusicMagic Fingerprint"           => "musicip_fingerprint",
);

gen_map!(
	/// `TIPL` involvement roles with a dedicated field
	TIPL_MAP: role => field;

	"engineer" => "engineer",
	"arranger" => "arranger",
	"producer" => "producer",
	"DJ-mix"   => "djmixer",
	"mix"      => "mixer",
);

/// How a frame from [`FRAME_MAP`] stores its value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FrameKind {
	Text,
	Url,
	Comment,
}

impl FrameKind {
	pub(crate) fn of(frame_id: &str) -> Self {
		match frame_id {
			"COMM" => Self::Comment,
			id if id.starts_with('W') => Self::Url,
			_ => Self::Text,
		}
	}
}

// Text frames that may be written through `~id3:<frame id>`
const PASSTHROUGH_TEXT_FRAMES: &[&str] = &[
	"TALB", "TBPM", "TCMP", "TCOM", "TCON", "TCOP", "TDEN", "TDLY", "TDOR", "TDRC", "TDRL", "TDTG",
	"TENC", "TEXT", "TFLT", "TIT1", "TIT2", "TIT3", "TKEY", "TLAN", "TLEN", "TMED", "TMOO", "TOAL",
	"TOFN", "TOLY", "TOPE", "TOWN", "TPE1", "TPE2", "TPE3", "TPE4", "TPOS", "TPRO", "TPUB", "TRCK",
	"TRSN", "TRSO", "TSO2", "TSOA", "TSOC", "TSOP", "TSOT", "TSRC", "TSSE", "TSST", "TDAT", "TIME",
	"TORY", "TRDA", "TSIZ", "TYER",
];

/// Whether `frame_id` names a known text frame that can be built from a list of values
pub(crate) fn is_passthrough_text_frame(frame_id: &str) -> bool {
	PASSTHROUGH_TEXT_FRAMES.contains(&frame_id)
}

/// Whether a field name can be stored in an ID3v2 tag
///
/// This only consults the curated tables, never the contents of a tag.
pub(crate) fn supports_field(name: &str) -> bool {
	FRAME_MAP.frame_id_for(name).is_some()
		|| FREE_TEXT_MAP.description_for(name).is_some()
		|| name.starts_with(PERFORMER_PREFIX)
}
