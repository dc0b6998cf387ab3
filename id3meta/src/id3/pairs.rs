//! Contains utilities for ID3v2 style number pairs

pub(crate) const NUMBER_PAIR_SEPARATOR: char = '/';

/// Frames holding a number pair, with the fields for each half
pub(crate) const NUMBER_PAIR_FRAMES: &[(&str, &str, &str)] = &[
	("TRCK", "tracknumber", "totaltracks"),
	("TPOS", "discnumber", "totaldiscs"),
];

/// Creates an ID3v2 style number pair
pub(crate) fn format_number_pair(number: &str, total: Option<&str>) -> String {
	match total {
		Some(total) => format!("{number}{NUMBER_PAIR_SEPARATOR}{total}"),
		None => number.to_owned(),
	}
}

/// Splits an ID3v2 style number pair
///
/// Anything after a second separator is ignored.
pub(crate) fn split_number_pair(text: &str) -> (&str, Option<&str>) {
	let mut parts = text.split(NUMBER_PAIR_SEPARATOR);
	let number = parts.next().unwrap_or_default();
	(number, parts.next())
}
