/// Normalizes a date string to `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
///
/// Leading integer components are kept until one fails to parse. Zero components are skipped,
/// and anything past the day is ignored.
pub(crate) fn sanitize_date(raw: &str) -> String {
	let mut parts = Vec::with_capacity(3);
	for component in raw.split('-') {
		let Ok(value) = component.trim().parse::<u32>() else {
			break;
		};

		if value != 0 {
			parts.push(value);
		}
	}

	match parts.as_slice() {
		[] => String::new(),
		[year] => format!("{year:04}"),
		[year, month] => format!("{year:04}-{month:02}"),
		[year, month, day, ..] => format!("{year:04}-{month:02}-{day:02}"),
	}
}
