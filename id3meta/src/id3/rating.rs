// Ratings are stored on a `0..steps` scale, `POPM` frames store them in `0..=255`.
//
// A scale with fewer than 2 steps can't be mapped, so ratings are ignored in both directions.
// Values outside of the scale are clamped.

const POPM_MAX: f64 = 255.0;

fn valid_steps(steps: u32) -> Option<f64> {
	if steps < 2 {
		log::warn!("Rating: Ignoring ratings, a scale needs at least 2 steps (got {steps})");
		return None;
	}

	Some(f64::from(steps - 1))
}

/// Converts a `POPM` rating byte to the rating scale
pub(crate) fn from_popm(rating: u8, steps: u32) -> Option<u32> {
	let max = valid_steps(steps)?;
	Some((f64::from(rating) / POPM_MAX * max).round() as u32)
}

/// Converts a rating string to a `POPM` rating byte
pub(crate) fn to_popm(value: &str, steps: u32) -> Option<u8> {
	let max = valid_steps(steps)?;

	let Ok(rating) = value.trim().parse::<i64>() else {
		log::warn!("Rating: Dropping non-numeric rating {value:?}");
		return None;
	};

	let clamped = rating.clamp(0, i64::from(steps - 1));
	if clamped != rating {
		log::warn!("Rating: Clamping {rating} to the scale 0..={}", steps - 1);
	}

	Some((clamped as f64 * POPM_MAX / max).round() as u8)
}
