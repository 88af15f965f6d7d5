use crate::types::Seconds;

/// Parse a cue timestamp (`H:M:S[.mmm]` or `M:S[.mmm]`) into seconds.
///
/// The fractional field is read as a whole millisecond count and divided by
/// 1000 regardless of its width, so `"5"` is 5ms and `"500"` is 500ms. The
/// source tracks always write three digits; shorter fields come out scaled
/// down rather than rejected, matching the behavior consumers already rely
/// on.
///
/// Any other component count yields 0, as does a non-numeric component.
/// Callers must tolerate silently-zeroed timestamps on malformed input.
pub fn parse_timestamp(value: &str) -> Seconds {
	let parts: Vec<&str> = value.split(':').collect();

	match parts.as_slice() {
		&[hours, minutes, seconds] => whole(hours) * 3600.0 + whole(minutes) * 60.0 + seconds_field(seconds),
		&[minutes, seconds] => whole(minutes) * 60.0 + seconds_field(seconds),
		_ => 0.0,
	}
}

fn whole(component: &str) -> f64 {
	component.trim().parse::<u64>().map_or(0.0, |v| v as f64)
}

fn seconds_field(component: &str) -> f64 {
	match component.split_once('.') {
		Some((seconds, millis)) => whole(seconds) + whole(millis) / 1000.0,
		None => whole(component),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_three_component_form() {
		assert_eq!(parse_timestamp("00:01:05.250"), 65.25);
		assert_eq!(parse_timestamp("01:00:00.000"), 3600.0);
	}

	#[test]
	fn parses_two_component_form() {
		assert_eq!(parse_timestamp("01:05.250"), 65.25);
		assert_eq!(parse_timestamp("00:07"), 7.0);
	}

	#[test]
	fn unrecognized_component_counts_yield_zero() {
		assert_eq!(parse_timestamp("bogus"), 0.0);
		assert_eq!(parse_timestamp(""), 0.0);
		assert_eq!(parse_timestamp("1:2:3:4"), 0.0);
	}

	#[test]
	fn non_numeric_components_read_as_zero() {
		assert_eq!(parse_timestamp("aa:05"), 5.0);
		assert_eq!(parse_timestamp("00:xx.500"), 0.5);
	}

	#[test]
	fn fraction_is_a_millisecond_count_regardless_of_width() {
		// Legacy fixed-width reading: "5" means 5ms, not half a second
		assert_eq!(parse_timestamp("00:00:01.5"), 1.005);
		assert_eq!(parse_timestamp("00:00:01.500"), 1.5);
	}
}
