use crate::timestamp::parse_timestamp;
use crate::types::CaptionCue;

/// Header marker on the optional first line of a caption track
const HEADER_MARKER: &str = "WEBVTT";
/// Token separating the start and end timestamps of a cue
const CUE_SEPARATOR: &str = "-->";

/// Parse a timed caption track into cues, in document order.
///
/// The grammar is line-oriented: blocks separated by blank lines, each block
/// an optional identifier line, a `start --> end` timing line, and the cue
/// text on the following non-blank lines. Malformed blocks are skipped and
/// scanning resumes at the next line, so a partially damaged track still
/// yields its intact cues.
pub fn parse_captions(text: &str) -> Vec<CaptionCue> {
	let lines: Vec<&str> = text.trim().lines().collect();
	let mut cues = Vec::new();

	let mut i = 0;
	if lines.first().is_some_and(|line| line.contains(HEADER_MARKER)) {
		i = 1;
	}

	while i < lines.len() {
		if lines[i].trim().is_empty() {
			i += 1;
			continue;
		}

		// Any non-empty line without the separator is the cue identifier
		let mut id = format!("caption-{}", cues.len() + 1);
		if !lines[i].contains(CUE_SEPARATOR) {
			id = lines[i].trim().to_string();
			i += 1;
		}

		let Some(timing_line) = lines.get(i) else { break };
		i += 1;

		let Some((start_raw, end_raw)) = timing_line.trim().split_once(CUE_SEPARATOR) else {
			// Malformed block; resume scanning from the next line
			continue;
		};

		let start_time = parse_timestamp(start_raw.trim());
		let end_time = parse_timestamp(end_raw.trim());

		let mut cue_text = String::new();
		while i < lines.len() && !lines[i].trim().is_empty() {
			if !cue_text.is_empty() {
				cue_text.push('\n');
			}
			cue_text.push_str(lines[i]);
			i += 1;
		}

		// A block with no text lines yields no cue
		if !cue_text.is_empty() {
			cues.push(CaptionCue {
				id,
				start_time,
				end_time,
				text: cue_text,
			});
		}
	}

	cues
}
