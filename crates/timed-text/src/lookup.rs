use crate::types::{CaptionCue, ChapterMarker, Seconds};

/// Index of the latest marker whose start precedes (or equals) `t`.
///
/// Requires `markers` sorted ascending by `start_time`; the scan stops at
/// the first marker past `t`, so an unsorted slice gives wrong answers
/// silently. `None` when the slice is empty or `t` precedes every start.
pub fn active_chapter_index(markers: &[ChapterMarker], t: Seconds) -> Option<usize> {
	let mut active = None;

	for (index, marker) in markers.iter().enumerate() {
		if marker.start_time <= t {
			active = Some(index);
		} else {
			break;
		}
	}

	active
}

/// The chapter active at time `t`, if any
pub fn active_chapter_at(markers: &[ChapterMarker], t: Seconds) -> Option<&ChapterMarker> {
	active_chapter_index(markers, t).map(|index| &markers[index])
}

/// Index of the first cue (in collection order) whose interval contains `t`.
///
/// No sortedness assumption; cue counts are small enough that a full scan
/// per call is fine. Overlapping cues resolve to the first match.
pub fn active_caption_index(cues: &[CaptionCue], t: Seconds) -> Option<usize> {
	cues.iter().position(|cue| cue.contains(t))
}

/// The caption cue active at time `t`, if any
pub fn active_caption_at(cues: &[CaptionCue], t: Seconds) -> Option<&CaptionCue> {
	active_caption_index(cues, t).map(|index| &cues[index])
}

/// Percentage offset of a marker along the progress bar.
///
/// Zero when the total duration is zero, negative, or not yet known.
pub fn chapter_display_position(marker: &ChapterMarker, total_duration: Seconds) -> f64 {
	if total_duration.is_finite() && total_duration > 0.0 {
		(marker.start_time / total_duration) * 100.0
	} else {
		0.0
	}
}
