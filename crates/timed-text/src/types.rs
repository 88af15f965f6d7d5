use serde::{Deserialize, Serialize};

/// Playback time in seconds (fractional)
pub type Seconds = f64;

/// A named point on the playback timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChapterMarker {
	/// Unique identifier within a loaded set
	pub id: String,
	/// Title shown in the chapter menu
	pub title: String,
	/// Offset from the start of the media, in seconds
	pub start_time: Seconds,
}

impl ChapterMarker {
	pub fn new(id: impl Into<String>, title: impl Into<String>, start_time: Seconds) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			start_time,
		}
	}
}

/// A displayable text cue, active during `[start_time, end_time]` inclusive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptionCue {
	/// Unique identifier within a loaded set
	pub id: String,
	pub start_time: Seconds,
	pub end_time: Seconds,
	/// Cue text; may contain embedded newlines
	pub text: String,
}

impl CaptionCue {
	pub fn new(id: impl Into<String>, start_time: Seconds, end_time: Seconds, text: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			start_time,
			end_time,
			text: text.into(),
		}
	}

	/// Whether this cue is active at time `t` (boundaries inclusive)
	pub fn contains(&self, t: Seconds) -> bool {
		self.start_time <= t && t <= self.end_time
	}

	pub fn duration(&self) -> Seconds {
		self.end_time - self.start_time
	}
}
