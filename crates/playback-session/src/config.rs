use serde::{Deserialize, Serialize};

/// Source locations for one playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
	/// Manifest document carrying the chapter event stream
	pub chapter_source_url: String,
	/// Timed caption track document
	pub caption_source_url: String,
}

impl SessionConfig {
	pub fn new(chapter_source_url: impl Into<String>, caption_source_url: impl Into<String>) -> Self {
		Self {
			chapter_source_url: chapter_source_url.into(),
			caption_source_url: caption_source_url.into(),
		}
	}
}
