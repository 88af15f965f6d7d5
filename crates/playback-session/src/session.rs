use timed_text::{active_caption_index, active_chapter_index, chapter_display_position, parse_captions, parse_chapters, CaptionCue, ChapterMarker, Seconds};
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::fallback::fallback_chapters;
use crate::fetch::TextSource;

/// One playback session's worth of timed-text state.
///
/// Collections are replaced wholesale by the loaders; the active entries are
/// derived and refreshed on every reported time update rather than bound
/// reactively. Loaders never fail outward: the chapter collection falls back
/// to the placeholder sequence and the caption collection falls back to
/// empty, so the presentation layer always sees a consistent interface.
pub struct PlaybackSession<S> {
	config: SessionConfig,
	source: S,
	chapters: Vec<ChapterMarker>,
	captions: Vec<CaptionCue>,
	current_time: Seconds,
	duration: Seconds,
	active_chapter: Option<usize>,
	active_caption: Option<usize>,
	chapter_menu_open: bool,
	captions_visible: bool,
}

impl<S: TextSource> PlaybackSession<S> {
	pub fn new(config: SessionConfig, source: S) -> Self {
		Self {
			config,
			source,
			chapters: Vec::new(),
			captions: Vec::new(),
			current_time: 0.0,
			duration: 0.0,
			active_chapter: None,
			active_caption: None,
			chapter_menu_open: false,
			captions_visible: true,
		}
	}

	/// Load chapter markers, substituting the placeholder set when the fetch
	/// fails, the manifest cannot be parsed, or it yields zero markers
	pub async fn load_chapters(&mut self) {
		self.chapters = match self.try_load_chapters().await {
			Ok(markers) if !markers.is_empty() => {
				debug!(count = markers.len(), "loaded chapter markers");
				markers
			}
			Ok(_) => {
				warn!("manifest carried no chapter events, installing placeholder chapters");
				fallback_chapters()
			}
			Err(err) => {
				warn!(error = %err, url = %self.config.chapter_source_url, "chapter load failed, installing placeholder chapters");
				fallback_chapters()
			}
		};
		self.refresh_active();
	}

	async fn try_load_chapters(&self) -> Result<Vec<ChapterMarker>> {
		let body = self.source.fetch_text(&self.config.chapter_source_url).await?;
		Ok(parse_chapters(&body)?)
	}

	/// Load caption cues; the collection is left empty on any failure
	pub async fn load_captions(&mut self) {
		self.captions = match self.source.fetch_text(&self.config.caption_source_url).await {
			Ok(body) => {
				let cues = parse_captions(&body);
				if cues.is_empty() {
					warn!(url = %self.config.caption_source_url, "caption track yielded no cues");
				} else {
					debug!(count = cues.len(), "loaded caption cues");
				}
				cues
			}
			Err(err) => {
				warn!(error = %err, url = %self.config.caption_source_url, "caption load failed");
				Vec::new()
			}
		};
		self.refresh_active();
	}

	/// Record the externally-reported playback time and refresh the derived
	/// active entries. Called once per frame or periodic tick.
	pub fn update_time(&mut self, t: Seconds) {
		self.current_time = t;
		self.refresh_active();
	}

	/// Record the media duration once known (used for marker positioning)
	pub fn set_duration(&mut self, duration: Seconds) {
		self.duration = duration;
	}

	fn refresh_active(&mut self) {
		self.active_chapter = active_chapter_index(&self.chapters, self.current_time);
		self.active_caption = active_caption_index(&self.captions, self.current_time);
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn chapters(&self) -> &[ChapterMarker] {
		&self.chapters
	}

	pub fn captions(&self) -> &[CaptionCue] {
		&self.captions
	}

	pub fn current_time(&self) -> Seconds {
		self.current_time
	}

	pub fn duration(&self) -> Seconds {
		self.duration
	}

	/// The chapter active at the last reported time, if any
	pub fn active_chapter(&self) -> Option<&ChapterMarker> {
		self.active_chapter.map(|index| &self.chapters[index])
	}

	/// The caption cue active at the last reported time, if any
	pub fn active_caption(&self) -> Option<&CaptionCue> {
		self.active_caption.map(|index| &self.captions[index])
	}

	/// The active caption only while captions are toggled visible
	pub fn visible_caption(&self) -> Option<&CaptionCue> {
		if self.captions_visible {
			self.active_caption()
		} else {
			None
		}
	}

	/// Progress-bar offset of a marker, as a percentage of the known duration
	pub fn chapter_position(&self, marker: &ChapterMarker) -> f64 {
		chapter_display_position(marker, self.duration)
	}

	pub fn toggle_chapter_menu(&mut self) {
		self.chapter_menu_open = !self.chapter_menu_open;
	}

	pub fn chapter_menu_open(&self) -> bool {
		self.chapter_menu_open
	}

	pub fn toggle_captions(&mut self) {
		self.captions_visible = !self.captions_visible;
	}

	pub fn captions_visible(&self) -> bool {
		self.captions_visible
	}
}
