use timed_text::ChapterMarker;

/// Placeholder titles, one marker every [`FALLBACK_INTERVAL`] seconds
const FALLBACK_TITLES: [&str; 7] = ["Introduction", "Overview", "First Topic", "Second Topic", "Third Topic", "Summary", "Conclusion"];

const FALLBACK_INTERVAL: f64 = 15.0;

/// The fixed marker sequence installed when chapter loading fails.
///
/// Caption loading has no equivalent; a failed caption load leaves the
/// collection empty.
pub fn fallback_chapters() -> Vec<ChapterMarker> {
	FALLBACK_TITLES
		.iter()
		.enumerate()
		.map(|(index, title)| ChapterMarker::new(format!("chapter-{}", index + 1), *title, index as f64 * FALLBACK_INTERVAL))
		.collect()
}
