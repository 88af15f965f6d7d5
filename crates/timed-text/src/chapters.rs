use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, TimedTextError};
use crate::types::{ChapterMarker, Seconds};

/// Scheme identifier marking an event stream as chapter data
const CHAPTER_SCHEME: &str = "urn:mpeg:dash:event:2012";
/// Stream value selecting the chapter track
const CHAPTER_VALUE: &str = "chapters";

const EVENT_STREAM_TAG: &[u8] = b"EventStream";
const EVENT_TAG: &[u8] = b"Event";

/// Tuning knobs for manifest chapter extraction
#[derive(Debug, Clone)]
pub struct ChapterParseOptions {
	/// Raw presentation times above this value are treated as milliseconds
	/// and divided by 1000. The source manifests never declare a unit, so
	/// this stays a heuristic.
	pub millis_threshold: f64,
}

impl Default for ChapterParseOptions {
	fn default() -> Self {
		Self { millis_threshold: 1000.0 }
	}
}

/// Attributes collected from one `Event` element, text pending
struct PendingEvent {
	id: Option<String>,
	raw_time: f64,
	text: String,
}

/// Extract chapter markers from a manifest document using default options.
///
/// Returns the markers in ascending `start_time` order (stable for ties).
/// `Err` means the manifest could not supply chapter data at all; an empty
/// `Ok` means the stream was present but carried no events. Callers decide
/// what to substitute in either case.
pub fn parse_chapters(xml: &str) -> Result<Vec<ChapterMarker>> {
	parse_chapters_with(xml, &ChapterParseOptions::default())
}

/// [`parse_chapters`] with an explicit millisecond threshold
pub fn parse_chapters_with(xml: &str, opts: &ChapterParseOptions) -> Result<Vec<ChapterMarker>> {
	let mut reader = Reader::from_str(xml);

	let mut markers = Vec::new();
	let mut found_stream = false;
	let mut in_stream = false;
	let mut pending: Option<PendingEvent> = None;

	loop {
		match reader.read_event()? {
			Event::Start(e) => {
				if in_stream {
					if e.name().as_ref() == EVENT_TAG && pending.is_none() {
						pending = Some(read_event_attributes(&e));
					}
				} else if !found_stream && e.name().as_ref() == EVENT_STREAM_TAG && is_chapter_stream(&e) {
					// Only the first chapter-tagged stream is consumed
					found_stream = true;
					in_stream = true;
				}
			}
			Event::Empty(e) => {
				if in_stream && e.name().as_ref() == EVENT_TAG && pending.is_none() {
					push_marker(&mut markers, read_event_attributes(&e), opts);
				} else if !in_stream && !found_stream && e.name().as_ref() == EVENT_STREAM_TAG && is_chapter_stream(&e) {
					// Self-closing stream: present but carries no events
					found_stream = true;
				}
			}
			Event::Text(e) => {
				if let Some(event) = pending.as_mut() {
					if let Ok(text) = e.unescape() {
						event.text.push_str(&text);
					}
				}
			}
			Event::CData(e) => {
				if let Some(event) = pending.as_mut() {
					event.text.push_str(&String::from_utf8_lossy(&e));
				}
			}
			Event::End(e) => {
				if in_stream {
					match e.name().as_ref() {
						EVENT_TAG => {
							if let Some(event) = pending.take() {
								push_marker(&mut markers, event, opts);
							}
						}
						EVENT_STREAM_TAG => in_stream = false,
						_ => {}
					}
				}
			}
			Event::Eof => break,
			_ => {}
		}
	}

	if !found_stream {
		return Err(TimedTextError::MissingChapterStream);
	}

	// Stable: encounter order is preserved for equal start times
	markers.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

	Ok(markers)
}

/// Whether this `EventStream` element is tagged as the chapter track
fn is_chapter_stream(element: &BytesStart<'_>) -> bool {
	let mut scheme_matches = false;
	let mut value_matches = false;

	for attr in element.attributes().flatten() {
		if let Ok(value) = attr.unescape_value() {
			match attr.key.as_ref() {
				b"schemeIdUri" => scheme_matches = value == CHAPTER_SCHEME,
				b"value" => value_matches = value == CHAPTER_VALUE,
				_ => {}
			}
		}
	}

	scheme_matches && value_matches
}

fn read_event_attributes(element: &BytesStart<'_>) -> PendingEvent {
	let mut id = None;
	let mut raw_time = 0.0;

	for attr in element.attributes().flatten() {
		if let Ok(value) = attr.unescape_value() {
			match attr.key.as_ref() {
				b"id" => id = Some(value.into_owned()),
				// Absent or non-numeric presentation times read as zero
				b"presentationTime" => raw_time = value.trim().parse::<f64>().unwrap_or(0.0),
				_ => {}
			}
		}
	}

	PendingEvent {
		id,
		raw_time,
		text: String::new(),
	}
}

fn push_marker(markers: &mut Vec<ChapterMarker>, event: PendingEvent, opts: &ChapterParseOptions) {
	let index = markers.len();

	let id = event.id.unwrap_or_else(|| format!("chapter-{index}"));

	let title = event.text.trim();
	let title = if title.is_empty() {
		format!("Chapter {}", index + 1)
	} else {
		title.to_string()
	};

	let start_time: Seconds = if event.raw_time > opts.millis_threshold {
		event.raw_time / 1000.0
	} else {
		event.raw_time
	};

	markers.push(ChapterMarker { id, title, start_time });
}
