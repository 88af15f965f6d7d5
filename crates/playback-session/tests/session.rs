// Session-level behavior: loaders never error outward, fallback policy,
// derived-state refresh on time updates.

use async_trait::async_trait;
use playback_session::{FetchError, PlaybackSession, SessionConfig, TextSource};

const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MPD xmlns="urn:mpeg:dash:schema:mpd:2011">
	<Period>
		<EventStream schemeIdUri="urn:mpeg:dash:event:2012" value="chapters">
			<Event id="intro" presentationTime="0">Introduction</Event>
			<Event id="deep-dive" presentationTime="40">Deep Dive</Event>
			<Event id="qa" presentationTime="80">Questions</Event>
		</EventStream>
	</Period>
</MPD>"#;

const TRACK: &str = "WEBVTT

1
00:00:01.000 --> 00:00:03.000
Hello world

2
00:00:05.500 --> 00:00:07.000
Second line
";

// ============================================================================
// Test sources
// ============================================================================

/// Serves canned bodies keyed by URL; unknown URLs fail
struct CannedSource {
	responses: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl TextSource for CannedSource {
	async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
		self
			.responses
			.iter()
			.find(|(canned_url, _)| *canned_url == url)
			.map(|(_, body)| (*body).to_string())
			.ok_or_else(|| FetchError::Unavailable(format!("no canned response for {url}")))
	}
}

/// Fails every request, like a dead network
struct DeadSource;

#[async_trait]
impl TextSource for DeadSource {
	async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
		Err(FetchError::Unavailable(format!("unreachable: {url}")))
	}
}

fn config() -> SessionConfig {
	SessionConfig::new("https://media.test/full.xml", "https://media.test/transcript.vtt")
}

fn canned_session() -> PlaybackSession<CannedSource> {
	let source = CannedSource {
		responses: vec![("https://media.test/full.xml", MANIFEST), ("https://media.test/transcript.vtt", TRACK)],
	};
	PlaybackSession::new(config(), source)
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn loads_chapters_and_captions_from_sources() {
	let mut session = canned_session();

	session.load_chapters().await;
	session.load_captions().await;

	assert_eq!(session.chapters().len(), 3);
	assert_eq!(session.chapters()[1].id, "deep-dive");
	assert_eq!(session.captions().len(), 2);
}

#[tokio::test]
async fn failed_fetch_installs_fallback_chapters_and_empty_captions() {
	let mut session = PlaybackSession::new(config(), DeadSource);

	session.load_chapters().await;
	session.load_captions().await;

	let chapters = session.chapters();
	assert_eq!(chapters.len(), 7);
	assert_eq!(chapters[0].title, "Introduction");
	assert_eq!(chapters[6].title, "Conclusion");
	assert_eq!(chapters[6].start_time, 90.0);

	assert!(session.captions().is_empty());
}

#[tokio::test]
async fn manifest_without_chapter_stream_installs_fallback() {
	let source = CannedSource {
		responses: vec![("https://media.test/full.xml", "<MPD><Period/></MPD>")],
	};
	let mut session = PlaybackSession::new(config(), source);

	session.load_chapters().await;

	assert_eq!(session.chapters().len(), 7);
}

#[tokio::test]
async fn reload_replaces_collections_wholesale() {
	let mut session = canned_session();

	session.load_chapters().await;
	session.update_time(50.0);
	assert_eq!(session.active_chapter().map(|m| m.id.as_str()), Some("deep-dive"));

	// A reload against the same source replaces, not appends
	session.load_chapters().await;
	assert_eq!(session.chapters().len(), 3);
	assert_eq!(session.active_chapter().map(|m| m.id.as_str()), Some("deep-dive"));
}

// ============================================================================
// Derived state
// ============================================================================

#[tokio::test]
async fn update_time_refreshes_both_active_entries() {
	let mut session = canned_session();
	session.load_chapters().await;
	session.load_captions().await;

	session.update_time(2.0);
	assert_eq!(session.active_chapter().map(|m| m.id.as_str()), Some("intro"));
	assert_eq!(session.active_caption().map(|c| c.text.as_str()), Some("Hello world"));

	session.update_time(6.0);
	assert_eq!(session.active_caption().map(|c| c.text.as_str()), Some("Second line"));

	session.update_time(85.0);
	assert_eq!(session.active_chapter().map(|m| m.id.as_str()), Some("qa"));
	assert!(session.active_caption().is_none());

	session.update_time(-1.0);
	assert!(session.active_chapter().is_none());
}

#[tokio::test]
async fn caption_visibility_gates_the_visible_cue() {
	let mut session = canned_session();
	session.load_captions().await;
	session.update_time(2.0);

	assert!(session.visible_caption().is_some());

	session.toggle_captions();
	assert!(!session.captions_visible());
	assert!(session.visible_caption().is_none());
	// The underlying active cue is still tracked
	assert!(session.active_caption().is_some());
}

#[tokio::test]
async fn chapter_positions_follow_known_duration() {
	let mut session = canned_session();
	session.load_chapters().await;

	let marker = session.chapters()[1].clone();
	assert_eq!(session.chapter_position(&marker), 0.0);

	session.set_duration(160.0);
	assert_eq!(session.chapter_position(&marker), 25.0);
}
