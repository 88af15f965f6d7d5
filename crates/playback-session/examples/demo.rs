use async_trait::async_trait;
use playback_session::{format_time, FetchError, PlaybackSession, SessionConfig, TextSource};
use tracing::Level;

const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MPD xmlns="urn:mpeg:dash:schema:mpd:2011">
	<Period>
		<EventStream schemeIdUri="urn:mpeg:dash:event:2012" value="chapters">
			<Event id="welcome" presentationTime="0">Welcome</Event>
			<Event id="walkthrough" presentationTime="20">Walkthrough</Event>
			<Event id="wrap-up" presentationTime="55">Wrap Up</Event>
		</EventStream>
	</Period>
</MPD>"#;

const TRACK: &str = "WEBVTT

1
00:00:02.000 --> 00:00:06.000
Thanks for joining the stream today.

2
00:00:21.000 --> 00:00:26.500
Let's walk through the new player.

3
00:00:56.000 --> 00:01:00.000
That's all for now!
";

/// Serves the embedded documents so the demo runs without a network
struct EmbeddedSource;

#[async_trait]
impl TextSource for EmbeddedSource {
	async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
		if url.ends_with(".xml") {
			Ok(MANIFEST.to_string())
		} else if url.ends_with(".vtt") {
			Ok(TRACK.to_string())
		} else {
			Err(FetchError::Unavailable(format!("no embedded document for {url}")))
		}
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_target(false).init();

	let config = SessionConfig::new("demo://media/full.xml", "demo://media/transcript.vtt");
	let mut session = PlaybackSession::new(config, EmbeddedSource);

	session.load_chapters().await;
	session.load_captions().await;
	session.set_duration(65.0);

	println!("\nChapter markers:");
	for marker in session.chapters() {
		println!("  {:>5.1}%  {}  [{}]", session.chapter_position(marker), marker.title, format_time(marker.start_time));
	}

	println!("\nPlayback:");
	for tick in 0..=13 {
		let t = f64::from(tick) * 5.0;
		session.update_time(t);

		let chapter = session.active_chapter().map_or("-", |m| m.title.as_str());
		let caption = session.visible_caption().map_or("", |c| c.text.as_str());

		println!("  {:>7}  {:<12} {}", format_time(t), chapter, caption.replace('\n', " / "));
	}

	println!();
}
