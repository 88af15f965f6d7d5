pub mod captions;
pub mod chapters;
pub mod error;
pub mod lookup;
pub mod timestamp;
pub mod types;

pub use captions::parse_captions;
pub use chapters::{parse_chapters, parse_chapters_with, ChapterParseOptions};
pub use error::{Result, TimedTextError};
pub use lookup::{active_caption_at, active_caption_index, active_chapter_at, active_chapter_index, chapter_display_position};
pub use timestamp::parse_timestamp;
pub use types::{CaptionCue, ChapterMarker, Seconds};
