pub mod config;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod keys;
pub mod session;
pub mod transport;

pub use config::SessionConfig;
pub use error::{FetchError, Result, SessionError};
pub use fallback::fallback_chapters;
pub use fetch::{HttpTextSource, TextSource};
pub use keys::{command_for_key, KeyBindingGuard, KeyBindingSet, KeyCommand};
pub use session::PlaybackSession;
pub use transport::{format_time, MediaTransport, TransportControl, TransportState};
