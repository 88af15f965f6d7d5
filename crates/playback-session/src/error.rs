use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

/// A source document could not be retrieved.
///
/// Network failures and non-2xx statuses are not distinguished; the session
/// treats every fetch failure the same way.
#[derive(Error, Debug)]
pub enum FetchError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("source unavailable: {0}")]
	Unavailable(String),
}

/// Why a load attempt produced no usable collection.
///
/// Never escapes the session loaders; logged and mapped to the fallback or
/// empty state instead.
#[derive(Error, Debug)]
pub enum SessionError {
	#[error(transparent)]
	Fetch(#[from] FetchError),

	#[error(transparent)]
	Parse(#[from] timed_text::TimedTextError),
}
