use async_trait::async_trait;

use crate::error::FetchError;

/// Retrieves source documents by URL.
///
/// The session only ever needs the text body; callers supply an
/// implementation so tests and demos can run without a network.
#[async_trait]
pub trait TextSource: Send + Sync {
	async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches source documents over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpTextSource {
	client: reqwest::Client,
}

impl HttpTextSource {
	pub fn new() -> Self {
		Self { client: reqwest::Client::new() }
	}

	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl TextSource for HttpTextSource {
	async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
		let response = self.client.get(url).send().await?.error_for_status()?;
		Ok(response.text().await?)
	}
}
