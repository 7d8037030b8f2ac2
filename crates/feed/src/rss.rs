//! RSS/Atom feed source — the production `FeedSource` implementation.
//!
//! Fetches the feed over HTTP and parses it with `feed-rs`, which
//! handles RSS 0.x/1.0/2.0 and Atom uniformly. Only the mapping from
//! parsed entries to [`RawEntry`] lives here; normalization into
//! articles is the fetcher's job.

use std::time::Duration;

use async_trait::async_trait;
use newsdesk_core::error::FeedError;
use newsdesk_core::feed::{FeedSource, RawEntry};
use tracing::debug;

const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

pub struct RssFeedSource {
    client: reqwest::Client,
}

impl RssFeedSource {
    /// Build a source with the given per-request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build feed HTTP client");
        Self { client }
    }

    /// Parse a raw feed body into entries, in feed order.
    fn entries_from_bytes(bytes: &[u8]) -> Result<Vec<RawEntry>, FeedError> {
        let feed = feed_rs::parser::parse(bytes).map_err(|e| FeedError::Parse(e.to_string()))?;

        let entries = feed
            .entries
            .into_iter()
            .map(|entry| RawEntry {
                title: entry.title.map(|t| t.content),
                uri: entry.links.first().map(|l| l.href.clone()),
                published: entry.published.or(entry.updated),
                content: entry
                    .summary
                    .map(|t| t.content)
                    .or_else(|| entry.content.and_then(|c| c.body)),
            })
            .collect();

        Ok(entries)
    }
}

impl Default for RssFeedSource {
    fn default() -> Self {
        Self::new(15)
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn retrieve(&self, url: &str) -> Result<Vec<RawEntry>, FeedError> {
        let resp = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let entries = Self::entries_from_bytes(&bytes)?;
        debug!(url, entries = entries.len(), "feed retrieved");
        Ok(entries)
    }
}
