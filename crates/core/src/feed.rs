//! FeedSource trait — the abstraction over feed retrieval.
//!
//! A FeedSource knows how to fetch a URL and hand back raw entries.
//! Network access and RSS/Atom parsing live behind this seam; the
//! normalization pipeline only ever sees [`RawEntry`] values, which is
//! what lets the pipeline be tested with stub feeds.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::error::FeedError;

/// One item as retrieved from an RSS/Atom source, before normalization
/// into an [`Article`](crate::article::Article). Everything is optional:
/// real feeds omit any of these.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    /// Entry headline, possibly HTML-escaped.
    pub title: Option<String>,

    /// Entry link/URI.
    pub uri: Option<String>,

    /// Publish time, already resolved to UTC by the source
    /// (`published` falling back to `updated` where the format has both).
    pub published: Option<DateTime<Utc>>,

    /// Body/description text, possibly HTML-escaped.
    pub content: Option<String>,
}

/// The feed-retrieval collaborator.
///
/// Implementations: `RssFeedSource` (reqwest + feed-rs) in production,
/// stub sources in tests.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve the feed at `url` and return its entries in feed order.
    async fn retrieve(&self, url: &str) -> Result<Vec<RawEntry>, FeedError>;
}
