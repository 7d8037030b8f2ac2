//! The news-fetch-and-normalize pipeline.
//!
//! `FeedFetcher::get_news` is an error boundary: whatever goes wrong
//! underneath (network, HTTP status, parse), the caller always gets a
//! well-formed [`FeedEnvelope`], never an `Err` or a panic.

use std::sync::Arc;

use chrono::DateTime;
use newsdesk_core::article::{Article, FeedEnvelope, MAX_ARTICLES};
use newsdesk_core::feed::{FeedSource, RawEntry};
use tracing::{debug, info, warn};

use crate::decode::decode_entities;

pub struct FeedFetcher {
    source: Arc<dyn FeedSource>,
    base_url: String,
}

impl FeedFetcher {
    /// Build a fetcher over a feed source. `base_url` is the prefix the
    /// category is appended to; a trailing slash is tolerated.
    pub fn new(source: Arc<dyn FeedSource>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { source, base_url }
    }

    /// The URL fetched for a category. The category is used verbatim —
    /// no allowed-set validation; a bogus category just yields an error
    /// envelope from the source.
    pub fn feed_url(&self, category: &str) -> String {
        format!("{}/{}.xml", self.base_url, category)
    }

    /// Fetch news for a category and normalize into an envelope.
    ///
    /// At most [`MAX_ARTICLES`] entries are taken, in the order the feed
    /// provides them; no re-sorting.
    pub async fn get_news(&self, category: &str) -> FeedEnvelope {
        let url = self.feed_url(category);
        debug!(category, url, "fetching feed");

        match self.source.retrieve(&url).await {
            Ok(entries) => {
                let articles: Vec<Article> = entries
                    .into_iter()
                    .take(MAX_ARTICLES)
                    .map(|entry| normalize(entry, category))
                    .collect();
                info!(category, count = articles.len(), "feed fetched");
                FeedEnvelope::success(category, articles)
            }
            Err(e) => {
                warn!(category, error = %e, "feed fetch failed");
                FeedEnvelope::error(category, e.to_string())
            }
        }
    }
}

/// Map one raw entry to an article: decode entities, trim, stamp the
/// requested category, default a missing date to the Unix epoch.
fn normalize(entry: RawEntry, category: &str) -> Article {
    Article {
        title: clean(entry.title.as_deref().unwrap_or_default()),
        link: entry.uri.unwrap_or_default(),
        publish_date: entry.published.unwrap_or(DateTime::UNIX_EPOCH),
        summary: clean(entry.content.as_deref().unwrap_or_default()),
        category: category.to_string(),
    }
}

fn clean(text: &str) -> String {
    decode_entities(text).trim().to_string()
}
