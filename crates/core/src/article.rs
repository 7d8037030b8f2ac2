//! The wire-facing value types: articles, feed envelopes, archive results.
//!
//! All three are transient — constructed fresh per call, never mutated
//! after construction. Serialized shape is camelCase with absent fields
//! omitted (not emitted as null), and non-ASCII text passes through
//! unescaped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hard cap on articles per envelope. The fetcher takes the first N
/// entries in feed order; the envelope constructor enforces the same cap
/// so the invariant holds no matter who builds it.
pub const MAX_ARTICLES: usize = 10;

/// One normalized feed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Entity-decoded, trimmed headline. Empty if the source omitted it.
    pub title: String,

    /// Absolute URL of the story. Empty if the entry carried no link.
    pub link: String,

    /// Publish time in UTC. Entries without any date are stamped with the
    /// Unix epoch — a visible "unknown" sentinel, not a fabricated
    /// fetch time.
    pub publish_date: DateTime<Utc>,

    /// Entity-decoded, trimmed body/description text.
    pub summary: String,

    /// The *requested* category, verbatim. Never feed-derived.
    pub category: String,
}

/// Envelope status discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Success,
    Error,
}

/// The result of one fetch: either a list of articles or an error message,
/// always stamped with capture time and the requested category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEnvelope {
    pub status: FeedStatus,

    /// Capture time (when the fetch ran), not publish time.
    pub timestamp: DateTime<Utc>,

    /// Echo of the requested category.
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedEnvelope {
    /// Build a success envelope. Articles beyond [`MAX_ARTICLES`] are
    /// dropped; `count` always equals the number actually carried.
    pub fn success(category: impl Into<String>, mut articles: Vec<Article>) -> Self {
        articles.truncate(MAX_ARTICLES);
        Self {
            status: FeedStatus::Success,
            timestamp: Utc::now(),
            category: category.into(),
            count: Some(articles.len()),
            articles: Some(articles),
            message: None,
        }
    }

    /// Build an error envelope carrying the failure description.
    pub fn error(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: FeedStatus::Error,
            timestamp: Utc::now(),
            category: category.into(),
            count: None,
            articles: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FeedStatus::Success
    }

    /// The articles, or an empty slice for error envelopes.
    pub fn articles(&self) -> &[Article] {
        self.articles.as_deref().unwrap_or_default()
    }
}

/// Outcome of one archive write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResult {
    pub ok: bool,

    /// Absolute resolved path, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Failure description, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ArchiveResult {
    pub fn written(path: impl Into<String>) -> Self {
        Self {
            ok: true,
            path: Some(path.into()),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            path: None,
            message: Some(message.into()),
        }
    }
}
