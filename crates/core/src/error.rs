//! Error types for the newsdesk domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.
//!
//! Note that the public component operations (`FeedFetcher::get_news`,
//! `ArchiveWriter::archive_*`) are error boundaries: they render these
//! errors into envelope/result values instead of returning them. The
//! typed enums exist so the layers *beneath* the boundary, and the
//! tests, can distinguish causes.

use thiserror::Error;

/// The top-level error type for all newsdesk operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Feed errors ---
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    // --- Archive errors ---
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    // --- Tool errors ---
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures while retrieving or parsing a feed.
///
/// Payloads are plain strings: the underlying HTTP/XML errors are not
/// `Clone` and their text is all the error envelope carries anyway.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Network(String),

    #[error("feed returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to parse feed: {0}")]
    Parse(String),
}

/// Failures while archiving content to disk.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("content is empty")]
    EmptyContent,

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("write failed at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("file missing after write: {path}")]
    MissingAfterWrite { path: String },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_error_displays_correctly() {
        let err = Error::Feed(FeedError::Status {
            status: 404,
            url: "https://rss.example.com/Nope.xml".into(),
        });
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Nope.xml"));
    }

    #[test]
    fn archive_error_displays_correctly() {
        let err = Error::Archive(ArchiveError::InvalidJson("expected value at line 1".into()));
        assert!(err.to_string().contains("invalid JSON"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn tool_error_displays_correctly() {
        let err = Error::Tool(ToolError::InvalidArguments("Missing 'category'".into()));
        assert!(err.to_string().contains("category"));
    }
}
