//! LLM-callable tool implementations for newsdesk.
//!
//! Three tools wrap the two core components:
//! - `get_news` — fetch a category feed, return the normalized envelope
//! - `archive_content` — save plain text to the archive folder
//! - `archive_data` — validate and save JSON under the dated news name
//!
//! A command loop and an LLM tool-invocation layer both go through the
//! same [`ToolRegistry`]; neither gets a private code path.

pub mod archive_content;
pub mod archive_data;
pub mod get_news;

use std::sync::Arc;

use newsdesk_archive::ArchiveWriter;
use newsdesk_core::tool::ToolRegistry;
use newsdesk_feed::FeedFetcher;

pub use archive_content::ArchiveContentTool;
pub use archive_data::ArchiveDataTool;
pub use get_news::GetNewsTool;

/// Create the default tool registry with all built-in tools.
pub fn default_registry(fetcher: Arc<FeedFetcher>, writer: Arc<ArchiveWriter>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(GetNewsTool::new(fetcher)));
    registry.register(Box::new(ArchiveContentTool::new(writer.clone())));
    registry.register(Box::new(ArchiveDataTool::new(writer)));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use newsdesk_core::error::FeedError;
    use newsdesk_core::feed::{FeedSource, RawEntry};

    struct EmptySource;

    #[async_trait]
    impl FeedSource for EmptySource {
        async fn retrieve(&self, _url: &str) -> Result<Vec<RawEntry>, FeedError> {
            Ok(vec![])
        }
    }

    #[test]
    fn registry_has_all_three_tools() {
        let fetcher = Arc::new(FeedFetcher::new(
            Arc::new(EmptySource),
            "https://rss.example.com/feeds",
        ));
        let dir = tempfile::tempdir().unwrap();
        let writer = Arc::new(ArchiveWriter::new(dir.path()));

        let registry = default_registry(fetcher, writer);
        let mut names = registry.names();
        names.sort();
        assert_eq!(names, vec!["archive_content", "archive_data", "get_news"]);
    }
}
