//! CLI command implementations.

pub mod news;
pub mod repl;
pub mod tools;

use std::sync::Arc;

use newsdesk_archive::ArchiveWriter;
use newsdesk_config::AppConfig;
use newsdesk_feed::{FeedFetcher, RssFeedSource};

/// Wire the two components from configuration.
pub fn build_components(config: &AppConfig) -> (Arc<FeedFetcher>, Arc<ArchiveWriter>) {
    let source = Arc::new(RssFeedSource::new(config.feed.timeout_secs));
    let fetcher = Arc::new(FeedFetcher::new(source, &config.feed.base_url));
    let writer = Arc::new(ArchiveWriter::new(&config.archive.directory));
    (fetcher, writer)
}
