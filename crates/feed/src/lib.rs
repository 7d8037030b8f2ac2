//! Feed retrieval and normalization for newsdesk.
//!
//! `RssFeedSource` is the production [`FeedSource`](newsdesk_core::FeedSource)
//! implementation (HTTP + RSS/Atom parsing); `FeedFetcher` is the pipeline
//! that turns a category name into a [`FeedEnvelope`](newsdesk_core::FeedEnvelope)
//! of normalized articles.

pub mod decode;
pub mod fetcher;
pub mod rss;

pub use fetcher::FeedFetcher;
pub use rss::RssFeedSource;
