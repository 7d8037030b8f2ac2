//! get_news tool — fetch today's news for a category.

use std::sync::Arc;

use async_trait::async_trait;
use newsdesk_core::error::ToolError;
use newsdesk_core::tool::{Tool, ToolResult};
use newsdesk_feed::FeedFetcher;

pub struct GetNewsTool {
    fetcher: Arc<FeedFetcher>,
}

impl GetNewsTool {
    pub fn new(fetcher: Arc<FeedFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl Tool for GetNewsTool {
    fn name(&self) -> &str {
        "get_news"
    }

    fn description(&self) -> &str {
        "Get current news stories for a category. Returns a JSON envelope with \
         up to 10 articles (title, link, publish date, summary) or an error message."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "The news category to fetch, e.g. Technology, World, Sports"
                }
            },
            "required": ["category"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let category = arguments["category"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'category' argument".into()))?;

        if category.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "'category' must not be empty".into(),
            ));
        }

        // The envelope is the whole contract: fetch failures come back as
        // an error envelope, not as an Err.
        let envelope = self.fetcher.get_news(category).await;
        let success = envelope.is_success();
        let output = serde_json::to_string_pretty(&envelope)
            .map_err(|e| ToolError::ExecutionFailed {
                tool_name: "get_news".into(),
                reason: e.to_string(),
            })?;
        let data = serde_json::to_value(&envelope).ok();

        Ok(ToolResult {
            call_id: String::new(),
            success,
            output,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::error::FeedError;
    use newsdesk_core::feed::{FeedSource, RawEntry};

    struct StubSource {
        entries: Vec<RawEntry>,
    }

    #[async_trait]
    impl FeedSource for StubSource {
        async fn retrieve(&self, _url: &str) -> Result<Vec<RawEntry>, FeedError> {
            Ok(self.entries.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl FeedSource for DownSource {
        async fn retrieve(&self, _url: &str) -> Result<Vec<RawEntry>, FeedError> {
            Err(FeedError::Network("connection refused".into()))
        }
    }

    fn tool_with_entries(entries: Vec<RawEntry>) -> GetNewsTool {
        GetNewsTool::new(Arc::new(FeedFetcher::new(
            Arc::new(StubSource { entries }),
            "https://rss.example.com/feeds",
        )))
    }

    #[test]
    fn tool_definition() {
        let tool = tool_with_entries(vec![]);
        assert_eq!(tool.name(), "get_news");
        let schema = tool.parameters_schema();
        assert_eq!(schema["required"], serde_json::json!(["category"]));
        assert!(schema["properties"]["category"].is_object());
    }

    #[tokio::test]
    async fn returns_envelope_json() {
        let entries = vec![RawEntry {
            title: Some("Rust 2.0 announced &amp; shipped".into()),
            uri: Some("https://news.example.com/rust".into()),
            published: None,
            content: Some("The big one.".into()),
        }];
        let tool = tool_with_entries(entries);

        let result = tool
            .execute(serde_json::json!({"category": "Technology"}))
            .await
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["status"], "success");
        assert_eq!(data["category"], "Technology");
        assert_eq!(data["count"], 1);
        assert_eq!(
            data["articles"][0]["title"],
            "Rust 2.0 announced & shipped"
        );
        assert!(result.output.contains("Technology"));
    }

    #[tokio::test]
    async fn fetch_failure_is_an_error_envelope_not_an_err() {
        let tool = GetNewsTool::new(Arc::new(FeedFetcher::new(
            Arc::new(DownSource),
            "https://rss.example.com/feeds",
        )));

        let result = tool
            .execute(serde_json::json!({"category": "Sports"}))
            .await
            .unwrap();

        assert!(!result.success);
        let data = result.data.unwrap();
        assert_eq!(data["status"], "error");
        assert!(data["message"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn missing_category_returns_error() {
        let tool = tool_with_entries(vec![]);
        let result = tool.execute(serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn blank_category_returns_error() {
        let tool = tool_with_entries(vec![]);
        let result = tool.execute(serde_json::json!({"category": "  "})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
