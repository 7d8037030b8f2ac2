//! archive_data tool — validate and save JSON under the dated news name.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use newsdesk_archive::{ArchiveWriter, json_file_stem};
use newsdesk_core::error::ToolError;
use newsdesk_core::tool::{Tool, ToolResult};

pub struct ArchiveDataTool {
    writer: Arc<ArchiveWriter>,
}

impl ArchiveDataTool {
    pub fn new(writer: Arc<ArchiveWriter>) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl Tool for ArchiveDataTool {
    fn name(&self) -> &str {
        "archive_data"
    }

    fn description(&self) -> &str {
        "Save a JSON document (for example a news envelope) to the archive \
         folder as <category>_news_<date>.json. The content must be well-formed JSON."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The JSON document to save"
                },
                "category": {
                    "type": "string",
                    "description": "The news category the document belongs to; used in the file name"
                }
            },
            "required": ["content", "category"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let content = arguments["content"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'content' argument".into()))?;

        let category = arguments["category"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'category' argument".into()))?;

        let stem = json_file_stem(category, Utc::now().date_naive());
        let result = self.writer.archive_json(content, &stem).await;
        let output = match (&result.path, &result.message) {
            (Some(path), _) => format!("Data archived to: {path}"),
            (None, Some(message)) => format!("Archive failed: {message}"),
            (None, None) => "Archive failed".to_string(),
        };

        Ok(ToolResult {
            call_id: String::new(),
            success: result.ok,
            output,
            data: serde_json::to_value(&result).ok(),
        })
    }
}
