//! archive_content tool — save plain text to the archive folder.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use newsdesk_archive::ArchiveWriter;
use newsdesk_core::error::ToolError;
use newsdesk_core::tool::{Tool, ToolResult};

pub struct ArchiveContentTool {
    writer: Arc<ArchiveWriter>,
}

impl ArchiveContentTool {
    pub fn new(writer: Arc<ArchiveWriter>) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl Tool for ArchiveContentTool {
    fn name(&self) -> &str {
        "archive_content"
    }

    fn description(&self) -> &str {
        "Save content to a text file in the archive folder. Overwrites any \
         existing file with the same name."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The content to save"
                },
                "file_name": {
                    "type": "string",
                    "description": "Optional file name without extension. Defaults to a timestamped name."
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let content = arguments["content"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'content' argument".into()))?;

        let file_name = match arguments["file_name"].as_str() {
            Some(name) => name.to_string(),
            None => format!("archive_{}", Utc::now().format("%Y%m%d_%H%M%S")),
        };

        let result = self.writer.archive_text(content, &file_name).await;
        let output = match (&result.path, &result.message) {
            (Some(path), _) => format!("Content archived to: {path}"),
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
