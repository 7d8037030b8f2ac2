//! The archive-write contract.
//!
//! `ArchiveWriter` persists content into the archive directory and
//! reports the outcome as an [`ArchiveResult`] — it is an error boundary
//! like the fetcher: no `Err` and no panic crosses `archive_text` /
//! `archive_json`. Files are written as UTF-8 with no byte-order mark;
//! an existing file at the resolved path is overwritten, which is what
//! makes retries safe. Concurrent writes to the same name race at the
//! filesystem with last-write-wins; that is accepted behavior.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use newsdesk_core::article::ArchiveResult;
use newsdesk_core::error::ArchiveError;
use tracing::{info, warn};

use crate::sanitize::sanitize_file_name;

/// File stem for an archived news envelope: `<category>_news_<date>`,
/// category lowercased. Keeps the naming convention in one place for the
/// `archive_data` tool and the CLI `save` command.
pub fn json_file_stem(category: &str, date: NaiveDate) -> String {
    format!("{}_news_{}", category.to_lowercase(), date.format("%Y-%m-%d"))
}

pub struct ArchiveWriter {
    directory: PathBuf,
}

impl ArchiveWriter {
    /// Create a writer for `directory`. A relative path is resolved
    /// against the process working directory at construction, so results
    /// always report absolute paths. The directory itself is created
    /// lazily on first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let directory = if directory.is_absolute() {
            directory
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(directory),
                Err(_) => directory,
            }
        };
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Archive plain text under `<file_name>.txt`. Content is written
    /// verbatim.
    pub async fn archive_text(&self, content: &str, file_name: &str) -> ArchiveResult {
        match self.write_verified(content, file_name, "txt").await {
            Ok(path) => ArchiveResult::written(path),
            Err(e) => {
                warn!(file_name, error = %e, "text archive failed");
                ArchiveResult::failed(e.to_string())
            }
        }
    }

    /// Archive a JSON document under `<file_name>.json`.
    ///
    /// The content must parse as well-formed JSON; it is re-serialized
    /// pretty-printed before writing. On a parse failure nothing touches
    /// the filesystem and the message names the JSON problem, so callers
    /// can tell it apart from I/O trouble.
    pub async fn archive_json(&self, content: &str, file_name: &str) -> ArchiveResult {
        let outcome = async {
            if content.is_empty() {
                return Err(ArchiveError::EmptyContent);
            }
            let document: serde_json::Value = serde_json::from_str(content)
                .map_err(|e| ArchiveError::InvalidJson(e.to_string()))?;
            let pretty = serde_json::to_string_pretty(&document)
                .map_err(|e| ArchiveError::InvalidJson(e.to_string()))?;
            self.write_verified(&pretty, file_name, "json").await
        }
        .await;

        match outcome {
            Ok(path) => ArchiveResult::written(path),
            Err(e) => {
                warn!(file_name, error = %e, "json archive failed");
                ArchiveResult::failed(e.to_string())
            }
        }
    }

    /// Shared write path: validate, sanitize, ensure the directory,
    /// write (overwriting), then confirm the file actually exists.
    async fn write_verified(
        &self,
        content: &str,
        file_name: &str,
        extension: &str,
    ) -> Result<String, ArchiveError> {
        if content.is_empty() {
            return Err(ArchiveError::EmptyContent);
        }

        let stem = sanitize_file_name(file_name)?;

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| ArchiveError::Io {
                path: self.directory.display().to_string(),
                reason: e.to_string(),
            })?;

        let path = self.directory.join(format!("{stem}.{extension}"));

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| ArchiveError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Guard against silent filesystem failures: the write returned
        // Ok, but the file must actually be there now.
        let exists = tokio::fs::try_exists(&path).await.unwrap_or(false);
        if !exists {
            return Err(ArchiveError::MissingAfterWrite {
                path: path.display().to_string(),
            });
        }

        let path = path.display().to_string();
        info!(path, bytes = content.len(), "archived");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(dir: &tempfile::TempDir) -> ArchiveWriter {
        ArchiveWriter::new(dir.path().join("archives"))
    }

    #[tokio::test]
    async fn text_round_trips_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let content = "Tonight's briefing — three stories, two updates.\n";
        let result = w.archive_text(content, "briefing").await;

        assert!(result.ok, "{:?}", result.message);
        let path = result.path.unwrap();
        assert!(Path::new(&path).is_absolute());
        assert!(path.ends_with("briefing.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[tokio::test]
    async fn second_write_overwrites_not_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let first = w.archive_text("first version", "notes").await;
        let second = w.archive_text("second version", "notes").await;

        assert!(first.ok && second.ok);
        assert_eq!(first.path, second.path);
        assert_eq!(
            std::fs::read_to_string(second.path.unwrap()).unwrap(),
            "second version"
        );
        // Exactly one file in the archive directory
        assert_eq!(std::fs::read_dir(w.directory()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn illegal_name_characters_are_cleaned_and_write_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let result = w.archive_text("content", "a/b*c?").await;

        assert!(result.ok);
        let path = result.path.unwrap();
        let written = Path::new(&path).file_name().unwrap().to_str().unwrap();
        assert_eq!(written, "a_b_c_.txt");
        for c in ['/', '\\', '*', '?', '"', '<', '>', '|'] {
            assert!(!written.contains(c));
        }
    }

    #[tokio::test]
    async fn empty_content_fails_without_touching_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let result = w.archive_text("", "foo").await;

        assert!(!result.ok);
        assert!(result.message.unwrap().contains("empty"));
        // The archive directory was never even created
        assert!(!w.directory().exists());
    }

    #[tokio::test]
    async fn json_is_validated_and_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let compact = r#"{"status":"success","count":2,"articles":["a","b"]}"#;
        let result = w.archive_json(compact, "tech").await;

        assert!(result.ok);
        let written = std::fs::read_to_string(result.path.unwrap()).unwrap();
        // No BOM
        assert!(!written.starts_with('\u{feff}'));
        // Pretty-printed, structurally equal to the input
        assert!(written.contains('\n'));
        let reparsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        let original: serde_json::Value = serde_json::from_str(compact).unwrap();
        assert_eq!(reparsed, original);
    }

    #[tokio::test]
    async fn invalid_json_fails_and_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let result = w.archive_json("{not valid json", "x").await;

        assert!(!result.ok);
        let message = result.message.unwrap();
        assert!(message.contains("invalid JSON"), "message was: {message}");
        assert!(!w.directory().exists());
    }

    #[tokio::test]
    async fn empty_json_content_reports_empty_not_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let result = w.archive_json("", "x").await;

        assert!(!result.ok);
        assert!(result.message.unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn unusable_file_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let result = w.archive_text("content", "   ").await;

        assert!(!result.ok);
        assert!(result.message.unwrap().contains("file name"));
    }

    #[tokio::test]
    async fn non_ascii_content_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let w = writer(&dir);

        let content = "Überraschung: 記事 — ¿por qué no?";
        let result = w.archive_text(content, "intl").await;

        assert!(result.ok);
        assert_eq!(
            std::fs::read_to_string(result.path.unwrap()).unwrap(),
            content
        );
    }

    #[test]
    fn json_stem_lowercases_category_and_stamps_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(json_file_stem("Technology", date), "technology_news_2026-08-07");
        assert_eq!(json_file_stem("WORLD", date), "world_news_2026-08-07");
    }
}
