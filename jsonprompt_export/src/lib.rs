//! Clipboard and file-save capabilities for generated JSON.
//!
//! Both capabilities succeed or fail atomically. [`Exporter`] turns their
//! outcome into a user-facing [`Notice`] so callers never propagate export
//! failures.

pub mod clipboard;
pub mod download;

pub use clipboard::{ClipboardCommand, SystemClipboard};
pub use download::DownloadFile;

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

pub const EXPORT_FILE_NAME: &str = "generated-prompt.json";
pub const EXPORT_MEDIA_TYPE: &str = "application/json";

#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait FileSink: Send + Sync {
    /// Persist `text`, returning where it was written.
    async fn save(&self, text: &str) -> anyhow::Result<PathBuf>;
}

/// Outcome of an export action as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

pub struct Exporter<C, F> {
    clipboard: C,
    file: F,
}

impl<C: ClipboardSink, F: FileSink> Exporter<C, F> {
    pub const fn new(clipboard: C, file: F) -> Self {
        Self { clipboard, file }
    }

    pub async fn copy(&self, json: &str) -> Notice {
        if json.is_empty() {
            return Notice::error("No JSON to copy");
        }
        match self.clipboard.write_text(json).await {
            Ok(()) => Notice::success("JSON copied to clipboard!"),
            Err(e) => {
                warn!("Clipboard write failed: {e:#}");
                Notice::error("Failed to copy to clipboard")
            }
        }
    }

    pub async fn download(&self, json: &str) -> Notice {
        if json.is_empty() {
            return Notice::error("No JSON to download");
        }
        match self.file.save(json).await {
            Ok(path) => {
                info!("Saved {} ({EXPORT_MEDIA_TYPE})", path.display());
                Notice::success("JSON file downloaded successfully!")
            }
            Err(e) => {
                warn!("File save failed: {e:#}");
                Notice::error("Failed to download file")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClipboard {
        fail: bool,
        contents: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ClipboardSink for MemoryClipboard {
        async fn write_text(&self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct FailingFile;

    #[async_trait]
    impl FileSink for FailingFile {
        async fn save(&self, _text: &str) -> anyhow::Result<PathBuf> {
            anyhow::bail!("disk full")
        }
    }

    #[tokio::test]
    async fn test_copy_success_and_failure() {
        let exporter = Exporter::new(MemoryClipboard::default(), FailingFile);
        let notice = exporter.copy("{}").await;
        assert_eq!(notice, Notice::success("JSON copied to clipboard!"));
        assert_eq!(
            exporter.clipboard.contents.lock().unwrap().as_deref(),
            Some("{}")
        );

        let failing = Exporter::new(
            MemoryClipboard {
                fail: true,
                ..Default::default()
            },
            FailingFile,
        );
        let notice = failing.copy("{}").await;
        assert!(notice.is_error);
        assert_eq!(notice.message, "Failed to copy to clipboard");
    }

    #[tokio::test]
    async fn test_empty_output_is_rejected() {
        let exporter = Exporter::new(MemoryClipboard::default(), FailingFile);
        assert_eq!(exporter.copy("").await.message, "No JSON to copy");
        assert_eq!(exporter.download("").await.message, "No JSON to download");
        assert!(exporter.clipboard.contents.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_download_failure_is_reported() {
        let exporter = Exporter::new(MemoryClipboard::default(), FailingFile);
        let notice = exporter.download("{}").await;
        assert_eq!(notice, Notice::error("Failed to download file"));
    }
}
