use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use crate::{EXPORT_FILE_NAME, FileSink};

/// Saves JSON as a UTF-8 file inside a target directory.
pub struct DownloadFile {
    directory: PathBuf,
    file_name: String,
}

impl DownloadFile {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_file_name(directory, EXPORT_FILE_NAME)
    }

    #[must_use]
    pub fn with_file_name(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    #[must_use]
    pub fn target(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

#[async_trait]
impl FileSink for DownloadFile {
    async fn save(&self, text: &str) -> anyhow::Result<PathBuf> {
        let path = self.target();
        info!("Writing file: {}", path.display());

        tokio::fs::create_dir_all(&self.directory).await?;

        // Write beside the target, then rename over it.
        let staging = self.directory.join(format!("{}.tmp", self.file_name));
        if let Err(e) = tokio::fs::write(&staging, text.as_bytes()).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }
        tokio::fs::rename(&staging, &path).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory_and_file() {
        let dir = std::env::temp_dir()
            .join(format!("jsonprompt_dl_{}", uuid::Uuid::now_v7()))
            .join("nested");

        let sink = DownloadFile::new(&dir);
        let path = sink.save("{\n  \"task\": \"custom_prompt\"\n}").await.unwrap();

        assert_eq!(path, dir.join("generated-prompt.json"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("custom_prompt"));

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }

    #[tokio::test]
    async fn test_save_replaces_existing_file_without_leftovers() {
        let dir = std::env::temp_dir().join(format!("jsonprompt_dl_{}", uuid::Uuid::now_v7()));
        let sink = DownloadFile::new(&dir);

        sink.save("{\"task\": \"search_assistant\", \"purpose\": \"a longer first document\"}")
            .await
            .unwrap();
        let path = sink.save("{}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
        assert!(!dir.join("generated-prompt.json.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_save_keeps_previous_file() {
        let dir = std::env::temp_dir().join(format!("jsonprompt_dl_{}", uuid::Uuid::now_v7()));
        let sink = DownloadFile::new(&dir);
        let path = sink.save("{\"kept\": true}").await.unwrap();

        // A directory squatting on the staging name makes the write fail.
        std::fs::create_dir_all(dir.join("generated-prompt.json.tmp")).unwrap();
        assert!(sink.save("{}").await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"kept\": true}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_custom_file_name() {
        let sink = DownloadFile::with_file_name("/tmp/out", "prompt.json");
        assert_eq!(sink.target(), PathBuf::from("/tmp/out/prompt.json"));
    }
}
