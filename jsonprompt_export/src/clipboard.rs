use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::ClipboardSink;

/// A program that reads clipboard contents from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Run `command` through the user's shell.
    #[must_use]
    pub fn shell(command: &str) -> Self {
        if cfg!(target_os = "windows") {
            Self::new("powershell", &["-NoProfile", "-NonInteractive", "-Command", command])
        } else {
            let shell = std::env::var("SHELL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "/bin/sh".to_string());
            Self::new(&shell, &["-c", command])
        }
    }
}

/// Platform clipboard tools, in the order they are tried.
#[must_use]
pub fn platform_candidates() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        vec![ClipboardCommand::new("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        vec![ClipboardCommand::new("clip", &[])]
    } else {
        vec![
            ClipboardCommand::new("wl-copy", &[]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Writes to the system clipboard by piping into a clipboard program.
pub struct SystemClipboard {
    candidates: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    #[must_use]
    pub fn detect() -> Self {
        Self {
            candidates: platform_candidates(),
        }
    }

    /// Use `command` (a shell command line) instead of platform detection.
    #[must_use]
    pub fn with_command(command: &str) -> Self {
        Self {
            candidates: vec![ClipboardCommand::shell(command)],
        }
    }

    async fn pipe(command: &ClipboardCommand, text: &str) -> std::io::Result<()> {
        let mut child = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "{} exited with {status}",
                command.program
            )))
        }
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut last_error = None;
        for command in &self.candidates {
            match Self::pipe(command, text).await {
                Ok(()) => {
                    debug!("Copied {} bytes via {}", text.len(), command.program);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("Clipboard program {} not found", command.program);
                }
                Err(e) => {
                    warn!("Clipboard program {} failed: {e}", command.program);
                    last_error = Some(anyhow::anyhow!("{}: {e}", command.program));
                }
            }
        }
        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No clipboard program available")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_candidates_not_empty() {
        assert!(!platform_candidates().is_empty());
    }

    #[test]
    fn test_shell_command_shape() {
        let cmd = ClipboardCommand::shell("cat > /dev/null");
        assert!(!cmd.program.is_empty());
        assert_eq!(cmd.args.last().map(String::as_str), Some("cat > /dev/null"));
    }

    #[tokio::test]
    async fn test_missing_programs_fail_cleanly() {
        let clipboard = SystemClipboard {
            candidates: vec![ClipboardCommand::new("jsonprompt-no-such-clipboard", &[])],
        };
        let err = clipboard.write_text("{}").await.unwrap_err();
        assert!(err.to_string().contains("No clipboard program"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_candidate_falls_through_to_next() {
        let out = std::env::temp_dir().join(format!("jsonprompt_clip_{}", uuid::Uuid::now_v7()));
        let clipboard = SystemClipboard {
            candidates: vec![
                ClipboardCommand::new("false", &[]),
                ClipboardCommand::new("sh", &["-c", &format!("cat > '{}'", out.display())]),
            ],
        };

        clipboard.write_text("{}").await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "{}");

        let _ = std::fs::remove_file(&out);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_all_candidates_failing_reports_last_error() {
        let clipboard = SystemClipboard {
            candidates: vec![
                ClipboardCommand::new("jsonprompt-no-such-clipboard", &[]),
                ClipboardCommand::new("sh", &["-c", "cat > /dev/null; exit 3"]),
            ],
        };

        let err = clipboard.write_text("{}").await.unwrap_err();
        assert!(err.to_string().starts_with("sh: "));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_custom_command_receives_text() {
        let out = std::env::temp_dir().join(format!("jsonprompt_clip_{}", uuid::Uuid::now_v7()));
        let clipboard = SystemClipboard::with_command(&format!("cat > '{}'", out.display()));

        clipboard.write_text("{\"a\": 1}").await.unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "{\"a\": 1}");

        let _ = std::fs::remove_file(&out);
    }
}
