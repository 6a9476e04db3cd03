use std::path::PathBuf;
use std::time::Duration;

use jsonprompt_config::Config;
use jsonprompt_core::{ConvertError, PromptMapper, enhance};
use jsonprompt_export::{DownloadFile, Exporter, Notice, SystemClipboard};
use tracing::info;

use super::read_prompt;

/// Input parameters for the Convert command strategy.
#[derive(Debug, Clone)]
pub struct ConvertInput {
    pub config: Config,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub enhance: bool,
    pub copy: bool,
    pub save: bool,
    pub out_dir: Option<PathBuf>,
    pub no_delay: bool,
}

/// Strategy for converting prompt text into a JSON prompt.
///
/// Prints the JSON on stdout; validation and export notices go to stderr so
/// the output can be piped.
#[derive(Debug, Clone, Copy)]
pub struct ConvertStrategy;

impl super::CommandStrategy for ConvertStrategy {
    type Input = ConvertInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.config;
        let mut text = read_prompt(input.text, input.file.as_deref()).await?;
        if text.trim().is_empty() {
            return Err(ConvertError::EmptyInput.into());
        }

        if input.enhance || config.converter.enhance_by_default {
            let enhanced = enhance(&text)?;
            info!("Applied enhancement rules: {:?}", enhanced.applied);
            text = enhanced.text;
        }

        if !input.no_delay && config.converter.processing_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.converter.processing_delay_ms)).await;
        }

        let conversion = PromptMapper::new().convert(&text)?;
        info!("Generated prompt for task {}", conversion.structure.task);

        println!("{}", conversion.json);
        eprintln!("{}", conversion.validation.message);
        if !conversion.validation.is_valid {
            anyhow::bail!("Failed to generate JSON prompt");
        }

        if input.copy || input.save {
            let clipboard = config
                .export
                .clipboard_command
                .as_deref()
                .map_or_else(SystemClipboard::detect, SystemClipboard::with_command);
            let directory = input
                .out_dir
                .or(config.export.directory)
                .unwrap_or_else(|| PathBuf::from("."));
            let file = DownloadFile::with_file_name(directory, config.export.file_name);
            let exporter = Exporter::new(clipboard, file);

            if input.copy {
                report(&exporter.copy(&conversion.json).await);
            }
            if input.save {
                report(&exporter.download(&conversion.json).await);
            }
        }

        Ok(())
    }
}

fn report(notice: &Notice) {
    if notice.is_error {
        eprintln!("✗ {}", notice.message);
    } else {
        eprintln!("✓ {}", notice.message);
    }
}
