use std::path::PathBuf;

use jsonprompt_core::validate_json;

/// Strategy for validating a JSON file.
///
/// Exits with an error when the file does not parse.
#[derive(Debug, Clone, Copy)]
pub struct ValidateStrategy;

impl super::CommandStrategy for ValidateStrategy {
    type Input = PathBuf;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let content = tokio::fs::read_to_string(&input).await?;
        let result = validate_json(&content);

        if !result.is_valid {
            anyhow::bail!("{}: {}", input.display(), result.message);
        }
        println!("{}", result.message);
        Ok(())
    }
}
