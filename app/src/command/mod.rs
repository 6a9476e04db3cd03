//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate zero-sized strategy type with its own input,
//! dispatched statically from `main`.

use std::path::Path;

use tokio::io::AsyncReadExt;

mod convert;
mod enhance;
mod init;
mod tools;
mod validate;
mod version;

pub use convert::{ConvertInput, ConvertStrategy};
pub use enhance::EnhanceStrategy;
pub use init::InitStrategy;
pub use tools::{ToolsInput, ToolsStrategy};
pub use validate::ValidateStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Prompt text from the argument, else the file, else stdin.
async fn read_prompt(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(tokio::fs::read_to_string(path).await?);
    }

    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}
