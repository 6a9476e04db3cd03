use jsonprompt_core::enhance;
use tracing::info;

use super::read_prompt;

/// Strategy for printing the auto-enhanced form of a prompt.
#[derive(Debug, Clone, Copy)]
pub struct EnhanceStrategy;

impl super::CommandStrategy for EnhanceStrategy {
    type Input = Option<String>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = read_prompt(input, None).await?;
        let enhanced = enhance(&text)?;

        if enhanced.is_unchanged() {
            info!("Prompt already covers every enhancement rule");
        }
        println!("{}", enhanced.text);
        Ok(())
    }
}
