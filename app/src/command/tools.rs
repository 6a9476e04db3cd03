use jsonprompt_core::{ToolCategory, ToolEntry};
use jsonprompt_core::catalog::{TOOLS, by_category, search};

/// Input parameters for the Tools command strategy.
#[derive(Debug, Clone)]
pub struct ToolsInput {
    pub query: Option<String>,
    pub category: Option<String>,
}

/// Strategy for listing the tool catalog, optionally filtered.
#[derive(Debug, Clone, Copy)]
pub struct ToolsStrategy;

impl super::CommandStrategy for ToolsStrategy {
    type Input = ToolsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let pool: Vec<ToolEntry> = match input.category.as_deref() {
            Some(raw) => {
                let category: ToolCategory = raw.parse().map_err(anyhow::Error::msg)?;
                by_category(TOOLS, category).into_iter().copied().collect()
            }
            None => TOOLS.to_vec(),
        };
        let hits = search(&pool, input.query.as_deref().unwrap_or_default());

        if hits.is_empty() {
            println!("No tools match.");
            return Ok(());
        }

        println!("{} of {} tools shown\n", hits.len(), TOOLS.len());
        for tool in hits {
            println!(
                "{} [{}] ({})",
                tool.title,
                tool.category.as_str(),
                tool.status.as_str()
            );
            println!("  {}", tool.description);
            println!("  Features: {}", tool.features.join(", "));
            println!();
        }
        Ok(())
    }
}
