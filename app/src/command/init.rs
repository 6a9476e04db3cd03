use jsonprompt_config::Config;

/// Strategy for initializing the configuration.
///
/// This strategy creates the default configuration file at `~/jsonprompt/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::create_config()?;

        println!("✅ Created config file at: {}", path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - converter.processing_delay_ms: pause before output (0 disables)");
        println!("   - converter.enhance_by_default: always auto-enhance prompts");
        println!("   - export.directory / export.file_name: where --save writes");
        println!("   - export.clipboard_command: shell command that receives --copy output");
        println!("   - logging.level: tracing filter, overridden by RUST_LOG");
        Ok(())
    }
}
