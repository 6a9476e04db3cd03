#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ConvertInput, ConvertStrategy, EnhanceStrategy, InitStrategy, ToolsInput,
    ToolsStrategy, ValidateStrategy, VersionStrategy,
};
use jsonprompt_config::Config;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "jsonprompt")]
#[command(about = "Turn plain-text descriptions into structured JSON prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a text description into a JSON prompt
    Convert {
        /// Prompt text (read from --file or stdin when omitted)
        text: Option<String>,

        /// Read the prompt from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Auto-enhance the text before converting
        #[arg(short, long)]
        enhance: bool,

        /// Copy the JSON to the system clipboard
        #[arg(short, long)]
        copy: bool,

        /// Save the JSON as generated-prompt.json
        #[arg(short, long)]
        save: bool,

        /// Directory for --save (defaults to config, then the working directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Skip the processing delay
        #[arg(long)]
        no_delay: bool,
    },
    /// Append clarifying clauses to a prompt
    Enhance {
        /// Prompt text (read from stdin when omitted)
        text: Option<String>,
    },
    /// Check that a file contains valid JSON
    Validate {
        path: PathBuf,
    },
    /// List the tool catalog
    Tools {
        /// Case-insensitive search over titles, descriptions and features
        #[arg(short, long)]
        query: Option<String>,

        /// Converter, Generator or Utility
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

/// Tracing filter for a configured level, falling back to `info` when it
/// does not parse.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn config_or_default(loaded: &anyhow::Result<Config>) -> Config {
    loaded.as_ref().map_or_else(|_| Config::default(), Clone::clone)
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken config must not take down commands that never read it.
    let loaded = Config::load();
    let config = config_or_default(&loaded);
    init_tracing(&config.logging.level)?;
    if let Err(e) = &loaded {
        warn!("Ignoring config, using defaults: {e:#}");
    }

    match cli.command {
        Commands::Convert {
            text,
            file,
            enhance,
            copy,
            save,
            out_dir,
            no_delay,
        } => {
            let input = ConvertInput {
                config,
                text,
                file,
                enhance,
                copy,
                save,
                out_dir,
                no_delay,
            };
            ConvertStrategy.execute(input).await?;
        }
        Commands::Enhance { text } => EnhanceStrategy.execute(text).await?,
        Commands::Validate { path } => ValidateStrategy.execute(path).await?,
        Commands::Tools { query, category } => {
            ToolsStrategy
                .execute(ToolsInput { query, category })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
