//! newsdesk CLI — the main entry point.
//!
//! Commands:
//! - `news <category>` — One-shot fetch, print the envelope JSON
//! - `tools`           — List the registered tool definitions
//! - (no command)      — Interactive loop: news / save / tools / help

use clap::{Parser, Subcommand};
use newsdesk_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "newsdesk",
    about = "newsdesk — news fetch and archive tools on a console loop",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch news for a category and print the envelope JSON
    News {
        /// The category to fetch, e.g. Technology
        category: String,
    },

    /// List the registered tool definitions
    Tools,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    match cli.command {
        Some(Commands::News { category }) => commands::news::run(&config, &category).await?,
        Some(Commands::Tools) => commands::tools::run(&config)?,
        None => commands::repl::run(&config).await?,
    }

    Ok(())
}
