//! Likeboard CLI
//!
//! Command-line interface for the repositories collection API: one-shot
//! commands for scripting plus an interactive screen that mirrors the
//! original list view.

mod commands;
mod config;
mod id_resolver;
mod screen;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "likeboard")]
#[command(about = "Likeboard repository list CLI", long_about = None)]
struct Cli {
    /// Collection API URL
    #[arg(long, env = "LIKEBOARD_API_URL", default_value = "http://localhost:3333")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "likeboard_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
