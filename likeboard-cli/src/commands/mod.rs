//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod repository;
mod screen;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all repositories
    List,
    /// Add a repository
    Add {
        /// Title (defaults to a timestamped one)
        #[arg(short, long)]
        title: Option<String>,

        /// URL
        #[arg(short, long)]
        url: Option<String>,

        /// Techs rendered as tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        techs: Vec<String>,
    },
    /// Like a repository
    Like {
        /// Repository ID or unambiguous prefix
        id: String,
    },
    /// Delete a repository
    Delete {
        /// Repository ID or unambiguous prefix
        id: String,
    },
    /// Interactive list screen
    Screen,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Screen => screen::run_screen(config).await,
        other => repository::handle_repository_command(other, config).await,
    }
}
