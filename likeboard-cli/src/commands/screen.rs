//! Interactive screen command
//!
//! Hosts the list controller in a read-eval-render loop: initialize, render
//! the cards, then apply `add` / `like` / `delete` / `refresh` commands read
//! from stdin, re-rendering after each reconciling operation.
//!
//! Failure policy matches the original screen: a failed remote call leaves
//! the sequence unchanged and is not surfaced in the rendered output, only
//! logged.

use std::sync::Arc;

use anyhow::Result;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::repository::build_payload;
use crate::config::Config;
use crate::screen::RepositoryListController;
use crate::screen::render::render_screen;
use likeboard_client::RepositoriesClient;

/// Run the interactive screen loop until `quit` or end of input
pub async fn run_screen(config: &Config) -> Result<()> {
    let client = Arc::new(RepositoriesClient::new(&config.api_url));
    let mut controller = RepositoryListController::new(client);

    // A failed initial fetch leaves the sequence empty; the screen still
    // comes up and `refresh` can be used to try again.
    if let Err(e) = controller.initialize().await {
        debug!(error = %e, "initial fetch failed");
    }

    print!("{}", render_screen(controller.repositories()));
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match (command, arg) {
            ("quit", _) | ("q", _) => break,
            ("add", _) => {
                if let Err(e) = controller.add(build_payload(None, None, Vec::new())).await {
                    debug!(error = %e, "add failed");
                }
            }
            ("like", id) if !id.is_empty() => {
                if let Err(e) = controller.like(id).await {
                    debug!(error = %e, id, "like failed");
                }
            }
            ("delete", id) if !id.is_empty() => {
                if let Err(e) = controller.delete(id).await {
                    debug!(error = %e, id, "delete failed");
                }
            }
            ("refresh", _) => {
                if let Err(e) = controller.initialize().await {
                    debug!(error = %e, "refresh failed");
                }
            }
            ("", _) => continue,
            _ => {
                print_help();
                continue;
            }
        }

        print!("{}", render_screen(controller.repositories()));
    }

    Ok(())
}

fn print_help() {
    println!(
        "{}",
        "commands: add | like <id> | delete <id> | refresh | quit".dimmed()
    );
}
