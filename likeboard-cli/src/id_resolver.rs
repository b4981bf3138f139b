//! ID resolver module
//!
//! Repository ids are opaque strings assigned by the API (usually long and
//! unpleasant to type). This module resolves a short, unambiguous prefix to
//! a full id by listing the collection.

use anyhow::{Context, Result, anyhow};
use likeboard_client::RepositoriesClient;

/// Resolve a repository id or prefix to a full id
///
/// An exact match always wins. Otherwise the input is treated as a prefix
/// and must match exactly one listed repository.
///
/// # Errors
/// Returns an error if:
/// - No repository matches the prefix
/// - Multiple repositories match the prefix (ambiguous)
/// - The list call fails
pub async fn resolve_repository_id(client: &RepositoriesClient, input: &str) -> Result<String> {
    let repositories = client
        .list_repositories()
        .await
        .context("Failed to fetch repositories for ID resolution")?;

    if repositories.iter().any(|r| r.id == input) {
        return Ok(input.to_string());
    }

    let matches: Vec<_> = repositories
        .iter()
        .filter(|r| r.id.starts_with(input))
        .collect();

    match matches.len() {
        0 => Err(anyhow!(
            "No repository found with ID starting with '{}'",
            input
        )),
        1 => Ok(matches[0].id.clone()),
        _ => {
            let ids: Vec<String> = matches.iter().map(|r| r.id.clone()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple repositories: {}",
                input,
                ids.join(", ")
            ))
        }
    }
}
