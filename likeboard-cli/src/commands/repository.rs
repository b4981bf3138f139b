//! Repository command handlers
//!
//! One-shot commands for scripting: list, add, like, delete. Each performs a
//! single API call and prints the result.

use anyhow::Result;
use chrono::Utc;
use colored::*;

use crate::commands::Commands;
use crate::config::Config;
use crate::id_resolver::resolve_repository_id;
use crate::screen::render::format_likes;
use likeboard_client::RepositoriesClient;
use likeboard_core::domain::repository::Repository;
use likeboard_core::dto::repository::CreateRepository;

/// Handle one-shot repository commands
pub async fn handle_repository_command(command: Commands, config: &Config) -> Result<()> {
    let client = RepositoriesClient::new(&config.api_url);

    match command {
        Commands::List => list_repositories(&client).await,
        Commands::Add { title, url, techs } => add_repository(&client, title, url, techs).await,
        Commands::Like { id } => like_repository(&client, &id).await,
        Commands::Delete { id } => delete_repository(&client, &id).await,
        Commands::Screen => unreachable!("screen is routed separately"),
    }
}

/// Build a creation payload, filling omitted fields the way the original
/// screen's fixed add control did
pub fn build_payload(
    title: Option<String>,
    url: Option<String>,
    techs: Vec<String>,
) -> CreateRepository {
    CreateRepository {
        title: title.unwrap_or_else(|| format!("New {}", Utc::now().timestamp_millis())),
        url: url.unwrap_or_else(|| "https://example.com".to_string()),
        techs: if techs.is_empty() {
            vec!["rust".to_string(), "cli".to_string()]
        } else {
            techs
        },
    }
}

/// List all repositories
async fn list_repositories(client: &RepositoriesClient) -> Result<()> {
    let repositories = client.list_repositories().await?;

    if repositories.is_empty() {
        println!("{}", "No repositories found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} repository(ies):", repositories.len()).bold()
        );
        println!();
        for repository in repositories {
            print_repository_summary(&repository);
        }
    }

    Ok(())
}

/// Add a repository
async fn add_repository(
    client: &RepositoriesClient,
    title: Option<String>,
    url: Option<String>,
    techs: Vec<String>,
) -> Result<()> {
    let payload = build_payload(title, url, techs);
    let repository = client.create_repository(payload).await?;

    println!("{}", "✓ Repository added!".green().bold());
    println!("  ID:    {}", repository.id.cyan());
    println!("  Title: {}", repository.title.bold());

    Ok(())
}

/// Like a repository
async fn like_repository(client: &RepositoriesClient, id: &str) -> Result<()> {
    let id = resolve_repository_id(client, id).await?;
    let repository = client.like_repository(&id).await?;

    println!(
        "{}",
        format!(
            "✓ Liked {} — now {}",
            repository.title,
            format_likes(repository.likes)
        )
        .green()
        .bold()
    );

    Ok(())
}

/// Delete a repository
async fn delete_repository(client: &RepositoriesClient, id: &str) -> Result<()> {
    let id = resolve_repository_id(client, id).await?;
    client.delete_repository(&id).await?;

    println!(
        "{}",
        format!("✓ Repository {} deleted!", id).green().bold()
    );

    Ok(())
}

/// Print a repository summary
fn print_repository_summary(repository: &Repository) {
    println!("  {} {}", "▸".cyan(), repository.title.bold());
    println!("    ID:    {}", repository.id.dimmed());
    println!("    URL:   {}", repository.url.dimmed());
    if !repository.techs.is_empty() {
        println!("    Tags:  {}", repository.techs.join(", ").dimmed());
    }
    println!("    Likes: {}", format_likes(repository.likes).dimmed());
    println!();
}
