//! Render pass for the repository list screen
//!
//! A pure function from the controller's sequence to text. Every control and
//! counter carries a deterministic identifier derived from the repository id
//! (`repository-likes-{id}`, `like-button-{id}`, `delete-button-{id}`) so
//! external automation can address individual cards.

use likeboard_core::domain::repository::Repository;

/// Render the full screen: one card per repository plus the add control
pub fn render_screen(repositories: &[Repository]) -> String {
    let mut out = String::new();

    if repositories.is_empty() {
        out.push_str("No repositories yet.\n");
    } else {
        for repository in repositories {
            out.push_str(&render_card(repository));
            out.push('\n');
        }
    }

    out.push_str("[add-button] add\n");
    out
}

/// Render a single repository card
pub fn render_card(repository: &Repository) -> String {
    let mut card = String::new();

    card.push_str(&format!("▸ {}\n", repository.title));
    card.push_str(&format!("  {}\n", repository.url));
    if !repository.techs.is_empty() {
        card.push_str(&format!("  tags: {}\n", repository.techs.join(", ")));
    }
    card.push_str(&format!(
        "  [repository-likes-{}] {}\n",
        repository.id,
        format_likes(repository.likes)
    ));
    card.push_str(&format!(
        "  [like-button-{id}] like {id}    [delete-button-{id}] delete {id}\n",
        id = repository.id,
    ));

    card
}

/// Format the like counter
///
/// Matches the original screen's pluralization: anything above one is plural,
/// zero and one are singular.
pub fn format_likes(likes: u32) -> String {
    if likes > 1 {
        format!("{} likes", likes)
    } else {
        format!("{} like", likes)
    }
}
