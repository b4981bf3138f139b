//! Repository domain type

use serde::{Deserialize, Serialize};

/// One listed item on the board.
///
/// "Repository" is the API's domain term for a showcased project card with a
/// like counter; it has nothing to do with version control.
///
/// Wire shape: `{id, title, url, techs, likes}`. The `id` is opaque and
/// assigned by the remote API; clients never generate one locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u32,
}
