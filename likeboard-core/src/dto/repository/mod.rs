//! Repository DTOs

use serde::{Deserialize, Serialize};

/// Request to create a new repository entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRepository {
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
}
