//! List synchronization controller
//!
//! Owns the in-memory sequence of repositories shown by the screen and keeps
//! it consistent with user-initiated remote operations. Every state change
//! happens strictly after the awaited response resolves; there is no
//! optimistic mutation, so a failed call always leaves the sequence exactly
//! as it was.

use std::sync::Arc;

use likeboard_client::error::Result;
use likeboard_client::RepositoryApi;
use likeboard_core::domain::repository::Repository;
use likeboard_core::dto::repository::CreateRepository;

/// Controller for the repository list screen
///
/// The sequence is owned exclusively by the controller; the render pass only
/// reads it through [`repositories`](Self::repositories). Each operation
/// performs exactly one network call and at most one state mutation.
pub struct RepositoryListController {
    api: Arc<dyn RepositoryApi>,
    repositories: Vec<Repository>,
}

impl RepositoryListController {
    /// Creates a controller with an empty sequence
    pub fn new(api: Arc<dyn RepositoryApi>) -> Self {
        Self {
            api,
            repositories: Vec::new(),
        }
    }

    /// The current local sequence, in render order
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Fetch the full collection and replace the local sequence with it,
    /// preserving the order the API returned
    pub async fn initialize(&mut self) -> Result<()> {
        let repositories = self.api.list().await?;
        self.repositories = repositories;
        Ok(())
    }

    /// Create a new entry and append it to the end of the sequence
    ///
    /// New items are always appended last, never reordered.
    pub async fn add(&mut self, payload: CreateRepository) -> Result<Repository> {
        let created = self.api.create(payload).await?;
        self.repositories.push(created.clone());
        Ok(created)
    }

    /// Like an entry and replace the matching element in place
    ///
    /// Only the element whose id matches is replaced; every other element is
    /// left untouched in its original position. If the id is not present
    /// locally the sequence is unchanged.
    pub async fn like(&mut self, id: &str) -> Result<Repository> {
        let updated = self.api.like(id).await?;
        if let Some(slot) = self.repositories.iter_mut().find(|r| r.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete an entry and remove every element with that id
    ///
    /// Removal happens only after the API confirms the deletion, so a failed
    /// delete leaves the sequence unchanged.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.api.delete(id).await?;
        self.repositories.retain(|r| r.id != id);
        Ok(())
    }
}
