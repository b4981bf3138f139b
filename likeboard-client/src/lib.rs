//! Likeboard HTTP Client
//!
//! A small, type-safe HTTP client for the remote "repositories" collection
//! API that the likeboard CLI and screen synchronize against.
//!
//! # Example
//!
//! ```no_run
//! use likeboard_client::RepositoriesClient;
//! use likeboard_core::dto::repository::CreateRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), likeboard_client::ClientError> {
//!     let client = RepositoriesClient::new("http://localhost:3333");
//!
//!     let repo = client.create_repository(CreateRepository {
//!         title: "My project".to_string(),
//!         url: "https://example.com".to_string(),
//!         techs: vec!["rust".to_string()],
//!     }).await?;
//!
//!     println!("Created repository: {}", repo.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod repositories;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use repositories::RepositoryApi;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the repositories collection API
///
/// Provides one method per API endpoint:
/// - `list_repositories` — fetch the full collection
/// - `create_repository` — add an entry
/// - `like_repository` — increment an entry's like counter
/// - `delete_repository` — remove an entry
#[derive(Debug, Clone)]
pub struct RepositoriesClient {
    /// Base URL of the API (e.g., "http://localhost:3333")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl RepositoriesClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the collection API (e.g., "http://localhost:3333")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use likeboard_client::RepositoriesClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RepositoriesClient::with_client("http://localhost:3333", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or decodes the response body if successful. A body that does
    /// not match the expected shape is a `DecodeError`, never silently
    /// accepted.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::DecodeError(e.to_string()))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    ///
    /// Checks the status code and returns an error if the request failed. Any
    /// response body is ignored.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
