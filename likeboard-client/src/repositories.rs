//! Repository collection endpoints

use crate::RepositoriesClient;
use crate::error::Result;
use async_trait::async_trait;
use likeboard_core::domain::repository::Repository;
use likeboard_core::dto::repository::CreateRepository;
use tracing::debug;

/// Remote operations the list screen synchronizes against
///
/// Abstracts the four collection endpoints so the list controller can be
/// driven by an in-memory fake in tests.
#[async_trait]
pub trait RepositoryApi: Send + Sync {
    /// Fetch the full collection, in the order the API stores it
    async fn list(&self) -> Result<Vec<Repository>>;

    /// Create a new entry
    ///
    /// # Arguments
    /// * `payload` - Title, url and techs for the new entry; the API assigns
    ///   the id and an initial like count
    async fn create(&self, payload: CreateRepository) -> Result<Repository>;

    /// Like an entry
    ///
    /// # Arguments
    /// * `id` - The id of the entry to like
    ///
    /// # Returns
    /// The updated entry with its like counter incremented by the API
    async fn like(&self, id: &str) -> Result<Repository>;

    /// Delete an entry
    ///
    /// # Arguments
    /// * `id` - The id of the entry to delete
    async fn delete(&self, id: &str) -> Result<()>;
}

impl RepositoriesClient {
    /// List all repositories
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let url = format!("{}/repositories", self.base_url);
        debug!(url = %url, "listing repositories");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new repository entry
    ///
    /// # Arguments
    /// * `req` - The creation payload
    ///
    /// # Returns
    /// The created entry, with the id assigned by the API
    pub async fn create_repository(&self, req: CreateRepository) -> Result<Repository> {
        let url = format!("{}/repositories", self.base_url);
        debug!(url = %url, title = %req.title, "creating repository");
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// Like a repository entry
    ///
    /// # Arguments
    /// * `id` - The id of the entry to like
    ///
    /// # Returns
    /// The updated entry as returned by the API
    pub async fn like_repository(&self, id: &str) -> Result<Repository> {
        let url = format!("{}/repositories/{}/like", self.base_url, id);
        debug!(url = %url, "liking repository");
        let response = self.client.post(&url).send().await?;

        self.handle_response(response).await
    }

    /// Delete a repository entry
    ///
    /// # Arguments
    /// * `id` - The id of the entry to delete
    pub async fn delete_repository(&self, id: &str) -> Result<()> {
        let url = format!("{}/repositories/{}", self.base_url, id);
        debug!(url = %url, "deleting repository");
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl RepositoryApi for RepositoriesClient {
    async fn list(&self) -> Result<Vec<Repository>> {
        self.list_repositories().await
    }

    async fn create(&self, payload: CreateRepository) -> Result<Repository> {
        self.create_repository(payload).await
    }

    async fn like(&self, id: &str) -> Result<Repository> {
        self.like_repository(id).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_repository(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn start_mock(mocks: Vec<Mock>) -> (MockServer, RepositoriesClient) {
        let server = MockServer::start().await;
        for mock in mocks {
            server.register(mock).await;
        }
        let client = RepositoriesClient::new(server.uri());
        (server, client)
    }

    #[tokio::test]
    async fn test_list_repositories() {
        let (_server, client) = start_mock(vec![
            Mock::given(method("GET"))
                .and(path("/repositories"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    {"id": "1", "title": "Repo A", "url": "a", "techs": ["go"], "likes": 0},
                    {"id": "2", "title": "Repo B", "url": "b", "techs": [], "likes": 3}
                ])))
                .expect(1),
        ])
        .await;

        let repos = client.list_repositories().await.unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].id, "1");
        assert_eq!(repos[1].likes, 3);
    }

    #[tokio::test]
    async fn test_create_repository_sends_payload() {
        let (_server, client) = start_mock(vec![
            Mock::given(method("POST"))
                .and(path("/repositories"))
                .respond_with(|req: &wiremock::Request| {
                    let body: CreateRepository = req.body_json().unwrap();
                    ResponseTemplate::new(201).set_body_json(json!({
                        "id": "new-id",
                        "title": body.title,
                        "url": body.url,
                        "techs": body.techs,
                        "likes": 0
                    }))
                })
                .expect(1),
        ])
        .await;

        let created = client
            .create_repository(CreateRepository {
                title: "Fresh".to_string(),
                url: "https://example.com".to_string(),
                techs: vec!["rust".to_string()],
            })
            .await
            .unwrap();

        assert_eq!(created.id, "new-id");
        assert_eq!(created.title, "Fresh");
        assert_eq!(created.likes, 0);
    }

    #[tokio::test]
    async fn test_like_repository_hits_like_path() {
        let (_server, client) = start_mock(vec![
            Mock::given(method("POST"))
                .and(path("/repositories/1/like"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "id": "1", "title": "Repo A", "url": "a", "techs": ["go"], "likes": 1
                })))
                .expect(1),
        ])
        .await;

        let liked = client.like_repository("1").await.unwrap();
        assert_eq!(liked.likes, 1);
    }

    #[tokio::test]
    async fn test_delete_repository_ignores_body() {
        let (_server, client) = start_mock(vec![
            Mock::given(method("DELETE"))
                .and(path("/repositories/1"))
                .respond_with(ResponseTemplate::new(204))
                .expect(1),
        ])
        .await;

        client.delete_repository("1").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let (_server, client) = start_mock(vec![
            Mock::given(method("POST"))
                .and(path("/repositories/missing/like"))
                .respond_with(ResponseTemplate::new(404).set_body_string("not found")),
        ])
        .await;

        let err = client.like_repository("missing").await.unwrap_err();
        assert!(err.is_not_found());
        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_decode_error() {
        let (_server, client) = start_mock(vec![
            Mock::given(method("GET"))
                .and(path("/repositories"))
                // `likes` missing from the element
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    {"id": "1", "title": "Repo A", "url": "a", "techs": []}
                ]))),
        ])
        .await;

        let err = client.list_repositories().await.unwrap_err();
        assert!(matches!(err, ClientError::DecodeError(_)));
    }
}
