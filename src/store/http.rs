//! HTTP client for the remote todo API.
//!
//! Plain JSON over HTTP, no authentication. The only knob is the base
//! address, which may be given with or without a scheme.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::error::StoreError;
use super::RemoteStore;
use crate::models::{Item, ItemDraft};

const TODOS_PATH: &str = "/todos";

/// [`RemoteStore`] backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpStore {
    server_url: String,
    client: Client,
}

impl HttpStore {
    /// Creates a store for the API at `server_url`, e.g. `http://localhost:8000`.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            client: Client::new(),
        }
    }

    /// Builds an HTTP URL for a given path.
    fn build_http_url(&self, path: &str) -> String {
        let base_url = if !self.server_url.starts_with("http://")
            && !self.server_url.starts_with("https://")
        {
            format!("http://{}", self.server_url)
        } else {
            self.server_url.clone()
        };

        format!("{}{}", base_url.trim_end_matches('/'), path)
    }

    /// URL of a single item. The id is opaque, so it is encoded as one segment.
    fn item_url(&self, id: &str) -> String {
        self.build_http_url(&format!("{}/{}", TODOS_PATH, urlencoding::encode(id)))
    }

    fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let url = self.build_http_url(TODOS_PATH);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let response = Self::check_status(response)?;

        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &ItemDraft) -> Result<Item, StoreError> {
        let url = self.build_http_url(TODOS_PATH);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let response = Self::check_status(response)?;

        response
            .json::<Item>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<(), StoreError> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::check_status(response)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(
                "DELETE {} answered {}, treating as completed",
                url,
                response.status()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_url() {
        let store = HttpStore::new("http://localhost:8000");
        assert_eq!(
            store.build_http_url("/todos"),
            "http://localhost:8000/todos"
        );

        let store = HttpStore::new("https://todo.example.com/");
        assert_eq!(
            store.build_http_url("/todos"),
            "https://todo.example.com/todos"
        );

        let store = HttpStore::new("localhost:8000");
        assert_eq!(
            store.build_http_url("/todos"),
            "http://localhost:8000/todos"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        let store = HttpStore::new("http://localhost:8000");
        assert_eq!(
            store.item_url("65f0c1"),
            "http://localhost:8000/todos/65f0c1"
        );
        assert_eq!(
            store.item_url("a/b c"),
            "http://localhost:8000/todos/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is closed on any sane test host.
        let store = HttpStore::new("http://127.0.0.1:9");
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }
}
