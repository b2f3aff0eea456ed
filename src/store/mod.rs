//! Access to the remote todo API.
//!
//! The synchronizer only ever talks to the server through [`RemoteStore`],
//! which exposes exactly four calls:
//!
//! | call     | method | path          |
//! |----------|--------|---------------|
//! | `list`   | GET    | `/todos`      |
//! | `create` | POST   | `/todos`      |
//! | `update` | PUT    | `/todos/{id}` |
//! | `delete` | DELETE | `/todos/{id}` |
//!
//! [`HttpStore`] is the reqwest-backed implementation.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::{Item, ItemDraft};

pub use error::StoreError;
pub use http::HttpStore;

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches every item, in server order.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Creates an item and returns it with its server-assigned id.
    async fn create(&self, draft: &ItemDraft) -> Result<Item, StoreError>;

    /// Replaces the title and description of `id`. The response body is ignored.
    async fn update(&self, id: &str, draft: &ItemDraft) -> Result<(), StoreError>;

    /// Deletes `id`. Any HTTP response counts as completion; only a request
    /// that never got an answer is an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
