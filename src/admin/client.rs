use async_trait::async_trait;
use uuid::Uuid;

use crate::content::domain::{ReorderItem, Resource, SingletonResource};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The server answered with `{ "error": message }`.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// What an admin view needs from the REST surface of one collection.
#[async_trait]
pub trait ResourceClient<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, ClientError>;

    async fn create(&self, payload: &R::Payload) -> Result<R, ClientError>;

    async fn update(&self, id: Uuid, payload: &R::Payload) -> Result<R, ClientError>;

    async fn remove(&self, id: Uuid) -> Result<R, ClientError>;

    async fn reorder(&self, items: &[ReorderItem]) -> Result<Vec<R>, ClientError>;
}

#[async_trait]
pub trait SingletonClient<R: SingletonResource>: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    async fn fetch(&self) -> Result<Option<R>, ClientError>;

    /// Upsert.
    async fn save(&self, payload: &R::Payload) -> Result<R, ClientError>;
}
