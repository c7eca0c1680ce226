use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    content::{
        application::ports::outgoing::RepositoryError,
        domain::{ReorderItem, Resource},
    },
    shared::validation::ValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl ContentError {
    pub fn from_repository<R: Resource>(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => ContentError::NotFound(R::not_found_message()),
            RepositoryError::Duplicate { field, value } => ContentError::Validation(
                ValidationError::single(field, format!("{} \"{value}\" already exists", R::NAME)),
            ),
            RepositoryError::DatabaseError(msg) => ContentError::Persistence(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CollectionUseCase<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, ContentError>;

    async fn get_one(&self, id: Uuid) -> Result<R, ContentError>;

    async fn create(&self, draft: R::Draft) -> Result<R, ContentError>;

    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<R, ContentError>;

    async fn remove(&self, id: Uuid) -> Result<R, ContentError>;
}

#[async_trait]
pub trait ReorderUseCase<R: Resource>: Send + Sync {
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<Vec<R>, ContentError>;
}

#[async_trait]
pub trait SingletonUseCase<R: Resource>: Send + Sync {
    async fn get(&self) -> Result<Option<R>, ContentError>;

    async fn create(&self, draft: R::Draft) -> Result<R, ContentError>;

    /// Updates the submitted fields, or creates the document when none exists.
    async fn upsert(&self, changes: R::Changes) -> Result<R, ContentError>;

    async fn remove(&self) -> Result<R, ContentError>;
}
