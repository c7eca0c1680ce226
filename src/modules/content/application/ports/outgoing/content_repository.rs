use async_trait::async_trait;
use uuid::Uuid;

use crate::content::domain::{OrderedResource, ReorderItem, Resource, SingletonResource};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Id-keyed collections
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CollectionRepository<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>, RepositoryError>;

    async fn insert(&self, draft: R::Draft) -> Result<R, RepositoryError>;

    /// `Ok(None)` when the id does not resolve.
    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<Option<R>, RepositoryError>;

    /// Returns the removed document, `Ok(None)` when the id does not resolve.
    async fn delete(&self, id: Uuid) -> Result<Option<R>, RepositoryError>;
}

#[async_trait]
pub trait OrderedRepository<R: OrderedResource>: CollectionRepository<R> {
    async fn max_order(&self) -> Result<Option<i32>, RepositoryError>;

    /// Writes every order value or none of them. An id that does not resolve
    /// aborts the batch with `NotFound(id)`. Returns the collection sorted by
    /// the new order.
    async fn reorder(&self, items: &[ReorderItem]) -> Result<Vec<R>, RepositoryError>;
}

//
// ──────────────────────────────────────────────────────────
// Singletons
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SingletonRepository<R: SingletonResource>: Send + Sync {
    async fn fetch(&self) -> Result<Option<R>, RepositoryError>;

    /// Fills the slot, replacing every field of an existing document.
    async fn insert(&self, draft: R::Draft) -> Result<R, RepositoryError>;

    /// Applies the submitted fields; `Ok(None)` when the slot is empty.
    async fn update(&self, changes: R::Changes) -> Result<Option<R>, RepositoryError>;

    async fn delete(&self) -> Result<Option<R>, RepositoryError>;
}
