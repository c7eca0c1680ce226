use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::content::{
    application::ports::outgoing::{
        CollectionRepository, OrderedRepository, RepositoryError, SingletonRepository,
    },
    domain::{OrderedResource, ReorderItem, Resource, SingletonResource},
};

// ============================================================================
// Collections
// ============================================================================

/// Vec-backed repository. Clones share the same storage.
#[derive(Clone)]
pub struct InMemoryCollection<R> {
    items: Arc<Mutex<Vec<R>>>,
    failure: Option<String>,
}

impl<R: Resource> InMemoryCollection<R> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<R>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            failure: None,
        }
    }

    /// Every call returns `DatabaseError(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.to_string()),
        }
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.items.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.failure {
            Some(msg) => Err(RepositoryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }

    fn ensure_unique(items: &[R], candidate: &R) -> Result<(), RepositoryError> {
        let Some((field, value)) = candidate.unique_key() else {
            return Ok(());
        };
        let taken = items
            .iter()
            .filter(|item| item.id() != candidate.id())
            .any(|item| item.unique_key().map(|(_, v)| v) == Some(value.clone()));

        if taken {
            Err(RepositoryError::Duplicate { field, value })
        } else {
            Ok(())
        }
    }
}

impl<R: Resource> Default for InMemoryCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> CollectionRepository<R> for InMemoryCollection<R> {
    async fn list(&self) -> Result<Vec<R>, RepositoryError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>, RepositoryError> {
        self.check()?;
        Ok(self.snapshot().into_iter().find(|item| item.id() == id))
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, RepositoryError> {
        self.check()?;
        let created = R::from_draft(Uuid::new_v4(), draft, Utc::now());
        let mut items = self.items.lock().unwrap();
        Self::ensure_unique(&items, &created)?;
        items.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<Option<R>, RepositoryError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let Some(pos) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };

        let mut updated = items[pos].clone();
        updated.apply_changes(changes, Utc::now());
        Self::ensure_unique(&items, &updated)?;
        items[pos] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<R>, RepositoryError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .position(|item| item.id() == id)
            .map(|pos| items.remove(pos)))
    }
}

#[async_trait]
impl<R: OrderedResource> OrderedRepository<R> for InMemoryCollection<R> {
    async fn max_order(&self) -> Result<Option<i32>, RepositoryError> {
        self.check()?;
        Ok(self.snapshot().iter().map(|item| item.order()).max())
    }

    async fn reorder(&self, reorder: &[ReorderItem]) -> Result<Vec<R>, RepositoryError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();

        // All ids must resolve before anything is written.
        if let Some(missing) = reorder
            .iter()
            .find(|r| !items.iter().any(|item| item.id() == r.id))
        {
            return Err(RepositoryError::NotFound(missing.id.to_string()));
        }

        for r in reorder {
            if let Some(item) = items.iter_mut().find(|item| item.id() == r.id) {
                item.set_order(r.order);
            }
        }

        let mut sorted = items.clone();
        sorted.sort_by_key(|item| item.order());
        Ok(sorted)
    }
}

// ============================================================================
// Singletons
// ============================================================================

#[derive(Clone)]
pub struct InMemorySingleton<R> {
    slot: Arc<Mutex<Option<R>>>,
}

impl<R: SingletonResource> InMemorySingleton<R> {
    pub fn empty() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with(doc: R) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(doc))),
        }
    }

    pub fn current(&self) -> Option<R> {
        self.slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl<R: SingletonResource> SingletonRepository<R> for InMemorySingleton<R> {
    async fn fetch(&self) -> Result<Option<R>, RepositoryError> {
        Ok(self.current())
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, RepositoryError> {
        let mut slot = self.slot.lock().unwrap();
        let id = slot.as_ref().map(|doc| doc.id()).unwrap_or_else(Uuid::new_v4);
        let saved = R::from_draft(id, draft, Utc::now());
        *slot = Some(saved.clone());
        Ok(saved)
    }

    async fn update(&self, changes: R::Changes) -> Result<Option<R>, RepositoryError> {
        let mut slot = self.slot.lock().unwrap();
        Ok(slot.as_mut().map(|doc| {
            doc.apply_changes(changes, Utc::now());
            doc.clone()
        }))
    }

    async fn delete(&self) -> Result<Option<R>, RepositoryError> {
        Ok(self.slot.lock().unwrap().take())
    }
}
