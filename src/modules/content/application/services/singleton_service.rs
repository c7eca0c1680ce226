use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;

use crate::content::{
    application::ports::{
        incoming::{ContentError, SingletonUseCase},
        outgoing::SingletonRepository,
    },
    domain::SingletonResource,
};

pub struct SingletonService<R, Repo>
where
    R: SingletonResource,
    Repo: SingletonRepository<R>,
{
    repository: Repo,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> SingletonService<R, Repo>
where
    R: SingletonResource,
    Repo: SingletonRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            repository,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R, Repo> SingletonUseCase<R> for SingletonService<R, Repo>
where
    R: SingletonResource,
    Repo: SingletonRepository<R>,
{
    async fn get(&self) -> Result<Option<R>, ContentError> {
        self.repository
            .fetch()
            .await
            .map_err(ContentError::from_repository::<R>)
    }

    async fn create(&self, draft: R::Draft) -> Result<R, ContentError> {
        let saved = self
            .repository
            .insert(draft)
            .await
            .map_err(ContentError::from_repository::<R>)?;
        info!(resource = R::NAME, "saved");
        Ok(saved)
    }

    async fn upsert(&self, changes: R::Changes) -> Result<R, ContentError> {
        let existing = self
            .repository
            .fetch()
            .await
            .map_err(ContentError::from_repository::<R>)?;

        if existing.is_none() {
            let draft = R::draft_from_changes(changes)?;
            return self.create(draft).await;
        }

        let updated = self
            .repository
            .update(changes)
            .await
            .map_err(ContentError::from_repository::<R>)?
            .ok_or_else(|| ContentError::NotFound(R::not_found_message()))?;
        info!(resource = R::NAME, "updated");
        Ok(updated)
    }

    async fn remove(&self) -> Result<R, ContentError> {
        let removed = self
            .repository
            .delete()
            .await
            .map_err(ContentError::from_repository::<R>)?
            .ok_or_else(|| ContentError::NotFound(R::not_found_message()))?;
        info!(resource = R::NAME, "deleted");
        Ok(removed)
    }
}
