use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;
use uuid::Uuid;

use crate::content::{
    application::ports::{
        incoming::{CollectionUseCase, ContentError},
        outgoing::CollectionRepository,
    },
    domain::Resource,
};

pub struct CollectionService<R, Repo>
where
    R: Resource,
    Repo: CollectionRepository<R>,
{
    repository: Repo,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> CollectionService<R, Repo>
where
    R: Resource,
    Repo: CollectionRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            repository,
            _resource: PhantomData,
        }
    }

    pub fn repository(&self) -> &Repo {
        &self.repository
    }
}

#[async_trait]
impl<R, Repo> CollectionUseCase<R> for CollectionService<R, Repo>
where
    R: Resource,
    Repo: CollectionRepository<R>,
{
    async fn list(&self) -> Result<Vec<R>, ContentError> {
        let mut items = self
            .repository
            .list()
            .await
            .map_err(ContentError::from_repository::<R>)?;
        R::arrange(&mut items);
        Ok(items)
    }

    async fn get_one(&self, id: Uuid) -> Result<R, ContentError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(ContentError::from_repository::<R>)?
            .ok_or_else(|| ContentError::NotFound(R::not_found_message()))
    }

    async fn create(&self, draft: R::Draft) -> Result<R, ContentError> {
        let created = self
            .repository
            .insert(draft)
            .await
            .map_err(ContentError::from_repository::<R>)?;
        info!(resource = R::NAME, id = %created.id(), "created");
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<R, ContentError> {
        let updated = self
            .repository
            .update(id, changes)
            .await
            .map_err(ContentError::from_repository::<R>)?
            .ok_or_else(|| ContentError::NotFound(R::not_found_message()))?;
        info!(resource = R::NAME, %id, "updated");
        Ok(updated)
    }

    async fn remove(&self, id: Uuid) -> Result<R, ContentError> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(ContentError::from_repository::<R>)?
            .ok_or_else(|| ContentError::NotFound(R::not_found_message()))?;
        info!(resource = R::NAME, %id, "deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        experience::domain::entities::Experience,
        tests::support::{fixtures, in_memory::InMemoryCollection},
    };

    fn service(
        repo: InMemoryCollection<Experience>,
    ) -> CollectionService<Experience, InMemoryCollection<Experience>> {
        CollectionService::new(repo)
    }

    #[tokio::test]
    async fn list_is_newest_first_by_start_date() {
        let repo = InMemoryCollection::with_items(vec![
            fixtures::experience("Intern", "March 2019", "August 2019"),
            fixtures::experience("Lead", "February 2024", ""),
            fixtures::experience("Engineer", "September 2019", "January 2024"),
        ]);

        let titles: Vec<String> = service(repo)
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();

        assert_eq!(titles, vec!["Lead", "Engineer", "Intern"]);
    }

    #[tokio::test]
    async fn get_one_missing_is_not_found() {
        let result = service(InMemoryCollection::new())
            .get_one(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(ContentError::NotFound(msg)) if msg == "Experience not found"));
    }

    #[tokio::test]
    async fn remove_missing_leaves_collection_unchanged() {
        let repo = InMemoryCollection::with_items(vec![fixtures::experience(
            "Engineer",
            "January 2020",
            "",
        )]);
        let svc = service(repo.clone());

        let result = svc.remove(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ContentError::NotFound(_))));
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn repository_failure_is_persistence_error() {
        let result = service(InMemoryCollection::failing("connection reset"))
            .list()
            .await;

        assert!(matches!(result, Err(ContentError::Persistence(msg)) if msg.contains("connection reset")));
    }
}
