use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::collection_service::CollectionService;
use crate::content::{
    application::ports::{
        incoming::{CollectionUseCase, ContentError, ReorderUseCase},
        outgoing::{OrderedRepository, RepositoryError},
    },
    domain::{check_reorder, next_order, OrderedResource, ReorderItem},
};

/// Collection service for resources with an `order` field: assigns the next
/// order on create and applies bulk reorders.
pub struct OrderedCollectionService<R, Repo>
where
    R: OrderedResource,
    Repo: OrderedRepository<R>,
{
    inner: CollectionService<R, Repo>,
}

impl<R, Repo> OrderedCollectionService<R, Repo>
where
    R: OrderedResource,
    Repo: OrderedRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            inner: CollectionService::new(repository),
        }
    }
}

#[async_trait]
impl<R, Repo> CollectionUseCase<R> for OrderedCollectionService<R, Repo>
where
    R: OrderedResource,
    Repo: OrderedRepository<R>,
{
    async fn list(&self) -> Result<Vec<R>, ContentError> {
        self.inner.list().await
    }

    async fn get_one(&self, id: Uuid) -> Result<R, ContentError> {
        self.inner.get_one(id).await
    }

    async fn create(&self, mut draft: R::Draft) -> Result<R, ContentError> {
        if R::draft_order(&draft).is_none() {
            let max = self
                .inner
                .repository()
                .max_order()
                .await
                .map_err(ContentError::from_repository::<R>)?;
            R::assign_order(&mut draft, next_order(max));
        }
        self.inner.create(draft).await
    }

    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<R, ContentError> {
        self.inner.update(id, changes).await
    }

    async fn remove(&self, id: Uuid) -> Result<R, ContentError> {
        self.inner.remove(id).await
    }
}

#[async_trait]
impl<R, Repo> ReorderUseCase<R> for OrderedCollectionService<R, Repo>
where
    R: OrderedResource,
    Repo: OrderedRepository<R>,
{
    async fn reorder(&self, items: Vec<ReorderItem>) -> Result<Vec<R>, ContentError> {
        check_reorder(&items)?;

        if items.is_empty() {
            return self.inner.list().await;
        }

        let mut reordered = self
            .inner
            .repository()
            .reorder(&items)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound(id) => {
                    ContentError::NotFound(format!("{} {id} not found", R::NAME))
                }
                other => ContentError::from_repository::<R>(other),
            })?;
        R::arrange(&mut reordered);

        info!(resource = R::NAME, count = items.len(), "reordered");
        Ok(reordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        skill::domain::entities::{Skill, SkillDraft},
        tests::support::{fixtures, in_memory::InMemoryCollection},
    };

    fn draft(name: &str) -> SkillDraft {
        SkillDraft {
            name: name.to_string(),
            icon: None,
            order: None,
        }
    }

    fn names(items: &[Skill]) -> Vec<&str> {
        items.iter().map(|s| s.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_on_empty_collection_assigns_zero_then_increments() {
        let svc = OrderedCollectionService::new(InMemoryCollection::<Skill>::new());

        let rust = svc.create(draft("Rust")).await.unwrap();
        let go = svc.create(draft("Go")).await.unwrap();

        assert_eq!(rust.order, 0);
        assert_eq!(go.order, 1);
    }

    #[tokio::test]
    async fn create_uses_max_not_count() {
        let repo = InMemoryCollection::with_items(vec![
            fixtures::skill("Rust", 4),
            fixtures::skill("Go", 9),
        ]);
        let svc = OrderedCollectionService::new(repo);

        let created = svc.create(draft("Zig")).await.unwrap();

        assert_eq!(created.order, 10);
    }

    #[tokio::test]
    async fn explicit_order_is_kept() {
        let svc = OrderedCollectionService::new(InMemoryCollection::<Skill>::new());

        let created = svc
            .create(SkillDraft {
                order: Some(5),
                ..draft("Rust")
            })
            .await
            .unwrap();

        assert_eq!(created.order, 5);
    }

    #[tokio::test]
    async fn reorder_rewrites_sequence_without_losing_items() {
        let a = fixtures::skill("A", 0);
        let b = fixtures::skill("B", 1);
        let c = fixtures::skill("C", 2);
        let repo = InMemoryCollection::with_items(vec![a.clone(), b.clone(), c.clone()]);
        let svc = OrderedCollectionService::new(repo);

        let result = svc
            .reorder(vec![
                ReorderItem { id: a.id, order: 2 },
                ReorderItem { id: b.id, order: 0 },
                ReorderItem { id: c.id, order: 1 },
            ])
            .await
            .unwrap();

        assert_eq!(names(&result), vec!["B", "C", "A"]);
        assert_eq!(names(&svc.list().await.unwrap()), vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn reorder_with_unknown_id_changes_nothing() {
        let a = fixtures::skill("A", 0);
        let b = fixtures::skill("B", 1);
        let repo = InMemoryCollection::with_items(vec![a.clone(), b.clone()]);
        let svc = OrderedCollectionService::new(repo.clone());
        let ghost = Uuid::new_v4();

        let result = svc
            .reorder(vec![
                ReorderItem { id: b.id, order: 0 },
                ReorderItem { id: ghost, order: 1 },
            ])
            .await;

        assert!(matches!(result, Err(ContentError::NotFound(msg)) if msg.contains(&ghost.to_string())));
        let orders: Vec<i32> = repo.snapshot().iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[tokio::test]
    async fn reorder_with_duplicate_ids_is_validation_error() {
        let a = fixtures::skill("A", 0);
        let svc = OrderedCollectionService::new(InMemoryCollection::with_items(vec![a.clone()]));

        let result = svc
            .reorder(vec![
                ReorderItem { id: a.id, order: 0 },
                ReorderItem { id: a.id, order: 1 },
            ])
            .await;

        assert!(matches!(result, Err(ContentError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_name_surfaces_as_validation_message() {
        let svc = OrderedCollectionService::new(InMemoryCollection::with_items(vec![
            fixtures::skill("Rust", 0),
        ]));

        let err = svc.create(draft("Rust")).await.unwrap_err();

        assert_eq!(err.to_string(), "Skill \"Rust\" already exists");
    }
}
