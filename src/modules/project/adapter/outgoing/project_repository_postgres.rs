use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::{
    content::{
        adapter::outgoing::{map_db_err, reorder_rows, strings_to_json},
        application::ports::outgoing::{CollectionRepository, OrderedRepository, RepositoryError},
        domain::ReorderItem,
    },
    project::domain::entities::{Project, ProjectChanges, ProjectDraft},
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository<Project> for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, RepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Project::from))
    }

    async fn insert(&self, draft: ProjectDraft) -> Result<Project, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            description: Set(draft.description),
            image: Set(draft.image),
            link: Set(draft.link),
            tags: Set(strings_to_json(draft.tags)),
            order: Set(draft.order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if let Some(image) = changes.image {
            model.image = Set(image);
        }
        if let Some(link) = changes.link {
            model.link = Set(link);
        }
        if let Some(tags) = changes.tags {
            model.tags = Set(strings_to_json(tags));
        }
        if let Some(order) = changes.order {
            model.order = Set(order);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().next().map(Project::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Project>, RepositoryError> {
        let Some(existing) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(existing.into()))
    }
}

#[async_trait]
impl OrderedRepository<Project> for ProjectRepositoryPostgres {
    async fn max_order(&self) -> Result<Option<i32>, RepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::Order)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.order))
    }

    async fn reorder(&self, items: &[ReorderItem]) -> Result<Vec<Project>, RepositoryError> {
        reorder_rows::<Entity>(&self.db, Column::Id, Column::Order, Column::UpdatedAt, items)
            .await?;
        self.list().await
    }
}
