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
        adapter::outgoing::{map_db_err, reorder_rows},
        application::ports::outgoing::{CollectionRepository, OrderedRepository, RepositoryError},
        domain::ReorderItem,
    },
    social_media::domain::entities::{SocialMedia, SocialMediaChanges, SocialMediaDraft},
};

#[derive(Debug, Clone)]
pub struct SocialMediaRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialMediaRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository<SocialMedia> for SocialMediaRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SocialMedia>, RepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(SocialMedia::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SocialMedia>, RepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(SocialMedia::from))
    }

    async fn insert(&self, draft: SocialMediaDraft) -> Result<SocialMedia, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            platform: Set(draft.platform),
            url: Set(draft.url),
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
        changes: SocialMediaChanges,
    ) -> Result<Option<SocialMedia>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(platform) = changes.platform {
            model.platform = Set(platform);
        }
        if let Some(url) = changes.url {
            model.url = Set(url);
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

        Ok(results.into_iter().next().map(SocialMedia::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<SocialMedia>, RepositoryError> {
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
impl OrderedRepository<SocialMedia> for SocialMediaRepositoryPostgres {
    async fn max_order(&self) -> Result<Option<i32>, RepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::Order)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.order))
    }

    async fn reorder(&self, items: &[ReorderItem]) -> Result<Vec<SocialMedia>, RepositoryError> {
        reorder_rows::<Entity>(&self.db, Column::Id, Column::Order, Column::UpdatedAt, items)
            .await?;
        self.list().await
    }
}
