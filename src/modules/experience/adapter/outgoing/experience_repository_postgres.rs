use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::{
    content::{
        adapter::outgoing::{map_db_err, strings_to_json},
        application::ports::outgoing::{CollectionRepository, RepositoryError},
    },
    experience::domain::entities::{Experience, ExperienceChanges, ExperienceDraft},
};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository<Experience> for ExperienceRepositoryPostgres {
    /// Unsorted; "Month Year" strings are ordered by the domain.
    async fn list(&self) -> Result<Vec<Experience>, RepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(Experience::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, RepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Experience::from))
    }

    async fn insert(&self, draft: ExperienceDraft) -> Result<Experience, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            company: Set(draft.company),
            location: Set(draft.location),
            start_date: Set(draft.start_date),
            end_date: Set(draft.end_date),
            responsibilities: Set(strings_to_json(draft.responsibilities)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Option<Experience>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(company) = changes.company {
            model.company = Set(company);
        }
        if let Some(location) = changes.location {
            model.location = Set(location);
        }
        if let Some(start_date) = changes.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            model.end_date = Set(end_date);
        }
        if let Some(responsibilities) = changes.responsibilities {
            model.responsibilities = Set(strings_to_json(responsibilities));
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().next().map(Experience::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Experience>, RepositoryError> {
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
