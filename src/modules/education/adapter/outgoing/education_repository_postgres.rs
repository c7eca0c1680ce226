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
    education::domain::entities::{Education, EducationChanges, EducationDraft},
};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository<Education> for EducationRepositoryPostgres {
    /// Unsorted; "Month Year" strings are ordered by the domain.
    async fn list(&self) -> Result<Vec<Education>, RepositoryError> {
        let models = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        Ok(models.into_iter().map(Education::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Education>, RepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Education::from))
    }

    async fn insert(&self, draft: EducationDraft) -> Result<Education, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(draft.degree),
            institution: Set(draft.institution),
            location: Set(draft.location),
            start_year: Set(draft.start_year),
            end_year: Set(draft.end_year),
            descriptions: Set(strings_to_json(draft.descriptions)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: EducationChanges,
    ) -> Result<Option<Education>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(degree) = changes.degree {
            model.degree = Set(degree);
        }
        if let Some(institution) = changes.institution {
            model.institution = Set(institution);
        }
        if let Some(location) = changes.location {
            model.location = Set(location);
        }
        if let Some(start_year) = changes.start_year {
            model.start_year = Set(start_year);
        }
        if let Some(end_year) = changes.end_year {
            model.end_year = Set(end_year);
        }
        if let Some(descriptions) = changes.descriptions {
            model.descriptions = Set(strings_to_json(descriptions));
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().next().map(Education::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Education>, RepositoryError> {
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
