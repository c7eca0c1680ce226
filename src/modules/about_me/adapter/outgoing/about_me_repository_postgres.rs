use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::{
    about_me::domain::entities::{AboutMe, AboutMeChanges, AboutMeDraft},
    content::{
        adapter::outgoing::{map_db_err, SINGLETON_SLOT},
        application::ports::outgoing::{RepositoryError, SingletonRepository},
    },
};

#[derive(Debug, Clone)]
pub struct AboutMeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutMeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SingletonRepository<AboutMe> for AboutMeRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<AboutMe>, RepositoryError> {
        let model = Entity::find()
            .filter(Column::Slot.eq(SINGLETON_SLOT))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(AboutMe::from))
    }

    async fn insert(&self, draft: AboutMeDraft) -> Result<AboutMe, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slot: Set(SINGLETON_SLOT),
            name: Set(draft.name),
            title: Set(draft.title),
            bio: Set(draft.bio),
            picture_url: Set(draft.picture_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Slot)
                    .update_columns([
                        Column::Name,
                        Column::Title,
                        Column::Bio,
                        Column::PictureUrl,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(saved.into())
    }

    async fn update(&self, changes: AboutMeChanges) -> Result<Option<AboutMe>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = changes.name {
            model.name = Set(name);
        }
        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(bio) = changes.bio {
            model.bio = Set(bio);
        }
        if let Some(picture_url) = changes.picture_url {
            model.picture_url = Set(picture_url);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Slot.eq(SINGLETON_SLOT))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().next().map(AboutMe::from))
    }

    async fn delete(&self) -> Result<Option<AboutMe>, RepositoryError> {
        let Some(existing) = self.fetch().await? else {
            return Ok(None);
        };

        Entity::delete_many()
            .filter(Column::Slot.eq(SINGLETON_SLOT))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(existing))
    }
}
