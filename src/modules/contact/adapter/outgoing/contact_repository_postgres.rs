use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::{
    contact::domain::entities::{Contact, ContactChanges, ContactDraft},
    content::{
        adapter::outgoing::{map_db_err, SINGLETON_SLOT},
        application::ports::outgoing::{RepositoryError, SingletonRepository},
    },
};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SingletonRepository<Contact> for ContactRepositoryPostgres {
    async fn fetch(&self) -> Result<Option<Contact>, RepositoryError> {
        let model = Entity::find()
            .filter(Column::Slot.eq(SINGLETON_SLOT))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Contact::from))
    }

    async fn insert(&self, draft: ContactDraft) -> Result<Contact, RepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slot: Set(SINGLETON_SLOT),
            email: Set(draft.email),
            phone: Set(draft.phone),
            address: Set(draft.address),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Slot)
                    .update_columns([
                        Column::Email,
                        Column::Phone,
                        Column::Address,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(saved.into())
    }

    async fn update(&self, changes: ContactChanges) -> Result<Option<Contact>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(email) = changes.email {
            model.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            model.phone = Set(phone);
        }
        if let Some(address) = changes.address {
            model.address = Set(address);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Slot.eq(SINGLETON_SLOT))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().next().map(Contact::from))
    }

    async fn delete(&self) -> Result<Option<Contact>, RepositoryError> {
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
