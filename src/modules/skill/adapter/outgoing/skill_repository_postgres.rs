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
        adapter::outgoing::{map_db_err, map_unique_err, reorder_rows},
        application::ports::outgoing::{CollectionRepository, OrderedRepository, RepositoryError},
        domain::ReorderItem,
    },
    shared::patch::PatchField,
    skill::domain::entities::{Skill, SkillChanges, SkillDraft},
};

const NAME_INDEX: &str = "idx_skills_name";

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository<Skill> for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, RepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Skill::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Skill>, RepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Skill::from))
    }

    async fn insert(&self, draft: SkillDraft) -> Result<Skill, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let name = draft.name.clone();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            icon: Set(draft.icon),
            order: Set(draft.order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(|e| map_unique_err(e, "name", NAME_INDEX, &name))?;

        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, changes: SkillChanges) -> Result<Option<Skill>, RepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        let name = changes.name.clone().unwrap_or_default();

        if let Some(name) = changes.name {
            model.name = Set(name);
        }

        match changes.icon {
            PatchField::Unset => {}
            PatchField::Null => model.icon = Set(None),
            PatchField::Value(icon) => model.icon = Set(Some(icon)),
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
            .map_err(|e| map_unique_err(e, "name", NAME_INDEX, &name))?;

        Ok(results.into_iter().next().map(Skill::from))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Skill>, RepositoryError> {
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
impl OrderedRepository<Skill> for SkillRepositoryPostgres {
    async fn max_order(&self) -> Result<Option<i32>, RepositoryError> {
        let top = Entity::find()
            .order_by_desc(Column::Order)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(top.map(|m| m.order))
    }

    async fn reorder(&self, items: &[ReorderItem]) -> Result<Vec<Skill>, RepositoryError> {
        reorder_rows::<Entity>(&self.db, Column::Id, Column::Order, Column::UpdatedAt, items)
            .await?;
        self.list().await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn model(name: &str, order: i32) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon: None,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    fn repo(db: MockDatabase) -> SkillRepositoryPostgres {
        SkillRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let rows = vec![model("Rust", 0), model("Go", 1)];
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![rows]);

        let skills = repo(db).list().await.unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].name, "Rust");
        assert_eq!(skills[1].order, 1);
    }

    #[tokio::test]
    async fn test_insert_returns_row() {
        let inserted = model("Rust", 0);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]]);

        let skill = repo(db)
            .insert(SkillDraft {
                name: "Rust".into(),
                icon: None,
                order: Some(0),
            })
            .await
            .unwrap();

        assert_eq!(skill.id, inserted.id);
        assert_eq!(skill.name, "Rust");
    }

    #[tokio::test]
    async fn test_insert_duplicate_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"idx_skills_name_unique\"".into(),
            )),
        ]);

        let result = repo(db)
            .insert(SkillDraft {
                name: "Rust".into(),
                icon: None,
                order: Some(0),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::Duplicate {
                field: "name",
                value: "Rust".into()
            }
        );
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()]);

        let result = repo(db)
            .update(
                Uuid::new_v4(),
                SkillChanges {
                    order: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let existing = model("Rust", 0);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }]);

        let removed = repo(db).delete(existing.id).await.unwrap();

        assert_eq!(removed.map(|s| s.id), Some(existing.id));
    }

    #[tokio::test]
    async fn test_delete_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()]);

        assert!(repo(db).delete(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_max_order_empty_and_populated() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_results(vec![vec![model("Go", 7)]]);
        let repo = repo(db);

        assert_eq!(repo.max_order().await.unwrap(), None);
        assert_eq!(repo.max_order().await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn test_reorder_writes_all_then_lists() {
        let go = model("Go", 0);
        let rust = model("Rust", 1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .append_query_results(vec![vec![go.clone(), rust.clone()]]);

        let skills = repo(db)
            .reorder(&[
                ReorderItem { id: go.id, order: 0 },
                ReorderItem {
                    id: rust.id,
                    order: 1,
                },
            ])
            .await
            .unwrap();

        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust"]);
    }

    #[tokio::test]
    async fn test_reorder_unknown_id_aborts() {
        let ghost = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);

        let result = repo(db)
            .reorder(&[
                ReorderItem {
                    id: Uuid::new_v4(),
                    order: 0,
                },
                ReorderItem { id: ghost, order: 1 },
            ])
            .await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound(ghost.to_string()));
    }
}
