use chrono::Utc;
use sea_orm::{
    prelude::Json, sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::content::{
    application::ports::outgoing::RepositoryError, domain::ReorderItem,
};

/// Value of the `slot` column on singleton tables. A unique index on the
/// column keeps each table to one row.
pub const SINGLETON_SLOT: i16 = 1;

/// List fields live in JSONB columns.
pub fn strings_to_json(items: Vec<String>) -> Json {
    Json::from(items)
}

/// Non-string entries are dropped rather than failing the whole row.
pub fn json_to_strings(value: Json) -> Vec<String> {
    match value {
        Json::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Json::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn map_db_err(e: DbErr) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

/// Turns a unique-index violation mentioning `index_hint` into `Duplicate`.
pub fn map_unique_err(
    e: DbErr,
    field: &'static str,
    index_hint: &str,
    value: &str,
) -> RepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains(index_hint)
    {
        RepositoryError::Duplicate {
            field,
            value: value.to_string(),
        }
    } else {
        map_db_err(e)
    }
}

/// Writes every `order` value inside one transaction.
///
/// An id that matches no row rolls the whole batch back and is reported as
/// `NotFound(id)`.
pub async fn reorder_rows<E>(
    db: &DatabaseConnection,
    id_column: E::Column,
    order_column: E::Column,
    updated_at_column: E::Column,
    items: &[ReorderItem],
) -> Result<(), RepositoryError>
where
    E: EntityTrait,
{
    let txn = db.begin().await.map_err(map_db_err)?;
    let now = Utc::now().fixed_offset();

    for item in items {
        let result = E::update_many()
            .col_expr(order_column, Expr::value(item.order))
            .col_expr(updated_at_column, Expr::value(now))
            .filter(id_column.eq(item.id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(RepositoryError::NotFound(item.id.to_string()));
        }
    }

    txn.commit().await.map_err(map_db_err)?;
    Ok(())
}
