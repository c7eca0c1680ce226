use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::{content::adapter::outgoing::json_to_strings, experience::domain::entities::Experience};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub start_date: String,

    // Empty string while ongoing, never NULL
    #[sea_orm(column_type = "Text")]
    pub end_date: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub responsibilities: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Experience {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            company: model.company,
            location: model.location,
            start_date: model.start_date,
            end_date: model.end_date,
            responsibilities: json_to_strings(model.responsibilities),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
