use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::{content::adapter::outgoing::json_to_strings, education::domain::entities::Education};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub degree: String,

    #[sea_orm(column_type = "Text")]
    pub institution: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub start_year: String,

    // Empty string while ongoing, never NULL
    #[sea_orm(column_type = "Text")]
    pub end_year: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub descriptions: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            degree: model.degree,
            institution: model.institution,
            location: model.location,
            start_year: model.start_year,
            end_year: model.end_year,
            descriptions: json_to_strings(model.descriptions),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
