pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_table_skills;
mod m20261016_000002_create_table_experiences;
mod m20261016_000003_create_table_educations;
mod m20261016_000004_create_table_projects;
mod m20261016_000005_create_table_social_media;
mod m20261016_000006_create_table_about_me;
mod m20261016_000007_create_table_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_table_skills::Migration),
            Box::new(m20261016_000002_create_table_experiences::Migration),
            Box::new(m20261016_000003_create_table_educations::Migration),
            Box::new(m20261016_000004_create_table_projects::Migration),
            Box::new(m20261016_000005_create_table_social_media::Migration),
            Box::new(m20261016_000006_create_table_about_me::Migration),
            Box::new(m20261016_000007_create_table_contacts::Migration),
        ]
    }
}
