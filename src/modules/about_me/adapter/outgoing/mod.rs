pub mod about_me_repository_postgres;
pub mod sea_orm_entity;

pub use about_me_repository_postgres::AboutMeRepositoryPostgres;
