pub mod sea_orm_entity;
pub mod social_media_repository_postgres;

pub use social_media_repository_postgres::SocialMediaRepositoryPostgres;
