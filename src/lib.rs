pub mod admin;
pub mod config;
pub mod db;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{
    about_me, contact, content, education, experience, media, project, site, skill, social_media,
};

use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    about_me::{adapter::outgoing::AboutMeRepositoryPostgres, domain::entities::AboutMe},
    config::AppConfig,
    contact::{adapter::outgoing::ContactRepositoryPostgres, domain::entities::Contact},
    content::application::{
        ports::incoming::SingletonUseCase,
        services::{CollectionService, OrderedCollectionService, SingletonService},
        CollectionUseCases,
    },
    education::{adapter::outgoing::EducationRepositoryPostgres, domain::entities::Education},
    experience::{adapter::outgoing::ExperienceRepositoryPostgres, domain::entities::Experience},
    media::{
        adapter::outgoing::LocalImageStore, application::ports::outgoing::ImageStore,
        domain::UploadPolicy,
    },
    project::{adapter::outgoing::ProjectRepositoryPostgres, domain::entities::Project},
    shared::api::custom_json_config,
    skill::{adapter::outgoing::SkillRepositoryPostgres, domain::entities::Skill},
    social_media::{
        adapter::outgoing::SocialMediaRepositoryPostgres, domain::entities::SocialMedia,
    },
};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub about_me: Arc<dyn SingletonUseCase<AboutMe>>,
    pub contact: Arc<dyn SingletonUseCase<Contact>>,
    pub skills: CollectionUseCases<Skill>,
    pub experiences: CollectionUseCases<Experience>,
    pub educations: CollectionUseCases<Education>,
    pub projects: CollectionUseCases<Project>,
    pub social_media: CollectionUseCases<SocialMedia>,
    pub image_store: Arc<dyn ImageStore>,
    pub upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
pub async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    let db_arc = db::connect(&config).await?;

    let state = AppState {
        about_me: Arc::new(SingletonService::new(AboutMeRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        contact: Arc::new(SingletonService::new(ContactRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        skills: CollectionUseCases::ordered(Arc::new(OrderedCollectionService::new(
            SkillRepositoryPostgres::new(Arc::clone(&db_arc)),
        ))),
        experiences: CollectionUseCases::unordered(Arc::new(CollectionService::new(
            ExperienceRepositoryPostgres::new(Arc::clone(&db_arc)),
        ))),
        educations: CollectionUseCases::unordered(Arc::new(CollectionService::new(
            EducationRepositoryPostgres::new(Arc::clone(&db_arc)),
        ))),
        projects: CollectionUseCases::ordered(Arc::new(OrderedCollectionService::new(
            ProjectRepositoryPostgres::new(Arc::clone(&db_arc)),
        ))),
        social_media: CollectionUseCases::ordered(Arc::new(OrderedCollectionService::new(
            SocialMediaRepositoryPostgres::new(Arc::clone(&db_arc)),
        ))),
        image_store: Arc::new(LocalImageStore::new(config.public_dir.clone())),
        upload_policy: UploadPolicy::new(config.max_upload_bytes),
    };

    let templates = web::Data::new(site::adapter::incoming::web::build_templates()?);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(templates.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public pages and uploaded images
    cfg.service(crate::site::adapter::incoming::web::home_handler);
    cfg.service(crate::media::adapter::incoming::web::serve_image_handler);
    // Content API
    crate::about_me::adapter::incoming::routes::configure(cfg);
    crate::contact::adapter::incoming::routes::configure(cfg);
    crate::skill::adapter::incoming::routes::configure(cfg);
    crate::experience::adapter::incoming::routes::configure(cfg);
    crate::education::adapter::incoming::routes::configure(cfg);
    crate::project::adapter::incoming::routes::configure(cfg);
    crate::social_media::adapter::incoming::routes::configure(cfg);
}
