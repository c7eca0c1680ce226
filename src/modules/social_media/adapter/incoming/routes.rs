use actix_web::web;

use crate::{
    content::{
        adapter::incoming::web::{configure_collection, CollectionRoute},
        application::CollectionUseCases,
    },
    social_media::domain::entities::SocialMedia,
    AppState,
};

impl CollectionRoute for SocialMedia {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self> {
        &state.social_media
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_collection::<SocialMedia>(cfg);
}
