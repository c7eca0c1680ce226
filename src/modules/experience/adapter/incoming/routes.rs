use actix_web::web;

use crate::{
    content::{
        adapter::incoming::web::{configure_collection, CollectionRoute},
        application::CollectionUseCases,
    },
    experience::domain::entities::Experience,
    AppState,
};

impl CollectionRoute for Experience {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self> {
        &state.experiences
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_collection::<Experience>(cfg);
}
