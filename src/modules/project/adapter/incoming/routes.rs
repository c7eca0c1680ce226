use actix_web::web;

use crate::{
    content::{
        adapter::incoming::web::{configure_collection, CollectionRoute},
        application::CollectionUseCases,
    },
    project::domain::entities::Project,
    AppState,
};

impl CollectionRoute for Project {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self> {
        &state.projects
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_collection::<Project>(cfg);
}
