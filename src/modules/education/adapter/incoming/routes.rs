use actix_web::web;

use crate::{
    content::{
        adapter::incoming::web::{configure_collection, CollectionRoute},
        application::CollectionUseCases,
    },
    education::domain::entities::Education,
    AppState,
};

impl CollectionRoute for Education {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self> {
        &state.educations
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_collection::<Education>(cfg);
}
