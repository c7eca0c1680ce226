use actix_web::web;

use crate::{
    content::{
        adapter::incoming::web::{configure_collection, CollectionRoute},
        application::CollectionUseCases,
    },
    skill::domain::entities::Skill,
    AppState,
};

impl CollectionRoute for Skill {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self> {
        &state.skills
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_collection::<Skill>(cfg);
}
