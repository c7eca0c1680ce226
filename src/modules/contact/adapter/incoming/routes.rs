use actix_web::web;

use crate::{
    contact::domain::entities::Contact,
    content::{
        adapter::incoming::web::{configure_singleton, SingletonRoute},
        application::ports::incoming::SingletonUseCase,
    },
    AppState,
};

impl SingletonRoute for Contact {
    fn use_case(state: &AppState) -> &dyn SingletonUseCase<Self> {
        state.contact.as_ref()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_singleton::<Contact>(cfg);
}
