use actix_web::web;

use crate::{
    about_me::domain::entities::AboutMe,
    content::{
        adapter::incoming::web::{configure_singleton, SingletonRoute},
        application::ports::incoming::SingletonUseCase,
    },
    AppState,
};

impl SingletonRoute for AboutMe {
    fn use_case(state: &AppState) -> &dyn SingletonUseCase<Self> {
        state.about_me.as_ref()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_singleton::<AboutMe>(cfg);
}
