use crate::{
    content::{
        application::{ports::incoming::SingletonUseCase, CollectionUseCases},
        domain::{Resource, SingletonResource},
    },
    AppState,
};

/// Selects a collection's use cases from the shared state, so one set of
/// generic handlers serves every collection.
pub trait CollectionRoute: Resource {
    fn use_cases(state: &AppState) -> &CollectionUseCases<Self>;
}

pub trait SingletonRoute: SingletonResource {
    fn use_case(state: &AppState) -> &dyn SingletonUseCase<Self>;
}
