use std::sync::Arc;

use crate::content::{
    application::ports::incoming::{CollectionUseCase, ReorderUseCase},
    domain::Resource,
};

/// Use cases wired for one id-keyed collection.
///
/// `reorder` is only present for collections with an `order` field.
#[derive(Clone)]
pub struct CollectionUseCases<R: Resource> {
    pub manage: Arc<dyn CollectionUseCase<R>>,
    pub reorder: Option<Arc<dyn ReorderUseCase<R>>>,
}

impl<R: Resource> CollectionUseCases<R> {
    pub fn unordered(manage: Arc<dyn CollectionUseCase<R>>) -> Self {
        Self {
            manage,
            reorder: None,
        }
    }

    pub fn ordered<S>(service: Arc<S>) -> Self
    where
        S: CollectionUseCase<R> + ReorderUseCase<R> + 'static,
    {
        Self {
            manage: service.clone(),
            reorder: Some(service),
        }
    }
}
