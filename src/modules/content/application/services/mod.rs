pub mod collection_service;
pub mod ordered_collection_service;
pub mod singleton_service;

pub use collection_service::CollectionService;
pub use ordered_collection_service::OrderedCollectionService;
pub use singleton_service::SingletonService;
