pub mod collection_routes;
pub mod error_mapping;
pub mod payload;
pub mod route_access;
pub mod singleton_routes;

pub use collection_routes::configure_collection;
pub use route_access::{CollectionRoute, SingletonRoute};
pub use singleton_routes::configure_singleton;
