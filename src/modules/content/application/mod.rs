pub mod content_use_cases;
pub mod ports;
pub mod services;

pub use content_use_cases::CollectionUseCases;
