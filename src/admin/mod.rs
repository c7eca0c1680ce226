pub mod client;
pub mod http_client;
pub mod manager;
pub mod notifications;
pub mod singleton_editor;

pub use client::{ClientError, ResourceClient, SingletonClient};
pub use http_client::HttpResourceClient;
pub use manager::{AdminManager, FormMode, LoadState, SubmitOutcome};
pub use notifications::{Notification, NotificationLevel, Notifications};
pub use singleton_editor::SingletonEditor;
