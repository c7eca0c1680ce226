use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{media::domain::ImageSlot, shared::validation::ValidationError};

/// A content collection as served by the REST surface.
///
/// The implementing type is the stored document itself. `Payload` is the raw
/// request body with every field optional; `Draft` and `Changes` are the
/// validated create and partial-update forms handed to the repositories.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Payload: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static;
    type Draft: Send + Sync + 'static;
    type Changes: Send + Sync + 'static;

    /// Human readable name used in messages, e.g. `"Skill"`.
    const NAME: &'static str;
    /// Path segment under `/api`, e.g. `"skills"`.
    const COLLECTION: &'static str;
    /// Image upload accepted on create/update, if any.
    const IMAGE: Option<ImageSlot> = None;

    fn id(&self) -> Uuid;

    fn validate_draft(payload: Self::Payload) -> Result<Self::Draft, ValidationError>;

    /// Validates only the submitted fields.
    fn validate_changes(payload: Self::Payload) -> Result<Self::Changes, ValidationError>;

    /// Form values for editing an existing document.
    fn to_payload(&self) -> Self::Payload;

    /// Materializes a validated draft as a new document.
    fn from_draft(id: Uuid, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    fn apply_changes(&mut self, changes: Self::Changes, now: DateTime<Utc>);

    /// Field and value that must be unique across the collection, if any.
    fn unique_key(&self) -> Option<(&'static str, String)> {
        None
    }

    /// Display sequence for list reads. Default keeps repository order.
    fn arrange(_items: &mut [Self]) {}

    fn not_found_message() -> String {
        format!("{} not found", Self::NAME)
    }
}

/// Collections displayed by an explicit `order` field.
pub trait OrderedResource: Resource {
    fn order(&self) -> i32;

    fn set_order(&mut self, order: i32);

    fn draft_order(draft: &Self::Draft) -> Option<i32>;

    fn assign_order(draft: &mut Self::Draft, order: i32);
}

/// At most one document exists (AboutMe, Contact).
pub trait SingletonResource: Resource {
    /// Upsert on an empty slot: the submitted fields must form a full document.
    fn draft_from_changes(changes: Self::Changes) -> Result<Self::Draft, ValidationError>;
}
