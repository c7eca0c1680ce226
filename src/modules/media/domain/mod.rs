pub mod image_slot;
pub mod upload_policy;

pub use image_slot::ImageSlot;
pub use upload_policy::{UploadPolicy, UploadRejection};
