use async_trait::async_trait;

use crate::media::domain::ImageSlot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Storage error: {0}")]
    Io(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes the bytes as `<folder>/<file_name>` and returns the public URL
    /// (`/<folder>/<file_name>`).
    async fn save(
        &self,
        slot: ImageSlot,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<String, ImageStoreError>;

    /// `Ok(None)` when no such file exists.
    async fn open(&self, slot: ImageSlot, file_name: String)
        -> Result<Option<Vec<u8>>, ImageStoreError>;

    /// Removing a file that is already gone is not an error.
    async fn delete(&self, slot: ImageSlot, file_name: String) -> Result<(), ImageStoreError>;
}
