use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};
use tracing::info;

use crate::media::{
    application::ports::outgoing::{ImageStore, ImageStoreError},
    domain::ImageSlot,
};

/// Writes images below a public directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Single path segment, no traversal, no hidden files.
fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(
        &self,
        slot: ImageSlot,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<String, ImageStoreError> {
        if !is_safe_file_name(&file_name) {
            return Err(ImageStoreError::InvalidFileName(file_name));
        }

        let dir = self.root.join(slot.folder);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ImageStoreError::Io(e.to_string()))?;

        tokio::fs::write(dir.join(&file_name), &bytes)
            .await
            .map_err(|e| ImageStoreError::Io(e.to_string()))?;

        info!(folder = slot.folder, %file_name, size = bytes.len(), "image stored");
        Ok(slot.public_url(&file_name))
    }

    async fn open(
        &self,
        slot: ImageSlot,
        file_name: String,
    ) -> Result<Option<Vec<u8>>, ImageStoreError> {
        if !is_safe_file_name(&file_name) {
            return Err(ImageStoreError::InvalidFileName(file_name));
        }

        match tokio::fs::read(self.root.join(slot.folder).join(&file_name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ImageStoreError::Io(e.to_string())),
        }
    }

    async fn delete(&self, slot: ImageSlot, file_name: String) -> Result<(), ImageStoreError> {
        if !is_safe_file_name(&file_name) {
            return Err(ImageStoreError::InvalidFileName(file_name));
        }

        match tokio::fs::remove_file(self.root.join(slot.folder).join(&file_name)).await {
            Ok(()) => {
                info!(folder = slot.folder, %file_name, "image removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStoreError::Io(e.to_string())),
        }
    }
}
