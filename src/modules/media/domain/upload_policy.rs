use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("Image exceeds the {limit} byte limit")]
    TooLarge { limit: u64 },

    #[error("File name is too long")]
    FileNameTooLong,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "image/svg+xml",
    ];

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    pub fn check_mime(&self, mime: &str) -> Result<(), UploadRejection> {
        if self.allowed_mime_types.contains(&mime) {
            Ok(())
        } else {
            Err(UploadRejection::UnsupportedType(mime.to_string()))
        }
    }

    pub fn check_size(&self, size: u64) -> Result<(), UploadRejection> {
        if size > self.max_file_size_bytes {
            Err(UploadRejection::TooLarge {
                limit: self.max_file_size_bytes,
            })
        } else {
            Ok(())
        }
    }

    pub fn check_file_name(&self, file_name: &str) -> Result<(), UploadRejection> {
        if file_name.len() > self.max_file_name_len {
            Err(UploadRejection::FileNameTooLong)
        } else {
            Ok(())
        }
    }

    /// Extension (with dot) of the client file name, or one derived from the MIME type.
    pub fn extension_for(file_name: &str, mime: &str) -> String {
        let from_name = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| ext.to_ascii_lowercase());

        let ext = from_name.unwrap_or_else(|| {
            match mime {
                "image/jpeg" => "jpg",
                "image/png" => "png",
                "image/webp" => "webp",
                "image/gif" => "gif",
                "image/svg+xml" => "svg",
                _ => "bin",
            }
            .to_string()
        });

        format!(".{ext}")
    }
}
