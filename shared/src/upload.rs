use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Please select an image file (got {mime_type})")]
    NotAnImage { mime_type: String },
    #[error("Image is too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
}

/// What an uploaded file has to satisfy before it is sent for prediction.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadConstraint {
    pub allowed_mime_prefix: String,
    pub max_bytes: u64,
}

impl Default for UploadConstraint {
    fn default() -> Self {
        Self {
            allowed_mime_prefix: "image/".into(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadConstraint {
    pub fn check(&self, mime_type: &str, size: u64) -> Result<(), UploadRejection> {
        if !mime_type.starts_with(&self.allowed_mime_prefix) {
            return Err(UploadRejection::NotAnImage {
                mime_type: if mime_type.is_empty() {
                    "unknown type".into()
                } else {
                    mime_type.to_string()
                },
            });
        }
        if size > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}
