use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Body of a login request against the auth endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

/// Metadata fields of an attachment upload.
///
/// The three fixed fields are the ones the attachment endpoint always
/// expects; anything else (description, visibility flags, ...) goes into
/// `extra` and is flattened into the multipart form alongside them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentParams {
    /// Identifier of the entity the file is attached to
    pub entity_id: u64,
    /// Numeric entity type discriminator
    pub entity_type: u32,
    /// Numeric purpose discriminator
    pub purpose_id: u32,
    /// Additional form fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttachmentParams {
    /// Creates upload parameters with the three required fields
    pub fn new(entity_id: u64, entity_type: u32, purpose_id: u32) -> Self {
        Self {
            entity_id,
            entity_type,
            purpose_id,
            extra: Map::new(),
        }
    }

    /// Adds an extra form field
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// File payload of an attachment upload
#[derive(Debug, Clone)]
pub struct AttachmentFile {
    /// Filename declared in the multipart part
    pub file_name: String,
    /// MIME type declared in the multipart part
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl AttachmentFile {
    /// Creates a file payload from in-memory bytes
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Reads a file payload from disk, declaring the file's own name.
    pub async fn from_path(path: impl AsRef<Path>, content_type: &str) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("not a file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        })
    }
}
