//! File storage for uploaded images.
//!
//! Uploaded files land under the configured upload directory, optionally in
//! a per-resource subfolder, and are addressed back through `/uploads/...`
//! public paths. File names are timestamp-prefixed to avoid collisions.

use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

use crate::error::ApiError;

/// Content types accepted for image uploads.
const SUPPORTED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Errors raised while persisting an uploaded file.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported image type '{0}'; expected jpeg, png, gif, or webp")]
    UnsupportedType(String),
    #[error("uploaded file exceeds the maximum size of {max} bytes")]
    TooLarge { max: usize },
    #[error("failed to write uploaded file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl From<UploadError> for ApiError {
    fn from(error: UploadError) -> Self {
        use axum::http::StatusCode;

        match &error {
            UploadError::UnsupportedType(_) | UploadError::TooLarge { .. } => ApiError::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED".to_string(),
                error.to_string(),
            ),
            UploadError::Io { source } => {
                tracing::error!("Upload write failed: {:?}", source);
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR".to_string(),
                    format!("Failed to store uploaded file: {}", source),
                )
            }
        }
    }
}

/// Returns true when the content type is an accepted image format.
pub fn is_supported_image(content_type: &str) -> bool {
    SUPPORTED_IMAGE_TYPES.contains(&content_type)
}

/// Local-disk file storage rooted at the configured upload directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    max_bytes: usize,
}

impl FileStorage {
    /// Creates a storage handle rooted at `root` with the given size cap.
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    /// The directory uploads are written to, for static file serving.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// The per-file size cap in bytes.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validates an upload before any bytes touch the disk.
    pub fn validate(&self, content_type: Option<&str>, size: usize) -> Result<(), UploadError> {
        let content_type = content_type.unwrap_or("application/octet-stream");
        if !is_supported_image(content_type) {
            return Err(UploadError::UnsupportedType(content_type.to_string()));
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                max: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Saves `bytes` under the optional `subfolder` and returns the public
    /// `/uploads/...` path for the stored file.
    pub async fn save(
        &self,
        bytes: &[u8],
        name_hint: &str,
        subfolder: &str,
    ) -> Result<String, UploadError> {
        let dir = if subfolder.is_empty() {
            self.root.clone()
        } else {
            self.root.join(subfolder)
        };
        fs::create_dir_all(&dir).await?;

        let filename = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_name(name_hint)
        );
        fs::write(dir.join(&filename), bytes).await?;

        let url_path = if subfolder.is_empty() {
            format!("/uploads/{}", filename)
        } else {
            format!("/uploads/{}/{}", subfolder, filename)
        };

        Ok(url_path)
    }
}

/// Replaces whitespace with underscores and strips path separators from a
/// client-supplied file name.
fn sanitize_name(name_hint: &str) -> String {
    let sanitized: String = name_hint
        .chars()
        .filter(|c| *c != '/' && *c != '\\')
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    if sanitized.is_empty() {
        "upload".to_string()
    } else {
        sanitized
    }
}
