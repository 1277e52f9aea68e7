//! Media snapshots and upload descriptions.

use serde::Deserialize;

use super::ports::UploadFile;

/// Uploaded picture or file, referenced by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Media {
    /// Opaque identifier.
    pub id: String,
    /// Public URL of the file.
    pub url: String,
    /// File name as stored.
    #[serde(default)]
    pub name: Option<String>,
    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
    /// Dimensions and preview hash, when known.
    #[serde(default)]
    pub metadata: Option<MediaMetadata>,
}

/// Optional image metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MediaMetadata {
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// Perceptual placeholder hash.
    #[serde(default)]
    pub blurhash: Option<String>,
}

/// A file to upload as media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUpload {
    /// Name recorded by the server.
    pub name: String,
    /// Alternative text.
    pub alt: Option<String>,
    /// File name on the uploader's disk.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    /// Split into the multipart file bound to `variable`.
    #[must_use]
    pub fn into_file(self, variable: &str) -> UploadFile {
        UploadFile {
            variable: variable.to_owned(),
            file_name: self.file_name,
            content_type: self.content_type,
            bytes: self.bytes,
        }
    }
}
