//! Media upload.

use serde::{Deserialize, Serialize};

use crate::domain::Media;

/// Variable holding the multipart file reference.
pub const UPLOAD_FILE_VARIABLE: &str = "file";

/// Variables of [`UploadMedia`].
///
/// `file` names the multipart part carrying the content; the transport
/// fills the part in from the upload description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadMediaVariables {
    /// Name of the multipart part holding the content.
    pub file: String,
    /// Name recorded by the server.
    pub name: String,
    /// Alternative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Data of [`UploadMedia`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMediaData {
    /// The stored media.
    pub upload_media: Media,
}

operation! {
    mutation
    /// Upload a picture or file.
    UploadMedia = "UploadMedia" {
        document: concat!(
            "mutation UploadMedia($file: Upload!, $alt: String, $name: String!) {\n",
            "  uploadMedia(file: $file, alt: $alt, name: $name) {\n",
            "    ...MediaFragment\n",
            "  }\n",
            "}\n",
            media_fragment!()
        ),
        variables: UploadMediaVariables,
        data: UploadMediaData,
    }
}
