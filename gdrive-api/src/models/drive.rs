use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// MIME type Drive assigns to folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Prefix shared by all Google Workspace native document types.
pub const GOOGLE_APPS_PREFIX: &str = "application/vnd.google-apps.";

pub(crate) const DEFAULT_UPLOAD_NAME: &str = "Untitled";
pub(crate) const DEFAULT_UPLOAD_MIME_TYPE: &str = "application/octet-stream";

/// File descriptor as returned by the Drive API.
///
/// Identity is the provider-assigned `id`; descriptors are passed through
/// verbatim and never cached or mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// RFC 3339 timestamp string, kept opaque. Not every response includes
    /// it (upload responses return only the default field set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
}

/// One page of a file listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    /// Opaque continuation token; present when more pages exist.
    pub next_page_token: Option<String>,
}

/// Options for a file upload. All fields are optional; the upload falls
/// back to "Untitled" / "application/octet-stream" when unset, and omits
/// `parents` from the metadata entirely when no folder is given.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub parents: Option<Vec<String>>,
}

/// JSON metadata part of a multipart upload body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadMetadata<'a> {
    pub name: &'a str,
    pub mime_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<&'a [String]>,
}

/// Result of a file download or export.
#[derive(Debug)]
pub struct DownloadedFile {
    pub data: Bytes,
    /// Upstream response headers, for content-type propagation.
    pub headers: HeaderMap,
    /// Resolved file name, for a content-disposition header.
    pub file_name: String,
}

/// Export target for a Google Workspace native type, or `None` when the
/// type has no defined export format.
pub fn export_mime_type(mime_type: &str) -> Option<&'static str> {
    match mime_type {
        "application/vnd.google-apps.document" => Some("application/pdf"),
        "application/vnd.google-apps.spreadsheet" => {
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        }
        "application/vnd.google-apps.presentation" => {
            Some("application/vnd.openxmlformats-officedocument.presentationml.presentation")
        }
        _ => None,
    }
}
