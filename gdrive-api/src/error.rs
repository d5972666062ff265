use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Drive API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Drive API error types.
///
/// Upstream status codes are preserved verbatim; nothing is retried or
/// suppressed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The access token was rejected by Drive (401/403).
    #[error("access token rejected by Drive ({status})")]
    AuthRejected { status: StatusCode },

    /// An id-addressed file no longer exists.
    #[error("file {file_id} not found")]
    NotFound { file_id: String },

    /// Google Workspace type with no defined export target.
    #[error("no export format defined for {mime_type}")]
    UnsupportedExport { mime_type: String },

    /// Any other non-success upstream status.
    #[error("{operation}{} failed with status {status}: {body}", file_context(.file_id))]
    Upstream {
        operation: &'static str,
        file_id: Option<String>,
        status: StatusCode,
        body: String,
    },

    /// Failed to encode a request body.
    #[error("failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// HTTP transport failure.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

fn file_context(file_id: &Option<String>) -> String {
    match file_id {
        Some(id) => format!(" (file {id})"),
        None => String::new(),
    }
}

impl ApiError {
    /// Classify a non-success upstream status into the error taxonomy.
    pub(crate) fn from_status(
        operation: &'static str,
        file_id: Option<&str>,
        status: StatusCode,
        body: String,
    ) -> Self {
        match (status, file_id) {
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => {
                ApiError::AuthRejected { status }
            }
            (StatusCode::NOT_FOUND, Some(id)) => ApiError::NotFound {
                file_id: id.to_string(),
            },
            (status, file_id) => ApiError::Upstream {
                operation,
                file_id: file_id.map(str::to_string),
                status,
                body,
            },
        }
    }
}
