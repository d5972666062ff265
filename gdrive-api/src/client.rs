use std::time::Duration;

/// Default base URL for metadata and media endpoints.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/drive/v3";
/// Default base URL for the multipart upload endpoint.
pub const DEFAULT_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/drive/v3";

/// Configuration for a [`DriveClient`].
///
/// The base URLs are overridable so tests can point the client at a local
/// mock server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_base: String,
    upload_base: String,
    timeout_secs: u64,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            upload_base: DEFAULT_UPLOAD_BASE.to_string(),
            timeout_secs: 30,
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_upload_base(mut self, base: impl Into<String>) -> Self {
        self.upload_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Google Drive client bound to a single access token.
///
/// All requests authenticate with `Authorization: Bearer <token>`. The
/// client holds no other state; construct one per signed-in user request
/// and drop it when done.
pub struct DriveClient {
    pub(crate) http_client: reqwest::Client,
    config: ClientConfig,
    access_token: String,
}

impl DriveClient {
    pub fn new(config: ClientConfig, access_token: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
            access_token: access_token.into(),
        }
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// Build a URL under the metadata/media API base.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }

    /// Build a URL under the upload API base.
    pub(crate) fn upload_url(&self, path: &str) -> String {
        format!("{}{}", self.config.upload_base, path)
    }
}
