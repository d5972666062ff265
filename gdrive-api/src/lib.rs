//! # Google Drive API Client
//!
//! A Rust client for the Google Drive v3 REST API, scoped to the file
//! operations a drive file manager needs: listing, trashing, uploading,
//! downloading/exporting, and folder lookup.
//!
//! ## Features
//!
//! - Paged file listing that follows continuation tokens transparently
//! - Soft delete (trash) for single files or the whole drive
//! - Multipart uploads with optional folder placement
//! - Download with automatic export of Google Workspace document types
//! - Typed error handling that preserves upstream status codes
//!
//! ## Example
//!
//! ```no_run
//! use gdrive_api::{ClientConfig, DriveApi, DriveClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One client per access token; the token is sent as a bearer
//!     // credential on every request and never stored elsewhere.
//!     let client = DriveClient::new(ClientConfig::new(), "ya29.access-token");
//!
//!     let files = client.list_all_files().await?;
//!     for file in &files {
//!         println!("{} ({})", file.name, file.mime_type);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use api::DriveApi;
pub use client::{ClientConfig, DriveClient};
pub use error::{ApiError, ApiResult};
pub use models::{DownloadedFile, DriveFile, UploadOptions};
