use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use tracing::{debug, info};

use crate::client::DriveClient;
use crate::error::{ApiError, ApiResult};
use crate::models::drive::{UploadMetadata, DEFAULT_UPLOAD_MIME_TYPE, DEFAULT_UPLOAD_NAME};
use crate::models::{
    export_mime_type, DownloadedFile, DriveFile, DriveFileList, UploadOptions, FOLDER_MIME_TYPE,
    GOOGLE_APPS_PREFIX,
};

const PAGE_SIZE: u32 = 1000;
const LIST_FIELDS: &str = "nextPageToken,files(id,name,mimeType,modifiedTime)";
const MULTIPART_BOUNDARY: &str = "gdrive_api_boundary";

/// Drive file operations.
#[async_trait]
pub trait DriveApi {
    /// List every non-trashed file in the drive.
    ///
    /// Follows the continuation token across pages and returns all pages
    /// concatenated in provider order. Any page failure aborts the whole
    /// listing; there are no partial results.
    async fn list_all_files(&self) -> ApiResult<Vec<DriveFile>>;

    /// Move a single file to the trash (soft delete).
    async fn delete_file(&self, file_id: &str) -> ApiResult<()>;

    /// Trash every currently-listed file, one at a time in listing order.
    ///
    /// Fails fast on the first deletion error; files trashed before the
    /// failure stay trashed.
    async fn delete_all_files(&self) -> ApiResult<()>;

    /// Upload file content via the multipart endpoint.
    ///
    /// Returns the created descriptor exactly as the provider reports it.
    async fn upload_file(&self, content: Bytes, options: &UploadOptions) -> ApiResult<DriveFile>;

    /// Return the id of a non-trashed folder with this exact name,
    /// creating it first when none exists.
    ///
    /// Known limitation: concurrent callers with the same name can race
    /// and create duplicate folders. Drive allows duplicates; the first
    /// lookup hit wins afterwards.
    async fn get_or_create_folder(&self, name: &str) -> ApiResult<String>;

    /// Download a file's content.
    ///
    /// Google Workspace document types are exported to a fixed target
    /// format (document → PDF, spreadsheet → xlsx, presentation → pptx);
    /// everything else is fetched as raw media bytes.
    async fn download_file(&self, file_id: &str) -> ApiResult<DownloadedFile>;
}

#[async_trait]
impl DriveApi for DriveClient {
    async fn list_all_files(&self) -> ApiResult<Vec<DriveFile>> {
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = format!(
                "{}?q={}&fields={}&pageSize={}",
                self.api_url("/files"),
                urlencoding::encode("trashed = false"),
                urlencoding::encode(LIST_FIELDS),
                PAGE_SIZE
            );
            if let Some(token) = &page_token {
                url.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
            }

            debug!(target: "gdrive", page = page_token.is_some(), "Requesting file listing page");
            let response = self
                .http_client
                .get(&url)
                .bearer_auth(self.access_token())
                .timeout(self.request_timeout())
                .send()
                .await?;
            let response = check_status("list_all_files", None, response).await?;

            let page: DriveFileList = response.json().await?;
            files.extend(page.files);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(target: "gdrive", count = files.len(), "Listed all files");
        Ok(files)
    }

    async fn delete_file(&self, file_id: &str) -> ApiResult<()> {
        let url = format!(
            "{}/{}",
            self.api_url("/files"),
            urlencoding::encode(file_id)
        );

        let response = self
            .http_client
            .patch(&url)
            .bearer_auth(self.access_token())
            .timeout(self.request_timeout())
            .json(&serde_json::json!({ "trashed": true }))
            .send()
            .await?;
        check_status("delete_file", Some(file_id), response).await?;

        info!(target: "gdrive", file_id, "File moved to trash");
        Ok(())
    }

    async fn delete_all_files(&self) -> ApiResult<()> {
        let files = self.list_all_files().await?;
        info!(target: "gdrive", count = files.len(), "Trashing all listed files");

        for file in &files {
            debug!(target: "gdrive", file_id = %file.id, "Trashing file");
            self.delete_file(&file.id).await?;
        }

        Ok(())
    }

    async fn upload_file(&self, content: Bytes, options: &UploadOptions) -> ApiResult<DriveFile> {
        let name = options.name.as_deref().unwrap_or(DEFAULT_UPLOAD_NAME);
        let mime_type = options
            .mime_type
            .as_deref()
            .unwrap_or(DEFAULT_UPLOAD_MIME_TYPE);
        let metadata = serde_json::to_vec(&UploadMetadata {
            name,
            mime_type,
            parents: options.parents.as_deref(),
        })?;

        // multipart/related body: JSON metadata part, then the content part.
        let mut body = Vec::with_capacity(content.len() + metadata.len() + 256);
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
        body.extend_from_slice(&metadata);
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(&content);
        body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--").as_bytes());

        let url = format!("{}?uploadType=multipart", self.upload_url("/files"));
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.access_token())
            .timeout(self.request_timeout())
            .header(
                CONTENT_TYPE,
                format!("multipart/related; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(body)
            .send()
            .await?;
        let response = check_status("upload_file", None, response).await?;

        let file: DriveFile = response.json().await?;
        info!(target: "gdrive", file_id = %file.id, name = %file.name, "Uploaded file");
        Ok(file)
    }

    async fn get_or_create_folder(&self, name: &str) -> ApiResult<String> {
        if let Some(id) = self.find_folder_by_name(name).await? {
            debug!(target: "gdrive", folder = name, id = %id, "Found existing folder");
            return Ok(id);
        }
        self.create_folder(name).await
    }

    async fn download_file(&self, file_id: &str) -> ApiResult<DownloadedFile> {
        let encoded_id = urlencoding::encode(file_id).into_owned();

        let meta_url = format!(
            "{}/{}?fields={}",
            self.api_url("/files"),
            encoded_id,
            urlencoding::encode("mimeType,name")
        );
        let response = self
            .http_client
            .get(&meta_url)
            .bearer_auth(self.access_token())
            .timeout(self.request_timeout())
            .send()
            .await?;
        let response = check_status("download_file", Some(file_id), response).await?;

        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct FileMeta {
            mime_type: String,
            name: String,
        }
        let meta: FileMeta = response.json().await?;

        let download_url = if meta.mime_type.starts_with(GOOGLE_APPS_PREFIX) {
            let target = export_mime_type(&meta.mime_type).ok_or_else(|| {
                ApiError::UnsupportedExport {
                    mime_type: meta.mime_type.clone(),
                }
            })?;
            format!(
                "{}/{}/export?mimeType={}",
                self.api_url("/files"),
                encoded_id,
                urlencoding::encode(target)
            )
        } else {
            format!("{}/{}?alt=media", self.api_url("/files"), encoded_id)
        };

        let response = self
            .http_client
            .get(&download_url)
            .bearer_auth(self.access_token())
            .timeout(self.request_timeout())
            .send()
            .await?;
        let response = check_status("download_file", Some(file_id), response).await?;

        let headers = response.headers().clone();
        let data = response.bytes().await?;
        info!(target: "gdrive", file_id, name = %meta.name, bytes = data.len(), "Downloaded file");

        Ok(DownloadedFile {
            data,
            headers,
            file_name: meta.name,
        })
    }
}

impl DriveClient {
    async fn find_folder_by_name(&self, name: &str) -> ApiResult<Option<String>> {
        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            name.replace('\'', "\\'"),
            FOLDER_MIME_TYPE
        );
        let url = format!(
            "{}?q={}&fields={}&spaces=drive",
            self.api_url("/files"),
            urlencoding::encode(&query),
            urlencoding::encode("files(id, name)")
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.access_token())
            .timeout(self.request_timeout())
            .send()
            .await?;
        let response = check_status("find_folder", None, response).await?;

        #[derive(serde::Deserialize)]
        struct FolderHit {
            id: String,
        }
        #[derive(serde::Deserialize)]
        struct FolderList {
            #[serde(default)]
            files: Vec<FolderHit>,
        }
        let list: FolderList = response.json().await?;
        Ok(list.files.into_iter().next().map(|f| f.id))
    }

    async fn create_folder(&self, name: &str) -> ApiResult<String> {
        let response = self
            .http_client
            .post(self.api_url("/files"))
            .bearer_auth(self.access_token())
            .timeout(self.request_timeout())
            .json(&serde_json::json!({
                "name": name,
                "mimeType": FOLDER_MIME_TYPE,
            }))
            .send()
            .await?;
        let response = check_status("create_folder", None, response).await?;

        #[derive(serde::Deserialize)]
        struct CreatedFolder {
            id: String,
        }
        let created: CreatedFolder = response.json().await?;
        info!(target: "gdrive", folder = name, id = %created.id, "Created folder");
        Ok(created.id)
    }
}

/// Map a non-success response into the error taxonomy, consuming the body
/// for context.
async fn check_status(
    operation: &'static str,
    file_id: Option<&str>,
    response: Response,
) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(operation, file_id, status, body))
}
