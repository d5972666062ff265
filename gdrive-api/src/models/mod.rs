pub mod drive;

pub use drive::{
    export_mime_type, DownloadedFile, DriveFile, DriveFileList, UploadOptions, FOLDER_MIME_TYPE,
    GOOGLE_APPS_PREFIX,
};
