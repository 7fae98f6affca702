// handlers/files.rs - POST /files/ and POST /uploadfile/
//
// Both read the multipart field named `file`; other fields are skipped.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    response::Json,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct FileSize {
    pub file_size: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadedFile {
    pub filename: String,
}

/// POST /files/ - read the whole `file` field and report its size in bytes
pub async fn create_file(multipart: Result<Multipart, MultipartRejection>) -> ApiResult<FileSize> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let data = field.bytes().await?;
        tracing::debug!(file_size = data.len(), "file received");
        return Ok(Json(FileSize { file_size: data.len() }));
    }

    Err(ApiError::invalid_field(FILE_FIELD, "field required"))
}

/// POST /uploadfile/ - report the client-supplied filename of `file`
pub async fn create_upload_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<UploadedFile> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        return match field.file_name() {
            Some(filename) => {
                tracing::debug!(filename = %filename, "upload received");
                Ok(Json(UploadedFile { filename: filename.to_string() }))
            }
            None => Err(ApiError::invalid_field(FILE_FIELD, "expected an uploaded file")),
        };
    }

    Err(ApiError::invalid_field(FILE_FIELD, "field required"))
}
