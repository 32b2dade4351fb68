//! HTTP handlers for recording upload and retrieval.

use axum::{
    Json,
    body::Body,
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::{StatusCode, header},
    response::Response,
};
use bytes::Bytes;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::{info, instrument, warn};

use crate::AppState;
use crate::api::models::videos::UploadResponse;
use crate::errors::{Error, Result};

/// Oversized bodies surface as multipart read errors once `DefaultBodyLimit`
/// trips, so the 413 has to be recovered from the error's status.
fn map_multipart_error(e: MultipartError, max_bytes: u64) -> Error {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::PayloadTooLarge {
            message: format!("Upload exceeds maximum allowed size of {max_bytes} bytes"),
        }
    } else {
        Error::BadRequest {
            message: format!("Failed to read multipart data: {e}"),
        }
    }
}

#[utoipa::path(
    post,
    path = "/save",
    tag = "videos",
    summary = "Upload recording",
    description = "Accepts a multipart form with a `file` field and persists it under a \
                   generated `<uuid>.webm` name in the storage directory.",
    request_body(
        content_type = "multipart/form-data",
        description = "Captured recording in the `file` field"
    ),
    responses(
        (status = 200, description = "Recording stored", body = UploadResponse),
        (status = 400, description = "Missing file part, empty filename, or disallowed file type"),
        (status = 405, description = "Method not allowed"),
        (status = 413, description = "Upload exceeds the configured size limit"),
        (status = 500, description = "Recording could not be written to disk")
    )
)]
#[instrument(skip_all)]
pub async fn save_recording(State(state): State<AppState>, mut multipart: Multipart) -> Result<Json<UploadResponse>> {
    let max_bytes = state.config.storage.max_upload_bytes;
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| map_multipart_error(e, max_bytes))?
    {
        if field.name() != Some("file") {
            // Ignore unknown fields (forward compatibility)
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            warn!("Upload rejected: no file selected");
            return Err(Error::BadRequest {
                message: "No file selected".to_string(),
            });
        }

        let data = field.bytes().await.map_err(|e| map_multipart_error(e, max_bytes))?;

        upload = Some((filename, data));
        break;
    }

    let Some((client_filename, data)) = upload else {
        warn!("Upload rejected: no file part in the request");
        return Err(Error::BadRequest {
            message: "No file part in the request".to_string(),
        });
    };

    // The client filename only gates acceptance; the stored name is always a
    // generated <uuid>.webm.
    if !state.store.has_allowed_extension(&client_filename) {
        warn!(filename = %client_filename, "Upload rejected: file type not allowed");
        return Err(Error::BadRequest {
            message: format!("File type not allowed: {client_filename}"),
        });
    }

    let filename = state
        .store
        .save(&data)
        .await
        .map_err(|e| Error::SaveFailed { detail: e.to_string() })?;

    info!(%filename, bytes = data.len(), "Recording stored");

    Ok(Json(UploadResponse {
        message: "Video uploaded successfully".to_string(),
        filename,
    }))
}

#[utoipa::path(
    get,
    path = "/videos/{filename}",
    tag = "videos",
    summary = "Retrieve recording",
    description = "Streams a previously stored recording back with an inferred content type.",
    params(
        ("filename" = String, Path, description = "Name returned by a previous upload")
    ),
    responses(
        (status = 200, description = "Recording bytes"),
        (status = 404, description = "No stored recording with that name")
    )
)]
#[instrument(skip(state))]
pub async fn get_video(State(state): State<AppState>, Path(filename): Path<String>) -> Result<Response> {
    let not_found = || Error::NotFound {
        message: "Video not found".to_string(),
    };

    // Traversal-safe: resolve() only ever yields root/<plain filename>
    let path = state.store.resolve(&filename).ok_or_else(not_found)?;

    let file = File::open(&path).await.map_err(|_| not_found())?;
    let metadata = file.metadata().await.map_err(|_| not_found())?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let stream = ReaderStream::new(file);

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CONTENT_LENGTH, metadata.len())
        .body(Body::from_stream(stream))
        .map_err(|e| Error::Internal {
            operation: format!("build video response: {e}"),
        })
}
