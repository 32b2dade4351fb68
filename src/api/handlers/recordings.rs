//! HTTP handlers for the recording lifecycle endpoints.
//!
//! The browser owns the actual recording; these endpoints exist as
//! acknowledgement hooks for its UI state. Only `start` has a server-side
//! effect: it clears the storage directory so at most the files from the
//! current session remain.

use axum::{Json, extract::State};
use tracing::{info, instrument};

use crate::AppState;
use crate::api::models::recordings::MessageResponse;
use crate::errors::{Error, Result};

#[utoipa::path(
    get,
    path = "/start",
    tag = "recordings",
    summary = "Start recording",
    description = "Clears the storage directory so at most the current session's files remain, \
                   then acknowledges. Idempotent; deletion of individual entries is best-effort.",
    responses(
        (status = 200, description = "Recording started", body = MessageResponse),
        (status = 500, description = "Storage directory could not be read")
    )
)]
#[instrument(skip_all)]
pub async fn start_recording(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let report = state.store.clear().await.map_err(|error| {
        tracing::error!(%error, "Failed to clear storage directory");
        Error::Internal {
            operation: "start recording".to_string(),
        }
    })?;

    info!(
        removed = report.removed,
        failed = report.failures.len(),
        "Cleared storage directory for new session"
    );

    Ok(Json(MessageResponse::new("Recording started successfully")))
}

#[utoipa::path(
    get,
    path = "/pause",
    tag = "recordings",
    summary = "Pause recording",
    description = "Acknowledgement only; no server-side state change.",
    responses((status = 200, description = "Recording paused", body = MessageResponse))
)]
pub async fn pause_recording() -> Json<MessageResponse> {
    Json(MessageResponse::new("Recording paused successfully"))
}

#[utoipa::path(
    get,
    path = "/resume",
    tag = "recordings",
    summary = "Resume recording",
    description = "Acknowledgement only; no server-side state change.",
    responses((status = 200, description = "Recording resumed", body = MessageResponse))
)]
pub async fn resume_recording() -> Json<MessageResponse> {
    Json(MessageResponse::new("Recording resumed successfully"))
}

#[utoipa::path(
    get,
    path = "/stop",
    tag = "recordings",
    summary = "Stop recording",
    description = "Acknowledgement only; accepts GET or POST.",
    responses((status = 200, description = "Recording stopped", body = MessageResponse))
)]
pub async fn stop_recording() -> Json<MessageResponse> {
    Json(MessageResponse::new("Video stopped successfully"))
}

#[utoipa::path(
    get,
    path = "/discard",
    tag = "recordings",
    summary = "Discard recording",
    description = "Acknowledgement only; no server-side state change.",
    responses((status = 200, description = "Recording discarded", body = MessageResponse))
)]
pub async fn discard_recording() -> Json<MessageResponse> {
    Json(MessageResponse::new("Video recording discarded successfully"))
}
