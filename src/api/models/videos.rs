use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a successful recording upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Generated `<uuid>.webm` name the recording was stored under
    pub filename: String,
}
