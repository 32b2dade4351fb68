use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed acknowledgement returned by the recording lifecycle endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
