//! OpenAPI documentation configuration.
//!
//! The document is served interactively at `/docs` via `utoipa-scalar`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "recbox",
        description = "Media intake service: upload and retrieval backend for browser-recorded video"
    ),
    paths(
        crate::api::handlers::recordings::start_recording,
        crate::api::handlers::recordings::pause_recording,
        crate::api::handlers::recordings::resume_recording,
        crate::api::handlers::recordings::stop_recording,
        crate::api::handlers::recordings::discard_recording,
        crate::api::handlers::videos::save_recording,
        crate::api::handlers::videos::get_video,
    ),
    components(schemas(
        crate::api::models::recordings::MessageResponse,
        crate::api::models::videos::UploadResponse,
    )),
    tags(
        (name = "recordings", description = "Recording lifecycle acknowledgements"),
        (name = "videos", description = "Upload and retrieval of stored recordings")
    )
)]
pub struct ApiDoc;
