//! # recbox: Media Intake Service
//!
//! `recbox` is a small web backend that lets a browser client record video,
//! upload the captured file, and retrieve it later. The server side is a
//! handful of stateless HTTP endpoints wrapping filesystem operations: session
//! cleanup, single-file upload under a generated name, and file retrieval.
//!
//! ## Overview
//!
//! The browser owns the actual media capture. The server's contract is the
//! sequence the recorder UI drives: `GET /start` clears the storage directory
//! for a fresh session, the client records locally, `POST /save` persists the
//! captured file under a generated `<uuid>.webm` name, and
//! `GET /videos/{filename}` streams it back. The remaining lifecycle endpoints
//! (`/pause`, `/resume`, `/stop`, `/discard`) are pure acknowledgements kept
//! for protocol symmetry with the client - the server neither enforces nor
//! tracks any ordering, and every endpoint is independently callable.
//!
//! Persisted state is a single flat directory of recordings; there is no
//! database, no user model, and no metadata beyond the filesystem entries
//! themselves.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum). The
//! [`api`] module holds the route handlers and response models, [`storage`]
//! wraps all filesystem access behind [`storage::MediaStore`], and [`config`]
//! loads layered configuration (YAML file plus `RECBOX_` environment
//! overrides). The recorder frontend is embedded into the binary with
//! `rust-embed` and served from `/` and `/static/*`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use recbox::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = recbox::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     recbox::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
mod openapi;
mod static_assets;
pub mod storage;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use bon::Builder;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api::handlers::{recordings, static_assets as asset_handlers, videos};
pub use crate::config::Config;
use crate::errors::Error;
use crate::openapi::ApiDoc;
use crate::storage::MediaStore;

/// Application state shared across all request handlers.
///
/// Holds the loaded configuration and the storage handle. Both are cheap to
/// clone, so the state is cloned into each handler invocation.
#[derive(Clone, Builder)]
pub struct AppState {
    pub config: Config,
    pub store: MediaStore,
}

/// Fallback for any unmatched route
async fn page_not_found() -> Error {
    Error::NotFound {
        message: "Page not found".to_string(),
    }
}

/// Build the application router with all endpoints and middleware.
///
/// This constructs the complete Axum router with:
/// - The recorder landing page and embedded static assets
/// - Recording lifecycle acknowledgement endpoints
/// - Upload (with a per-route body limit) and retrieval endpoints
/// - Interactive API docs at `/docs`
/// - A JSON 404 fallback, permissive CORS, and request tracing
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    // The body cap applies to the upload route only; everything else keeps
    // axum's default limit.
    let upload_limit = state.config.storage.max_upload_bytes as usize;

    let api_router = Router::new()
        .route("/", get(asset_handlers::index))
        .route("/static/{*path}", get(asset_handlers::serve_static_asset))
        .route("/start", get(recordings::start_recording))
        .route("/pause", get(recordings::pause_recording))
        .route("/resume", get(recordings::resume_recording))
        .route("/stop", get(recordings::stop_recording).post(recordings::stop_recording))
        .route("/discard", get(recordings::discard_recording))
        .route("/save", post(videos::save_recording).layer(DefaultBodyLimit::max(upload_limit)))
        .route("/videos/{filename}", get(videos::get_video))
        .with_state(state);

    Router::new()
        .merge(api_router)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .fallback(page_not_found)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns the router and configuration.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] validates the storage directory exists
///    (creating it if missing) and builds the router
/// 2. **Serve**: [`Application::serve`] binds a TCP listener and handles
///    requests until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with the storage directory ready
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = MediaStore::new(&config.storage);

        store.ensure_dir().await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to create storage directory {}: {}",
                store.root().display(),
                e
            )
        })?;
        info!(dir = %store.root().display(), "Storage directory ready");

        let state = AppState::builder().config(config.clone()).store(store).build();
        let router = build_router(state);

        Ok(Self { router, config })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application until the shutdown future resolves
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Media intake service listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::Value;
    use tempfile::TempDir;

    #[test_log::test(tokio::test)]
    async fn test_unmatched_route_returns_json_404() {
        let dir = TempDir::new().unwrap();
        let server = create_test_app(dir.path()).await;

        let response = server.get("/no/such/route").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json: Value = response.json();
        assert_eq!(json["error"], "Page not found");
    }

    #[test_log::test(tokio::test)]
    async fn test_application_creates_storage_directory() {
        let dir = TempDir::new().unwrap();
        let store_dir = dir.path().join("fresh").join("recordings");
        assert!(!store_dir.exists());

        let _server = create_test_app(&store_dir).await;

        assert!(store_dir.is_dir());
    }

    #[test_log::test(tokio::test)]
    async fn test_api_docs_are_served() {
        let dir = TempDir::new().unwrap();
        let server = create_test_app(dir.path()).await;

        let response = server.get("/docs").await;

        response.assert_status(StatusCode::OK);
    }
}
