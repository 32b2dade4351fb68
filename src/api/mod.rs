//! API layer for HTTP request handling and data models.
//!
//! This module contains the HTTP surface of the media intake service,
//! organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! - **Recording lifecycle** (`/start`, `/pause`, `/resume`, `/stop`, `/discard`):
//!   acknowledgement endpoints driven by the browser recorder UI
//! - **Videos** (`/save`, `/videos/{filename}`): upload and retrieval of
//!   stored recordings
//! - **Static assets** (`/`, `/static/*`): the embedded recorder frontend
//!
//! # OpenAPI Documentation
//!
//! Endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod handlers;
pub mod models;
