//! HTTP request handlers for all endpoints.
//!
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Business logic execution via the [`crate::storage::MediaStore`]
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`recordings`]: Recording lifecycle acknowledgements and session cleanup
//! - [`videos`]: Recording upload and retrieval
//! - [`static_assets`]: Frontend asset serving and the landing page
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which converts to the appropriate
//! HTTP status code and a `{"error": "<text>"}` JSON body. No handler fault
//! propagates as an unhandled crash.

pub mod recordings;
pub mod static_assets;
pub mod videos;
