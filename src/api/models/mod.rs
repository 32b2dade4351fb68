//! Request/response data structures for API communication.

pub mod recordings;
pub mod videos;
