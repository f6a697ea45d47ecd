//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing and timeout
//! - Graceful shutdown
//! - HTML pages, plain-text error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, prepare_database, run_server, AppState, ServerConfig, ServerError};
