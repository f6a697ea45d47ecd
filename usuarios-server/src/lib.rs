//! usuarios-server: HTTP server for user records
//!
//! Serves HTML pages to create, list, edit and delete users stored in a
//! single SQLite table. The listing page also shows the name
//! transformations from `usuarios-core`.

pub mod db;
pub mod http;
pub mod models;
pub mod templates;

pub use http::{run_server, ServerConfig, ServerError};
