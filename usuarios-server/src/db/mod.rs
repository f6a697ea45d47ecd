//! Database layer - SQLite pool, schema bootstrap and repositories
//!
//! - Pool handle is passed explicitly; there is no global connection
//! - Repositories borrow the pool for the duration of one request
//! - Missing rows surface as `DbError::NotFound`, never as `None`

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
