//! Domain models
//!
//! `User` is the persisted record. `UserForm` is the body posted by the
//! create and edit pages, checked for required fields before any handler
//! sees it.

pub mod form;
pub mod user;
pub mod validation;

pub use form::{RawUserForm, UserForm};
pub use user::User;
pub use validation::ValidationError;
