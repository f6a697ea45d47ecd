//! usuarios-core: pure transformations over user names
//!
//! Nothing in this crate touches the store or performs I/O. The server
//! crate feeds the names it reads into [`NameSummary::from_names`] and
//! hands the result to the listing template.

pub mod combinators;
pub mod summary;
pub mod text;

pub use combinators::{
    add, compose, filter_by, map_each, partial_apply, pipe, reduce, sort_by_key, zip_pairs,
};
pub use summary::NameSummary;
pub use text::{initials, length, lowercase, reverse, title_case, uppercase};
