//! User record as stored in the `usuario` table

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// A stored user. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    #[sqlx(rename = "nome")]
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Usuario {:?}>", self.name)
    }
}
