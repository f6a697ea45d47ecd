//! User repository
//!
//! Plain CRUD over the `usuario` table. No transactions span more than
//! one statement; concurrent writers simply overwrite each other.

use sqlx::SqlitePool;

use crate::models::User;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn user_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "usuario",
            id: id.to_string(),
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the id the store assigned.
    pub async fn create(&self, name: &str, email: &str) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO usuario (nome, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// All users in store order (ascending id).
    pub async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, nome, email FROM usuario ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, nome, email FROM usuario WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::user_not_found(id))
    }

    /// Overwrite both fields of an existing user.
    pub async fn update(&self, id: i64, name: &str, email: &str) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE usuario SET nome = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM usuario WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuario")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
