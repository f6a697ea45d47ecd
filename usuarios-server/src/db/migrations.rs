//! Schema bootstrap for the user table

use sqlx::SqlitePool;

/// Create the `usuario` table if it does not exist yet.
///
/// Column names and sizes match databases written by earlier versions of
/// the app, so an existing `usuarios.db` opens as-is.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Ensuring usuario table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuario (
            id INTEGER NOT NULL PRIMARY KEY,
            nome VARCHAR(80) NOT NULL,
            email VARCHAR(120) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn run_is_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();
        run(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuario")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn rejects_null_name() {
        let pool = create_memory_pool().await.unwrap();
        run(&pool).await.unwrap();

        let result = sqlx::query("INSERT INTO usuario (nome, email) VALUES (NULL, 'a@x.com')")
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }
}
