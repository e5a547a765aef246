use sqlx::{
    Any, Pool,
    any::{AnyPoolOptions, install_default_drivers},
};
use tracing::info;

pub type ConnectionPool = Pool<Any>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Opens a pool for any URL scheme compiled into sqlx (`mysql://` in production).
    ///
    /// Rows pass through the `Any` driver, which has no decoder for MySQL
    /// `DECIMAL`: `products.price` must be `DOUBLE` (or `REAL` on SQLite).
    pub async fn new_pool(connection_string: &str) -> anyhow::Result<ConnectionPool> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        info!("🗄️ Database connection pool ready");

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn opens_pool_for_sqlite_url() {
        let pool = ConnectionManager::new_pool("sqlite::memory:")
            .await
            .expect("in-memory pool");

        let (one,): (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("select");

        assert_eq!(one, 1);
        pool.close().await;
    }

    #[tokio::test]
    async fn unknown_scheme_is_an_error() {
        let err = ConnectionManager::new_pool("nosuchdb://localhost/x")
            .await
            .unwrap_err();

        assert!(
            err.to_string()
                .starts_with("Failed to create database connection pool")
        );
    }
}
