//! Database connection pool management
//!
//! Uses the sqlx `Any` driver so the same repositories run against
//! PostgreSQL in deployment and a SQLite file locally.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use super::DbError;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Local file-backed store used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

/// SQL dialect behind a connection string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Detect the backend from the URL scheme.
    ///
    /// # Example
    /// ```
    /// use swapi_server::db::Backend;
    ///
    /// assert_eq!(Backend::from_url("postgres://localhost/swapi").unwrap(), Backend::Postgres);
    /// assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
    /// assert!(Backend::from_url("mysql://localhost/swapi").is_err());
    /// ```
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(DbError::UnsupportedBackend(scheme.to_owned()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
        }
    }
}

/// Create a connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// An in-memory SQLite URL (`sqlite::memory:`) opens a fresh database per
/// connection, so it only behaves as one store with `max_connections = 1`.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();
    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_backends() {
        assert_eq!(Backend::from_url("postgresql://u@h/db").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url(DEFAULT_DATABASE_URL).unwrap(), Backend::Sqlite);
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = Backend::from_url("mysql://localhost/db").unwrap_err();
        assert!(matches!(err, DbError::UnsupportedBackend(s) if s == "mysql"));
    }

    #[tokio::test]
    async fn sqlite_pool_acquires_connection() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn postgres_pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1::bigint")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
