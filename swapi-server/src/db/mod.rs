//! Database layer - connection pool, schema and repositories
//!
//! A single [`Database`] handle is created at startup and cloned into the
//! router state. Repositories are cheap borrowed views over its pool.
//!
//! - Uniqueness is enforced by constraints; violations map to `DbError::Conflict`
//! - Favorites lists use JOINs, not a lookup per link row
//! - Every write is a single statement, no explicit transactions

pub mod pool;
pub mod repos;
pub mod schema;

use sqlx::AnyPool;

pub use pool::{create_pool_with_options, Backend, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
pub use repos::{DbError, FavoriteRepo, PeopleRepo, PlanetRepo, UserRepo};

/// Data-access handle shared by all handlers
#[derive(Clone, Debug)]
pub struct Database {
    pool: AnyPool,
    backend: Backend,
}

impl Database {
    /// Connect with the default pool size.
    pub async fn connect(database_url: &str) -> Result<Self, DbError> {
        Self::connect_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Connect with an explicit pool size.
    pub async fn connect_with_options(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, DbError> {
        let backend = Backend::from_url(database_url)?;
        let pool = create_pool_with_options(database_url, max_connections).await?;
        tracing::info!(backend = backend.as_str(), "Connected to database");
        Ok(Self { pool, backend })
    }

    /// Create missing tables and indexes.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        schema::run(&self.pool, self.backend).await
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn people(&self) -> PeopleRepo<'_> {
        PeopleRepo::new(&self.pool)
    }

    pub fn planets(&self) -> PlanetRepo<'_> {
        PlanetRepo::new(&self.pool)
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn favorites(&self) -> FavoriteRepo<'_> {
        FavoriteRepo::new(&self.pool)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
