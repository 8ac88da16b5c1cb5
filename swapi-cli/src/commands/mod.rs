//! Subcommand implementations

pub mod migrate;
pub mod serve;
pub mod user;

use anyhow::{Context, Result};
use clap::Args;
use swapi_server::db::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use swapi_server::Database;

/// Database connection options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (postgres:// or sqlite:)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect and make sure the tables exist.
    pub async fn open(&self) -> Result<Database> {
        let db = Database::connect_with_options(&self.database_url, self.max_connections)
            .await
            .context("Failed to connect to database")?;
        db.ensure_schema()
            .await
            .context("Failed to create database schema")?;
        Ok(db)
    }
}
