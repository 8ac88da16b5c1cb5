//! Table creation
//!
//! Tables are created on startup when missing. There is no versioned
//! migration history; the statements are idempotent.

use sqlx::AnyPool;

use super::{Backend, DbError};

impl Backend {
    /// Auto-incrementing 64-bit primary key column.
    fn id_column(self) -> &'static str {
        match self {
            Self::Postgres => "id BIGSERIAL PRIMARY KEY",
            Self::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

/// Build the CREATE TABLE statements for a backend, in dependency order.
pub fn table_statements(backend: Backend) -> Vec<String> {
    let id = backend.id_column();

    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                {id},
                user_name VARCHAR(120) NOT NULL UNIQUE,
                email VARCHAR(120) NOT NULL UNIQUE,
                password VARCHAR(80) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS people (
                {id},
                name VARCHAR(50) NOT NULL UNIQUE,
                height VARCHAR(20) NOT NULL,
                mass VARCHAR(50) NOT NULL,
                eye_color VARCHAR(50) NOT NULL,
                skin_color VARCHAR(50) NOT NULL,
                hair_color VARCHAR(50) NOT NULL,
                birth_year VARCHAR(50) NOT NULL,
                gender VARCHAR(50) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS planets (
                {id},
                planet_name VARCHAR(50) NOT NULL UNIQUE,
                rotation_period VARCHAR(20) NOT NULL,
                orbital_period VARCHAR(20) NOT NULL,
                diameter VARCHAR(20) NOT NULL,
                climate VARCHAR(20) NOT NULL,
                gravity VARCHAR(20) NOT NULL,
                terrain VARCHAR(20) NOT NULL,
                surface_water VARCHAR(20) NOT NULL,
                population VARCHAR(20) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorite_planets (
                {id},
                user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                planet_fav_id BIGINT NOT NULL REFERENCES planets(id) ON DELETE CASCADE
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorite_people (
                {id},
                user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                char_fav_id BIGINT NOT NULL REFERENCES people(id) ON DELETE CASCADE
            )
            "#
        ),
    ]
}

const INDEX_STATEMENTS: &[&str] = &[
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_favorite_planets_pair ON favorite_planets(user_id, planet_fav_id)",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_favorite_people_pair ON favorite_people(user_id, char_fav_id)",
];

/// Create all tables and indexes
pub async fn run(pool: &AnyPool, backend: Backend) -> Result<(), DbError> {
    tracing::info!(backend = backend.as_str(), "Ensuring schema...");

    for statement in table_statements(backend) {
        sqlx::query(&statement).execute(pool).await?;
    }

    for statement in INDEX_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn statements_use_backend_key_type() {
        let pg = table_statements(Backend::Postgres);
        let lite = table_statements(Backend::Sqlite);

        assert_eq!(pg.len(), 5);
        assert!(pg.iter().all(|s| s.contains("BIGSERIAL PRIMARY KEY")));
        assert!(lite.iter().all(|s| s.contains("INTEGER PRIMARY KEY AUTOINCREMENT")));
    }

    #[tokio::test]
    async fn schema_is_idempotent() {
        let db = Database::connect_with_options("sqlite::memory:", 1).await.unwrap();
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(
            names,
            ["favorite_people", "favorite_planets", "people", "planets", "users"]
        );
    }
}
