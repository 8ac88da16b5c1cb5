//! Repository implementations for database access
//!
//! One repository per table, one method per operation:
//! - Point lookups return `Option`, absence is not an error here
//! - Writes are single statements with `RETURNING`
//! - Unique violations become `DbError::Conflict`

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

pub use favorites::FavoriteRepo;
pub use people::PeopleRepo;
pub use planets::PlanetRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} already exists")]
    Conflict { resource: &'static str },

    #[error("unsupported database url scheme '{0}'")]
    UnsupportedBackend(String),
}

impl DbError {
    /// Classify an error raised by an INSERT or UPDATE.
    pub(crate) fn on_write(resource: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return Self::Conflict { resource };
                }
            }
            Self::Sqlx(err)
        }
    }
}
