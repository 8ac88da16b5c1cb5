//! User repository

use sqlx::AnyPool;

use super::DbError;
use crate::models::{NewUser, User, UserSummary};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// All users as `{id, user_name}`.
    pub async fn list(&self) -> Result<Vec<UserSummary>, DbError> {
        let users = sqlx::query_as("SELECT id, user_name FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as(
            "SELECT id, user_name, email, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a user. Duplicate `user_name` or `email` returns `DbError::Conflict`.
    pub async fn create(&self, new: NewUser) -> Result<User, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO users (user_name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, user_name, email, password
            "#,
        )
        .bind(new.user_name)
        .bind(new.email)
        .bind(new.password)
        .fetch_one(self.pool)
        .await
        .map_err(DbError::on_write("user"))
    }
}
