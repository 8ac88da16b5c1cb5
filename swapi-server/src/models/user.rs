//! Users
//!
//! Only `id` and `user_name` leave the server. `User` has no `Serialize`.

use serde::Serialize;
use sqlx::FromRow;

/// Row of the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub user_name: String,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
}
