//! swapi-server: people, planets and per-user favorites over HTTP
//!
//! - [`db`]: connection pool, schema and one repository per table
//! - [`http`]: axum router, handlers and error mapping
//! - [`models`]: row and request body types

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
