//! API error types with IntoResponse
//!
//! The message text of each variant is the response body, so handlers pick
//! the exact wording clients see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Entity absent (404)
    NotFound(&'static str),

    /// Duplicate unique field (400)
    Conflict(&'static str),

    /// Valid request with nothing to return (400)
    EmptyResult(&'static str),

    /// Body could not be read as JSON (400)
    BadRequest(String),

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    /// Map a write error, reporting unique violations as `Conflict(msg)`.
    pub fn conflict_as(msg: &'static str) -> impl FnOnce(DbError) -> Self {
        move |e| match e {
            DbError::Conflict { .. } => Self::Conflict(msg),
            other => Self::Database(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::EmptyResult(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::NotFound(msg) | Self::Conflict(msg) | Self::EmptyResult(msg) => json!({ "msg": msg }),
            Self::BadRequest(msg) => json!({ "msg": msg }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({ "msg": "an internal error occurred" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_msg() {
        let response = ApiError::NotFound("this character not exist :(").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"msg": "this character not exist :("}));
    }

    #[tokio::test]
    async fn empty_result_is_400() {
        let response = ApiError::EmptyResult("nothing here").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"msg": "an internal error occurred"}));
    }

    #[test]
    fn conflict_as_uses_given_message() {
        let err = ApiError::conflict_as("this planet already exist")(DbError::Conflict {
            resource: "planet",
        });
        assert!(matches!(err, ApiError::Conflict("this planet already exist")));

        let err = ApiError::conflict_as("unused")(DbError::Sqlx(sqlx::Error::RowNotFound));
        assert!(matches!(err, ApiError::Database(_)));
    }
}
