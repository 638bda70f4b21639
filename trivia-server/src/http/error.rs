//! API error types with IntoResponse
//!
//! Every failure renders the same envelope:
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete client input (400)
    BadRequest { reason: String },

    /// Empty result set or missing entity (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Store failure or unexpected request shape (422, logged)
    Unprocessable { reason: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message; details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "Resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable { .. } => "Unprocessable Entity",
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "bad request"),
            Self::NotFound { resource, id } => tracing::debug!(resource, %id, "not found"),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::error!(%reason, "unprocessable request"),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        tracing::debug!(field = e.field(), "validation failed");
        Self::bad_request(e.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::unprocessable(other.to_string()),
        }
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
    async fn validation_error_is_400() {
        let err = ApiError::from(ValidationError::Empty { field: "question" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, json!({"success": false, "error": 400, "message": "bad request"}));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::not_found("question", 500).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Resource not found");
        assert_eq!(body["error"], 404);
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["message"], "method not allowed");
    }

    #[tokio::test]
    async fn store_errors_become_422() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError::from(DbError::Constraint {
            reason: "category 42 does not exist".into(),
        });
        let body = body_json(err.into_response()).await;
        assert_eq!(body["message"], "Unprocessable Entity");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn store_not_found_stays_404() {
        let err = ApiError::from(DbError::NotFound {
            resource: "question",
            id: "7".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
