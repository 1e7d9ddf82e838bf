//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use infra_db::DatabaseError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg.clone())
            }
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match &err {
            DatabaseError::NotFound(msg) => ApiError::NotFound(msg.clone()),
            DatabaseError::DuplicateEntry(msg) => ApiError::Conflict(msg.clone()),
            DatabaseError::ConstraintViolation(msg)
            | DatabaseError::ForeignKeyViolation(msg) => ApiError::Validation(msg.clone()),
            _ => ApiError::Database(err.to_string()),
        }
    }
}

impl From<domain_identity::IdentityError> for ApiError {
    fn from(err: domain_identity::IdentityError) -> Self {
        use domain_identity::IdentityError;
        match &err {
            IdentityError::InvalidCredentials => ApiError::Unauthorized,
            IdentityError::CompanyInactive(_) => ApiError::Forbidden(err.to_string()),
            IdentityError::Password(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_mapping() {
        let err: ApiError = DatabaseError::NotFound("Product".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = DatabaseError::DuplicateEntry("sku".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));

        let err: ApiError = DatabaseError::PoolExhausted.into();
        assert!(matches!(err, ApiError::Database(_)));
    }
}
