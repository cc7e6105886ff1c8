//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database error: {0}")]
    Orm(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(String),
}

impl AppError {
    /// Not-found error for a book id, with the canonical message.
    pub fn book_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Book with ID {} not found", id))
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, status_text, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "BAD REQUEST", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "ERROR", e.to_string())
            }
            AppError::Orm(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "ERROR", e.to_string())
            }
            AppError::Pool(msg) => {
                tracing::error!("Pool error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "ERROR", msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            status: status_text.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        let err = AppError::book_not_found(999999);

        assert_eq!(err.to_string(), "Not found: Book with ID 999999 not found");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::book_not_found(7).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::Validation("bad id".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn pool_error_maps_to_500() {
        let response = AppError::Pool("connection refused".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn orm_error_maps_to_500() {
        let response = AppError::from(diesel::result::Error::BrokenTransactionManager)
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
