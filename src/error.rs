//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Public message for any request that could not obtain a store connection.
pub const CONNECTION_FAILED: &str = "Database connection failed";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
    #[error("price table: {0}")]
    PriceTable(String),
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("duplicate: {0}")]
    Duplicate(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{message}: {detail}")]
    Internal { message: &'static str, detail: String },
}

impl AppError {
    /// Wrap a data-access failure; `message` is what the client sees.
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Database { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Duplicate(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) | AppError::Database { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message returned to the caller. Store errors never appear here.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(m)
            | AppError::Duplicate(m)
            | AppError::Unauthorized(m)
            | AppError::NotFound(m) => m.clone(),
            AppError::Unavailable(_) => CONNECTION_FAILED.to_string(),
            AppError::Database { message, .. } | AppError::Internal { message, .. } => message.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = MessageBody {
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_is_400_with_message() {
        let (status, body) = body_json(AppError::Validation("All fields are required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "All fields are required" }));
    }

    #[tokio::test]
    async fn duplicate_is_400() {
        let (status, body) = body_json(AppError::Duplicate("Email already exists".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email already exists");
    }

    #[tokio::test]
    async fn unauthorized_and_not_found() {
        assert_eq!(AppError::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_hides_source() {
        let err = AppError::Database {
            message: "Signup failed",
            source: sqlx::Error::Protocol("relation \"users\" does not exist".into()),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "message": "Signup failed" }));
    }

    #[tokio::test]
    async fn unavailable_uses_connection_message() {
        let (status, body) = body_json(AppError::Unavailable(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], CONNECTION_FAILED);
    }
}
