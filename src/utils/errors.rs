//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("QR error: {0}")]
    Qr(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    /// Código de estado HTTP asociado al error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Mail(_) => StatusCode::BAD_GATEWAY,
            AppError::Qr(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error, message, code) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    "Database Error".to_string(),
                    "An error occurred while accessing the database".to_string(),
                    "DB_ERROR",
                )
            }
            AppError::Validation(msg) => {
                ("Validation Error".to_string(), msg.clone(), "VALIDATION_ERROR")
            }
            AppError::Unauthorized(msg) => {
                ("Unauthorized".to_string(), msg.clone(), "UNAUTHORIZED")
            }
            AppError::Forbidden(msg) => ("Forbidden".to_string(), msg.clone(), "FORBIDDEN"),
            AppError::NotFound(msg) => ("Not Found".to_string(), msg.clone(), "NOT_FOUND"),
            AppError::Conflict(msg) => ("Conflict".to_string(), msg.clone(), "CONFLICT"),
            AppError::BadRequest(msg) => ("Bad Request".to_string(), msg.clone(), "BAD_REQUEST"),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred".to_string(),
                    "INTERNAL_ERROR",
                )
            }
            AppError::Jwt(msg) => ("JWT Error".to_string(), msg.clone(), "JWT_ERROR"),
            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                (
                    "Hash Error".to_string(),
                    "An error occurred while processing credentials".to_string(),
                    "HASH_ERROR",
                )
            }
            AppError::Mail(msg) => {
                tracing::error!("Mail error: {}", msg);
                (
                    "Mail Error".to_string(),
                    "An error occurred while sending the email".to_string(),
                    "MAIL_ERROR",
                )
            }
            AppError::Qr(msg) => {
                tracing::error!("QR error: {}", msg);
                (
                    "QR Error".to_string(),
                    "An error occurred while generating the QR code".to_string(),
                    "QR_ERROR",
                )
            }
        };

        let body = ErrorResponse {
            error,
            message,
            code: Some(code.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Jwt("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_error_into_response() {
        let response = AppError::BadRequest("acción inválida".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
