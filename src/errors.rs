use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyOrder
            | DomainError::NonPositiveQuantity(_)
            | DomainError::InvalidDateRange { .. } => AppError::Validation(e.to_string()),
            DomainError::ProductNotFound(_) | DomainError::OrderNotFound => {
                AppError::NotFound(e.to_string())
            }
            DomainError::InsufficientStock { .. } => AppError::Conflict(e.to_string()),
            DomainError::Storage { .. } => AppError::Internal(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage detail stays in the logs; clients get a generic message.
        let body = match self {
            AppError::Internal(_) => serde_json::json!({ "error": "Internal server error" }),
            other => serde_json::json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
