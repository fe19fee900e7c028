// shopcart/server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use shopcart::{CartError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Storage(#[from] StoreError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Message strings here are what API clients see in `{"error": ...}`.
impl From<CartError> for AppError {
  fn from(err: CartError) -> Self {
    match err {
      CartError::ProductNotFound { .. } => AppError::NotFound("Product not found".to_string()),
      CartError::ItemNotFound { .. } => AppError::NotFound("Item not found in cart".to_string()),
      CartError::QuantityOverflow { .. } => AppError::Validation("Quantity is out of range".to_string()),
      CartError::Store(source) => AppError::Storage(source),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    match self {
      AppError::Validation(m) => {
        tracing::warn!(application_error = %self, "Rejecting request");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Responding with not found");
        HttpResponse::NotFound().json(json!({"error": m}))
      }
      AppError::Config(m) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Storage(source) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Storage operation failed", "detail": source.to_string()}))
      }
      AppError::Internal(m) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
