// app/src/errors.rs

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront::StorefrontError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error(transparent)]
  Storefront(#[from] StorefrontError),
}

impl AppError {
  pub fn unauthorized(message: impl Into<String>) -> Self {
    AppError::Storefront(StorefrontError::Unauthorized(message.into()))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Storefront(StorefrontError::NotFound(_)) => StatusCode::NOT_FOUND,
      AppError::Storefront(StorefrontError::Conflict(_)) => StatusCode::CONFLICT,
      AppError::Storefront(StorefrontError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
      AppError::Storefront(StorefrontError::Validation(_)) => StatusCode::BAD_REQUEST,
      AppError::Storefront(StorefrontError::Sqlx(_))
      | AppError::Storefront(StorefrontError::Internal(_))
      | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with error");
    }

    // Internal details stay in the log.
    let detail = if status.is_server_error() {
      "An internal error occurred".to_string()
    } else {
      self.to_string()
    };

    let mut response = HttpResponse::build(status);
    if status == StatusCode::UNAUTHORIZED {
      response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
    }
    response.json(json!({ "detail": detail }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
