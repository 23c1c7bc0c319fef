use actix_web::error::{JsonPayloadError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use thiserror::Error;

use crate::services::gemini_service::GenerationError;

/// Everything a handler can surface to a client. Each variant renders as
/// `{"message": "..."}` with the status below.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid post ID")]
    InvalidPostId,
    #[error("Authentication required")]
    AuthRequired,
    #[error("User not found")]
    UserNotFound,
    #[error("Failed to generate content: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidPostId => StatusCode::BAD_REQUEST,
            ApiError::AuthRequired => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        } else {
            log::warn!("request rejected: {}", self);
        }

        HttpResponse::build(status).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

/// Hooked into `web::JsonConfig` so malformed or incomplete bodies come back
/// as 400 with serde's message instead of actix's plain-text rejection.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}
