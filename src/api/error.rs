use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use super::dto::{ChatResponse, ErrorBody};
use crate::core::responder::APOLOGY_MESSAGE;
use crate::utils::error::ChatError;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request. 'message' field is required.";

/// API-layer error type
#[derive(Debug)]
pub enum ApiError {
    /// 400 - missing or malformed request body
    BadRequest(String),

    /// 404 - no such route
    NotFound,

    /// 405 - route exists, method does not
    MethodNotAllowed,

    /// 500 - listing store failed; the body still carries a chat reply
    StoreUnavailable,

    /// 500 - anything else
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Not found".into(),
                }),
            )
                .into_response(),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorBody {
                    error: "Method not allowed".into(),
                }),
            )
                .into_response(),
            ApiError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    response: APOLOGY_MESSAGE.into(),
                }),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            e if e.is_store_failure() => ApiError::StoreUnavailable,
            ChatError::ValidationError { message } => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Panic hook for `CatchPanicLayer`: answers like any other internal error.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
