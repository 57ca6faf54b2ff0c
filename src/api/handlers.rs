use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use super::dto::*;
use super::error::{ApiError, INVALID_REQUEST_MESSAGE};
use super::state::AppState;
use crate::utils::error::ChatError;

pub const WELCOME_MESSAGE: &str = "Welcome to the Car Recommendation Chatbot API";

/// GET / - Welcome banner
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// POST /chat - Recommend up to `max_results` cars for a free-text message
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) => message,
        Ok(_) => return Err(invalid_request()),
        Err(rejection) => {
            tracing::debug!("rejected chat body: {}", rejection.body_text());
            return Err(invalid_request());
        }
    };

    tracing::info!(chars = message.chars().count(), "chat request");

    let response = state.recommender.respond(&message).await?;

    Ok(Json(ChatResponse { response }))
}

fn invalid_request() -> ApiError {
    ChatError::ValidationError {
        message: INVALID_REQUEST_MESSAGE.into(),
    }
    .into()
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known routes hit with the wrong method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
