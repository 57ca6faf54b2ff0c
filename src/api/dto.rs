use serde::{Deserialize, Serialize};

/// POST /chat request. `message` is optional here so that a missing field
/// is reported as a 400 by the handler rather than a serde rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// POST /chat response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// GET / response
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
