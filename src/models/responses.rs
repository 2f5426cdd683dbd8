use crate::models::domain::EventMatch;
use serde::{Deserialize, Serialize};

/// Response for the rank suggestions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RankSuggestionsResponse {
    pub suggestions: Vec<EventMatch>,
    pub page: u32,
    pub limit: u32,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
