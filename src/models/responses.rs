use serde::{Deserialize, Serialize};
use crate::models::domain::{FieldErrors, FlightOffer};
use crate::services::store::SearchStatus;

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFlightsResponse {
    pub search_id: String,
    pub status: SearchStatus,
    pub flights: Vec<FlightOffer>,
    pub total_results: usize,
}

/// Latest stored search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsResponse {
    pub status: SearchStatus,
    pub flights: Vec<FlightOffer>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}
