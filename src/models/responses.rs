use serde::{Deserialize, Serialize};

use crate::models::domain::{Coordinates, ScoredVenue};

/// Pagination metadata for a result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: usize,
    pub has_more: bool,
    pub limit: u32,
}

/// Echo of the resolved query, so clients see what was actually searched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho {
    pub envie: String,
    pub ville: Option<String>,
    pub rayon: f64,
    pub keywords: Vec<String>,
    pub coordinates: Coordinates,
}

/// Response for the venue search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<ScoredVenue>,
    pub pagination: Pagination,
    pub filter: String,
    pub query: QueryEcho,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
