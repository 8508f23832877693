//! Data Transfer Objects for HTTP requests and responses.
//!
//! Domain types that already serialize to the wire shape (trip requests,
//! prediction outcomes, reviews) are used directly; only envelope types live
//! here.

use serde::{Deserialize, Serialize};

use crate::models::{CargoRecord, PortRecord};

// =============================================================================
// Service info
// =============================================================================

/// Response for GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
    pub status: String,
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// RFC 3339 UTC timestamp
    pub timestamp: String,
}

// =============================================================================
// Reference tables
// =============================================================================

/// One port with the code the model knows it by.
#[derive(Debug, Clone, Serialize)]
pub struct PortDto {
    pub code: u32,
    #[serde(flatten)]
    pub port: PortRecord,
}

/// Response for GET /api/ports
#[derive(Debug, Clone, Serialize)]
pub struct PortListResponse {
    pub version: u32,
    pub ports: Vec<PortDto>,
}

/// Response for GET /api/cargo-types
#[derive(Debug, Clone, Serialize)]
pub struct CargoListResponse {
    pub version: u32,
    #[serde(rename = "cargoTypes")]
    pub cargo_types: Vec<CargoRecord>,
}

// =============================================================================
// Requests
// =============================================================================

/// Body of POST /api/port-intelligence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortQueryRequest {
    pub query: String,
}

/// Body of POST /api/reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
}
