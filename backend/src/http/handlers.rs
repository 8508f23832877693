//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::str::FromStr;

use super::dto::{
    BannerResponse, CargoListResponse, CreateReviewRequest, HealthResponse, PortDto,
    PortListResponse, PortQueryRequest,
};
use super::error::{ApiError, AppError};
use super::state::AppState;
use crate::error::ServiceError;
use crate::models::{
    Identity, PredictionOutcome, Review, ReviewId, TripRequest, CARGO_ENCODING_VERSION,
    CARGO_TABLE, PORT_ENCODING_VERSION, PORT_TABLE,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Paths listed by the banner.
pub const ENDPOINTS: [&str; 8] = [
    "/health",
    "/api/news",
    "/api/ports",
    "/api/cargo-types",
    "/api/predict",
    "/api/port-intelligence",
    "/api/reviews",
    "/api/reviews/{id}",
];

// =============================================================================
// Service info
// =============================================================================

/// GET /
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "SmartShip API is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        status: "healthy".to_string(),
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "smartship-api".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ApiError>) {
    (StatusCode::NOT_FOUND, Json(ApiError::new("Route not found")))
}

// =============================================================================
// News
// =============================================================================

/// GET /api/news
///
/// Relays the upstream search response unchanged.
pub async fn get_news(State(state): State<AppState>) -> HandlerResult<Value> {
    match state.news.fetch().await {
        Ok(body) => Ok(Json(body)),
        Err(e @ ServiceError::ConfigurationError(_)) => Err(e.into()),
        Err(e) => Err(AppError::summarized("Failed to fetch news", e)),
    }
}

// =============================================================================
// Reference tables
// =============================================================================

/// GET /api/ports
pub async fn list_ports() -> Json<PortListResponse> {
    let ports = PORT_TABLE
        .iter()
        .zip(0u32..)
        .map(|(port, code)| PortDto { code, port: *port })
        .collect();

    Json(PortListResponse {
        version: PORT_ENCODING_VERSION,
        ports,
    })
}

/// GET /api/cargo-types
pub async fn list_cargo_types() -> Json<CargoListResponse> {
    Json(CargoListResponse {
        version: CARGO_ENCODING_VERSION,
        cargo_types: CARGO_TABLE.to_vec(),
    })
}

// =============================================================================
// Prediction & intelligence
// =============================================================================

/// POST /api/predict
pub async fn predict_delay(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> HandlerResult<PredictionOutcome> {
    let Json(trip) = payload?;
    let today = Utc::now().date_naive();
    let outcome = state.prediction.predict(&trip, today).await?;
    Ok(Json(outcome))
}

/// POST /api/port-intelligence
///
/// Answers with the parsed JSON object (or the degraded fallback object).
pub async fn port_intelligence(
    State(state): State<AppState>,
    payload: Result<Json<PortQueryRequest>, JsonRejection>,
) -> HandlerResult<Value> {
    let Json(request) = payload?;
    let report = state.intelligence.query(&request.query).await?;
    Ok(Json(report.data))
}

// =============================================================================
// Reviews
// =============================================================================

/// GET /api/reviews
pub async fn list_reviews(State(state): State<AppState>) -> HandlerResult<Vec<Review>> {
    Ok(Json(state.reviews.list().await?))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    author: Identity,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let Json(request) = payload?;
    let review = state.reviews.submit(&author, &request.text).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    caller: Identity,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = ReviewId::from_str(&id)
        .map_err(|_| ServiceError::invalid_input(format!("Invalid review id: {}", id)))?;
    state.reviews.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
