//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the outside world: the
//! prediction model server, the news search API, the generative-AI endpoint
//! and the review repository. Each upstream is reached through a trait so
//! handlers and tests can swap the transport.

pub mod intelligence;
pub mod news;
pub mod prediction;
pub mod prediction_builder;
pub mod reviews;

use std::time::Duration;

use crate::error::{ServiceError, ServiceResult};

pub use intelligence::{GeminiClient, GenerativeClient, PortIntelligenceGateway};
pub use news::{GNewsClient, NewsProxy, NewsUpstream};
pub use prediction::{HttpPredictionClient, PredictionClient, PredictionGateway};
pub use prediction_builder::{build_prediction_request, estimate_transit_days};
pub use reviews::ReviewBoard;

/// Shared outbound HTTP client.
///
/// Without a timeout the client waits as long as the upstream does.
pub fn build_http_client(timeout: Option<Duration>) -> ServiceResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ServiceError::configuration(format!("Failed to build HTTP client: {}", e)))
}
