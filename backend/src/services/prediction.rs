//! Gateway to the external delay-prediction model server.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use super::prediction_builder::build_prediction_request;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{FeatureVector, ModelVerdict, PredictionOutcome, TripRequest};

/// Message shown to users whenever the model server cannot answer.
pub const UNAVAILABLE_MESSAGE: &str = "Server error. Please try again later.";

/// Something that can score a feature vector.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> ServiceResult<ModelVerdict>;
}

/// `POST {base_url}/predict` over HTTP.
#[derive(Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, features: &FeatureVector) -> ServiceResult<ModelVerdict> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(features)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "prediction request failed");
                ServiceError::ServiceUnavailable(UNAVAILABLE_MESSAGE.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = %status, "prediction service returned an error");
            return Err(ServiceError::ServiceUnavailable(UNAVAILABLE_MESSAGE.to_string()));
        }

        response.json::<ModelVerdict>().await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "unreadable prediction response");
            ServiceError::ServiceUnavailable(UNAVAILABLE_MESSAGE.to_string())
        })
    }
}

/// Validates a trip, scores it remotely and attaches the route context.
#[derive(Clone)]
pub struct PredictionGateway {
    client: Arc<dyn PredictionClient>,
}

impl PredictionGateway {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self { client }
    }

    pub async fn predict(&self, trip: &TripRequest, today: NaiveDate) -> ServiceResult<PredictionOutcome> {
        let prepared = build_prediction_request(trip, today)?;
        let verdict = self.client.predict(&prepared.features).await?;

        info!(
            origin = %prepared.origin,
            destination = %prepared.destination,
            prediction = %verdict.prediction,
            probability = verdict.probability,
            "delay prediction completed"
        );

        Ok(PredictionOutcome::new(prepared, verdict))
    }
}
