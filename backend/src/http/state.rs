//! Application state for the HTTP server.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::db::{LocalRepository, ReviewRepository};
use crate::error::ServiceResult;
use crate::services::{
    build_http_client, GNewsClient, GeminiClient, GenerativeClient, HttpPredictionClient,
    NewsProxy, NewsUpstream, PortIntelligenceGateway, PredictionClient, PredictionGateway,
    ReviewBoard,
};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub news: NewsProxy,
    pub prediction: PredictionGateway,
    pub intelligence: PortIntelligenceGateway,
    pub reviews: ReviewBoard,
}

impl AppState {
    /// Assemble state from already-built upstream clients.
    pub fn new(
        news_upstream: Arc<dyn NewsUpstream>,
        news_api_key: Option<String>,
        prediction_client: Arc<dyn PredictionClient>,
        generative_client: Arc<dyn GenerativeClient>,
        repository: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            news: NewsProxy::new(news_upstream, news_api_key),
            prediction: PredictionGateway::new(prediction_client),
            intelligence: PortIntelligenceGateway::new(generative_client),
            reviews: ReviewBoard::new(repository),
        }
    }

    /// Real upstream clients built from `config`, with an in-memory review store.
    pub fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        let http = build_http_client(config.http.timeout())?;

        let state = Self::new(
            Arc::new(GNewsClient::new(http.clone(), &config.news)),
            config.news.api_key.clone(),
            Arc::new(HttpPredictionClient::new(http.clone(), &config.prediction.base_url)),
            Arc::new(GeminiClient::new(http, &config.intelligence)),
            Arc::new(LocalRepository::new()),
        );

        if !state.news.is_configured() {
            warn!("GNEWS_API_KEY not set; /api/news will answer with a configuration error");
        }
        if config.intelligence.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            warn!("GOOGLE_AI_API_KEY not set; /api/port-intelligence will fail");
        }
        info!(prediction_url = %config.prediction.base_url, "application state ready");

        Ok(state)
    }
}
