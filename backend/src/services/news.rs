//! Stateless relay for the news search API.
//!
//! The server holds the API key so browsers never see it. Every call goes
//! upstream; nothing is cached and nothing is retried.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::{non_blank, NewsSettings};
use crate::error::{ServiceError, ServiceResult};

/// Error text returned when the key is not configured.
pub const MISSING_KEY_MESSAGE: &str = "GNEWS_API_KEY not configured";

/// Upstream news search.
#[async_trait]
pub trait NewsUpstream: Send + Sync {
    /// Run the search with `api_key` and return the upstream JSON body.
    async fn search(&self, api_key: &str) -> ServiceResult<Value>;
}

/// GNews `GET /search` client.
#[derive(Clone)]
pub struct GNewsClient {
    client: reqwest::Client,
    base_url: String,
    query: String,
    lang: String,
}

impl GNewsClient {
    pub fn new(client: reqwest::Client, settings: &NewsSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            query: settings.query.clone(),
            lang: settings.lang.clone(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl NewsUpstream for GNewsClient {
    async fn search(&self, api_key: &str) -> ServiceResult<Value> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("q", self.query.as_str()),
                ("lang", self.lang.as_str()),
                ("apikey", api_key),
            ])
            .send()
            .await
            .map_err(|e| ServiceError::upstream(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::upstream_status(
                status.as_u16(),
                format!("Request failed with status code {}", status.as_u16()),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ServiceError::upstream(e.without_url().to_string()))
    }
}

/// News proxy: injects the server-side key and relays the payload verbatim.
#[derive(Clone)]
pub struct NewsProxy {
    upstream: Arc<dyn NewsUpstream>,
    api_key: Option<String>,
}

impl NewsProxy {
    pub fn new(upstream: Arc<dyn NewsUpstream>, api_key: Option<String>) -> Self {
        Self {
            upstream,
            api_key: non_blank(api_key),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn fetch(&self) -> ServiceResult<Value> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("news requested but GNEWS_API_KEY is not configured");
            return Err(ServiceError::configuration(MISSING_KEY_MESSAGE));
        };

        match self.upstream.search(api_key).await {
            Ok(body) => {
                debug!("news payload relayed");
                Ok(body)
            }
            Err(e) => {
                error!(status = ?e.status(), error = %e, "Error fetching news");
                Err(e)
            }
        }
    }
}
