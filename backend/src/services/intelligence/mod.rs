//! Port-intelligence gateway.
//!
//! A free-text query is wrapped in a fixed prompt, sent to a generative-AI
//! endpoint, and the free-text answer is parsed on a best-effort basis into
//! one of the declared JSON shapes. Nothing is retried or cached.

pub mod client;
pub mod parser;
pub mod prompt;

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::models::PortIntelligenceReport;

pub use client::{GeminiClient, GenerativeClient};
pub use parser::{
    classify, default_strategies, fallback_report, parse_answer, EmbeddedObject, FencedJson,
    ParseStrategy, ParsedAnswer,
};
pub use prompt::build_prompt;

/// Sends port queries to a generative model and parses the answers.
#[derive(Clone)]
pub struct PortIntelligenceGateway {
    client: Arc<dyn GenerativeClient>,
    strategies: Arc<Vec<Box<dyn ParseStrategy>>>,
}

impl PortIntelligenceGateway {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self::with_strategies(client, default_strategies())
    }

    pub fn with_strategies(
        client: Arc<dyn GenerativeClient>,
        strategies: Vec<Box<dyn ParseStrategy>>,
    ) -> Self {
        Self {
            client,
            strategies: Arc::new(strategies),
        }
    }

    pub async fn query(&self, query: &str) -> ServiceResult<PortIntelligenceReport> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::invalid_input("Query must not be empty."));
        }

        let raw = self.client.generate(&build_prompt(query)).await?;

        match parse_answer(&self.strategies, query, &raw) {
            ParsedAnswer::Refusal(message) => {
                info!(query = %query, reason = %message, "model declined port query");
                Err(ServiceError::Rejected(message))
            }
            ParsedAnswer::Report(report) => {
                if report.degraded {
                    warn!(query = %query, "model answer was not structured JSON; using fallback");
                } else {
                    info!(
                        query = %query,
                        query_type = report.query_type.as_str(),
                        strategy = report.strategy,
                        "port query answered"
                    );
                }
                Ok(report)
            }
        }
    }
}
