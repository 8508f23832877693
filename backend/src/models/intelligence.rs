//! Result shapes of a port-intelligence query.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared `queryType` of a port-intelligence answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    SinglePort,
    PortListing,
    Comparison,
    /// Synthesized locally when the model output could not be parsed
    GeneralInfo,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::SinglePort => "single_port",
            QueryType::PortListing => "port_listing",
            QueryType::Comparison => "comparison",
            QueryType::GeneralInfo => "general_info",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single_port" => Some(QueryType::SinglePort),
            "port_listing" => Some(QueryType::PortListing),
            "comparison" => Some(QueryType::Comparison),
            "general_info" => Some(QueryType::GeneralInfo),
            _ => None,
        }
    }
}

/// Parsed answer to a port-intelligence query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortIntelligenceReport {
    pub query_type: QueryType,
    /// The answer object exactly as the model produced it (or the fallback)
    pub data: Value,
    /// Name of the parse step that produced `data`
    pub strategy: &'static str,
    /// True when `data` is the locally synthesized fallback
    pub degraded: bool,
}
