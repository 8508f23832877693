//! Best-effort extraction of a structured answer from model output.
//!
//! Parsing is an ordered chain of [`ParseStrategy`] values. Each one either
//! produces a JSON object or passes; the first accepted object wins. When
//! every strategy passes, [`fallback_report`] builds a degraded
//! `general_info` answer, which cannot fail.
//!
//! A strategy's object is accepted only when it carries an `error` field or
//! matches one of the declared shapes (see [`classify`]). Well-formed JSON of
//! any other shape falls through like unparseable text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::models::{PortIntelligenceReport, QueryType};

/// Characters of raw model text kept in the fallback description.
pub const FALLBACK_DESCRIPTION_CHARS: usize = 500;

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*").expect("valid fence regex"));
static FENCE_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*").expect("valid fence regex"));
static OUTER_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object regex"));

/// One step of the parse chain.
pub trait ParseStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// A JSON object extracted from `raw`, or `None` to pass.
    fn extract(&self, raw: &str) -> Option<Map<String, Value>>;
}

/// Strip markdown code fences and parse what remains.
pub struct FencedJson;

impl ParseStrategy for FencedJson {
    fn name(&self) -> &'static str {
        "fenced_json"
    }

    fn extract(&self, raw: &str) -> Option<Map<String, Value>> {
        let cleaned = FENCE_OPEN.replace_all(raw.trim(), "");
        let cleaned = FENCE_ANY.replace_all(&cleaned, "");
        as_object(serde_json::from_str(cleaned.trim()).ok()?)
    }
}

/// Locate a `{...}` span inside surrounding prose.
///
/// The span starts at the first `{`. Candidate ends are tried from the last
/// `}` backwards, so stray braces after the object do not hide it.
pub struct EmbeddedObject;

impl ParseStrategy for EmbeddedObject {
    fn name(&self) -> &'static str {
        "embedded_object"
    }

    fn extract(&self, raw: &str) -> Option<Map<String, Value>> {
        let span = OUTER_OBJECT.find(raw)?.as_str();
        span.rmatch_indices('}').find_map(|(end, _)| {
            serde_json::from_str(&span[..=end]).ok().and_then(as_object)
        })
    }
}

fn as_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Default chain, in the order the strategies are tried.
pub fn default_strategies() -> Vec<Box<dyn ParseStrategy>> {
    vec![Box::new(FencedJson), Box::new(EmbeddedObject)]
}

/// Declared shape of `obj`, if it is one of the three the prompt asks for.
///
/// - `single_port` needs a string `name`
/// - `port_listing` needs a `portsList` array
/// - `comparison` needs a `comparisonData` array
pub fn classify(obj: &Map<String, Value>) -> Option<QueryType> {
    let query_type = QueryType::parse(obj.get("queryType")?.as_str()?)?;
    let valid = match query_type {
        QueryType::SinglePort => obj.get("name").is_some_and(Value::is_string),
        QueryType::PortListing => obj.get("portsList").is_some_and(Value::is_array),
        QueryType::Comparison => obj.get("comparisonData").is_some_and(Value::is_array),
        QueryType::GeneralInfo => false,
    };
    valid.then_some(query_type)
}

/// Outcome of running the chain over one model response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAnswer {
    /// The model answered with an `error` field instead of data.
    Refusal(String),
    Report(PortIntelligenceReport),
}

/// Run `strategies` in order over `raw`; never fails.
pub fn parse_answer(
    strategies: &[Box<dyn ParseStrategy>],
    query: &str,
    raw: &str,
) -> ParsedAnswer {
    for strategy in strategies {
        let Some(obj) = strategy.extract(raw) else {
            debug!(strategy = strategy.name(), "strategy found no JSON object");
            continue;
        };

        if let Some(message) = obj
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
        {
            return ParsedAnswer::Refusal(message.to_string());
        }

        match classify(&obj) {
            Some(query_type) => {
                return ParsedAnswer::Report(PortIntelligenceReport {
                    query_type,
                    data: Value::Object(obj),
                    strategy: strategy.name(),
                    degraded: false,
                })
            }
            None => debug!(strategy = strategy.name(), "JSON object has no recognised shape"),
        }
    }

    ParsedAnswer::Report(fallback_report(query, raw))
}

/// Degraded `general_info` answer carrying the raw text.
pub fn fallback_report(query: &str, raw: &str) -> PortIntelligenceReport {
    let trimmed = raw.trim();
    let description = if trimmed.is_empty() {
        "AI response received but couldn't be parsed properly. Please try rephrasing your query."
            .to_string()
    } else {
        let head: String = trimmed.chars().take(FALLBACK_DESCRIPTION_CHARS).collect();
        format!("{}...", head)
    };

    PortIntelligenceReport {
        query_type: QueryType::GeneralInfo,
        data: json!({
            "queryType": QueryType::GeneralInfo.as_str(),
            "name": query,
            "description": description,
            "keyInsights": [
                "AI response received but couldn't parse as structured data",
                "Try simpler queries like 'Port of Rotterdam' or 'ports in Germany'"
            ],
            "parseFailed": true,
        }),
        strategy: "fallback",
        degraded: true,
    }
}
