//! Prompt template for port-intelligence queries.

const RESPONSE_FORMATS: &str = r#"Analyze the query and respond with ONLY valid JSON in one of these formats:

SINGLE PORT (for specific port names):
{
  "queryType": "single_port",
  "name": "Port Name",
  "country": "Country",
  "region": "Region",
  "throughput": "Annual throughput",
  "description": "Port description and business insights",
  "established": "Year",
  "facilities": ["Facility 1", "Facility 2"],
  "keyInsights": ["Insight 1", "Insight 2"],
  "competitiveAdvantages": ["Advantage 1", "Advantage 2"],
  "website": "website.com"
}

BULK LISTING (for "ports in [country/region]"):
{
  "queryType": "port_listing",
  "name": "Major Ports in [Region]",
  "region": "Geographic area",
  "description": "Overview of regional ports",
  "portsList": [
    {"name": "Port 1", "city": "City", "throughput": "Volume", "specialization": "Type"},
    {"name": "Port 2", "city": "City", "throughput": "Volume", "specialization": "Type"}
  ],
  "keyInsights": ["Regional insight 1", "Regional insight 2"]
}

COMPARISON (for "compare X vs Y"):
{
  "queryType": "comparison",
  "name": "Port Comparison",
  "description": "Comparison overview",
  "comparisonData": [
    {"name": "Port 1", "strengths": ["Strength 1"], "metrics": "Key stats"},
    {"name": "Port 2", "strengths": ["Strength 1"], "metrics": "Key stats"}
  ],
  "recommendation": "Which is better and why"
}

RULES:
- Return ONLY valid JSON, no extra text
- Use real port data and current information
- For bulk queries, include 5-10 major ports
- If unclear query, return: {"error": "Please specify your port query more clearly"}"#;

/// Wrap a user query in the fixed maritime-intelligence prompt.
pub fn build_prompt(query: &str) -> String {
    format!("Maritime Intelligence Query: \"{}\"\n\n{}", query, RESPONSE_FORMATS)
}
