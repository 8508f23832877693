//! Generative-AI text completion client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{non_blank, IntelligenceSettings};
use crate::error::{ServiceError, ServiceResult};

/// Error text returned when the key is not configured.
pub const MISSING_KEY_MESSAGE: &str = "GOOGLE_AI_API_KEY not configured";

/// A text-in, text-out completion endpoint.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> ServiceResult<String>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// `candidates[0].content.parts[0].text`
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, settings: &IntelligenceSettings) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                settings.base_url.trim_end_matches('/'),
                settings.model
            ),
            api_key: non_blank(settings.api_key.clone()),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> ServiceResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::configuration(MISSING_KEY_MESSAGE))?;

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ServiceError::upstream(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<empty response>".to_string());
            return Err(ServiceError::upstream_status(
                status.as_u16(),
                format!("API Error: {} - {}", status.as_u16(), body.trim()),
            ));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::upstream(e.without_url().to_string()))?;

        parsed
            .into_text()
            .ok_or_else(|| ServiceError::upstream("Invalid API response structure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> IntelligenceSettings {
        IntelligenceSettings {
            api_key: Some("k".to_string()),
            ..IntelligenceSettings::default()
        }
    }

    #[test]
    fn test_endpoint_shape() {
        let client = GeminiClient::new(reqwest::Client::new(), &settings());
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-latest:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let client = GeminiClient::new(reqwest::Client::new(), &settings());
        let body = serde_json::to_value(client.request_body("hello")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"parts": [{"text": "hello"}]}],
                "generationConfig": {"temperature": 0.1f32, "maxOutputTokens": 2000}
            })
        );
    }

    #[test]
    fn test_response_text_path() {
        let resp: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"queryType\":\"comparison\"}"}]}}]
        }))
        .unwrap();
        assert_eq!(resp.into_text().as_deref(), Some("{\"queryType\":\"comparison\"}"));
    }

    #[test]
    fn test_response_without_candidates() {
        let resp: GenerateResponse = serde_json::from_value(json!({"promptFeedback": {}})).unwrap();
        assert!(resp.into_text().is_none());

        let resp: GenerateResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert!(resp.into_text().is_none());
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let client = GeminiClient::new(reqwest::Client::new(), &IntelligenceSettings::default());
        let err = client.generate("anything").await.unwrap_err();
        assert_eq!(err, ServiceError::configuration(MISSING_KEY_MESSAGE));
    }
}
