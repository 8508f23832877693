//! Application configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables. Secrets are optional here; the component that needs
//! one reports a configuration error at request time when it is missing.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Error raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub news: NewsSettings,
    #[serde(default)]
    pub prediction: PredictionSettings,
    #[serde(default)]
    pub intelligence: IntelligenceSettings,
    #[serde(default)]
    pub http: HttpSettings,
}

/// Listening address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream news search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_news_base_url")]
    pub base_url: String,
    #[serde(default = "default_news_query")]
    pub query: String,
    #[serde(default = "default_news_lang")]
    pub lang: String,
}

/// External delay-prediction model server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionSettings {
    #[serde(default = "default_prediction_base_url")]
    pub base_url: String,
}

/// Generative-AI completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds; unset keeps the client default (none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_news_base_url() -> String {
    "https://gnews.io/api/v4".to_string()
}

fn default_news_query() -> String {
    "shipping".to_string()
}

fn default_news_lang() -> String {
    "en".to_string()
}

fn default_prediction_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash-latest".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_output_tokens() -> u32 {
    2000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_news_base_url(),
            query: default_news_query(),
            lang: default_news_lang(),
        }
    }
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            base_url: default_prediction_base_url(),
        }
    }
}

impl Default for IntelligenceSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Treat blank secrets as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Locate a config file.
    ///
    /// `SMARTSHIP_CONFIG` wins when set; otherwise `smartship.toml` is looked
    /// up in the current directory and in `backend/`.
    pub fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = env::var("SMARTSHIP_CONFIG") {
            return Some(PathBuf::from(path));
        }
        [
            PathBuf::from("smartship.toml"),
            PathBuf::from("backend/smartship.toml"),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// Defaults, then the config file if one is found, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::find_config_file() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: listening address
    /// - `GNEWS_API_KEY`, `GNEWS_BASE_URL`: news search upstream
    /// - `GOOGLE_AI_API_KEY`, `GEMINI_BASE_URL`, `GEMINI_MODEL`: generative-AI upstream
    /// - `PREDICTION_API_URL`: delay-prediction model server base URL
    /// - `HTTP_TIMEOUT_SECS`: outbound request timeout
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Ok(key) = env::var("GNEWS_API_KEY") {
            self.news.api_key = Some(key);
        }
        if let Ok(url) = env::var("GNEWS_BASE_URL") {
            self.news.base_url = url;
        }
        if let Ok(key) = env::var("GOOGLE_AI_API_KEY") {
            self.intelligence.api_key = Some(key);
        }
        if let Ok(url) = env::var("GEMINI_BASE_URL") {
            self.intelligence.base_url = url;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            self.intelligence.model = model;
        }
        if let Ok(url) = env::var("PREDICTION_API_URL") {
            self.prediction.base_url = url;
        }
        if let Ok(secs) = env::var("HTTP_TIMEOUT_SECS") {
            let secs = secs.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HTTP_TIMEOUT_SECS".to_string(),
                message: format!("'{}' is not a number of seconds", secs),
            })?;
            self.http.timeout_secs = Some(secs);
        }

        self.news.api_key = non_blank(self.news.api_key);
        self.intelligence.api_key = non_blank(self.intelligence.api_key);
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
