use std::env;
use std::time::Duration;

use crate::services::completion::CompletionError;
use crate::services::extraction_service::ExtractionMode;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";
const DEFAULT_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const TEMPERATURE: f64 = 0.7;

/// Settings for the completion gateway. Built once at startup.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub timeout: Duration,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, CompletionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the gateway settings through `lookup`. The API key is the only
    /// required value; an empty key counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompletionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CompletionError::Misconfigured(format!("{} is not configured", API_KEY_VAR)))?;

        let mut config = Self::new(api_key);

        if let Some(endpoint) = lookup("AI_GATEWAY_URL").filter(|value| !value.is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(model) = lookup("AI_GATEWAY_MODEL").filter(|value| !value.is_empty()) {
            config.model = model;
        }
        if let Some(secs) = lookup("AI_GATEWAY_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }
}

#[derive(Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub extraction_mode: ExtractionMode,
    pub gateway: Result<GatewayConfig, CompletionError>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);
        let extraction_mode = env::var("ITINERARY_EXTRACTION")
            .map(|value| ExtractionMode::from_name(&value))
            .unwrap_or_default();

        Self {
            host,
            port,
            extraction_mode,
            gateway: GatewayConfig::from_env(),
        }
    }
}

pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
