use log::{debug, error};
use reqwest::Client;

use crate::config::{mask_secret, GatewayConfig};
use crate::services::completion::{CompletionError, CompletionOperations};

use super::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Chat-completion gateway reached over HTTPS with a bearer key.
pub struct GatewayProvider {
    client: Client,
    config: Result<GatewayConfig, CompletionError>,
}

impl GatewayProvider {
    pub fn new(config: GatewayConfig) -> Self {
        Self::from_config(Ok(config))
    }

    /// Keeps a startup configuration error around so every call reports it
    /// without reaching the network.
    pub fn from_config(config: Result<GatewayConfig, CompletionError>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl CompletionOperations for GatewayProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        let config = self.config.as_ref().map_err(Clone::clone)?;

        let body = ChatCompletionRequest::new(
            &config.model,
            system_prompt,
            user_prompt,
            config.temperature,
        );

        debug!("Calling completion gateway {} with model {}", config.endpoint, config.model);

        let response = self
            .client
            .post(&config.endpoint)
            .bearer_auth(&config.api_key)
            .timeout(config.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = CompletionError::from_status(status.as_u16(), text);
            error!("AI gateway error: {}", err.log_summary());
            return Err(err);
        }

        let payload: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            CompletionError::UpstreamError {
                status: status.as_u16(),
                body: format!("malformed completion payload ({}): {}", e, text),
            }
        })?;

        payload
            .into_first_content()
            .ok_or(CompletionError::EmptyCompletion)
    }

    fn is_configured(&self) -> bool {
        self.config.is_ok()
    }

    fn describe(&self) -> String {
        match &self.config {
            Ok(config) => format!(
                "Gateway key configured ({}), model {}",
                mask_secret(&config.api_key),
                config.model
            ),
            Err(err) => err.to_string(),
        }
    }
}
