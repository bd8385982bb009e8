use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use shopeasy_core::{LlmRequest, LlmResponse, ShopEasyError, ToolCallingLlm};
use url::Url;

use crate::config::OpenRouterConfig;
use crate::wire;

const COMPLETIONS_PATH: &str = "chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenRouter chat-completions client.
///
/// Treats the endpoint as a black box: one POST per inference step, no
/// retries, no streaming. Provider failures surface as
/// [`ShopEasyError::LlmProvider`] with the raw message.
#[derive(Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> Result<Self, ShopEasyError> {
        // Parse only to reject a malformed base URL up front.
        Url::parse(&config.base_url).map_err(|err| {
            ShopEasyError::InvalidConfig(format!("invalid base URL '{}': {err}", config.base_url))
        })?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ShopEasyError::InvalidConfig(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/{COMPLETIONS_PATH}", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ToolCallingLlm for OpenRouterClient {
    async fn invoke(&self, request: LlmRequest) -> Result<LlmResponse, ShopEasyError> {
        let body = wire::ChatCompletionRequest {
            model: request.model,
            messages: request
                .messages
                .into_iter()
                .map(wire::encode_message)
                .collect::<Result<Vec<_>, _>>()?,
            tools: if request.tools.is_empty() {
                None
            } else {
                Some(request.tools.into_iter().map(wire::encode_tool_spec).collect())
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| ShopEasyError::LlmProvider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<wire::ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            tracing::warn!(status = %status, "chat completion request failed");
            return Err(ShopEasyError::LlmProvider(format!("{status}: {message}")));
        }

        let completion: wire::ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ShopEasyError::LlmProvider(err.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ShopEasyError::LlmProvider("no choices returned".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            tool_calls: choice
                .message
                .tool_calls
                .unwrap_or_default()
                .into_iter()
                .map(wire::decode_tool_call)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
