use std::env;

use secrecy::SecretString;
use shopeasy_core::ShopEasyError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// OpenRouter endpoint configuration, read once at process start and passed
/// by reference to everything that needs it.
#[derive(Clone, Debug)]
pub struct OpenRouterConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
}

impl OpenRouterConfig {
    /// Load from `OPENROUTER_API_KEY` (required), `OPENROUTER_BASE_URL` and
    /// `OPENROUTER_MODEL` (defaulted). A missing credential is fatal and
    /// reported before any network call is attempted.
    pub fn from_env() -> Result<Self, ShopEasyError> {
        let api_key = non_empty(env::var("OPENROUTER_API_KEY").ok()).ok_or_else(|| {
            ShopEasyError::InvalidConfig(
                "OPENROUTER_API_KEY environment variable is required".to_string(),
            )
        })?;

        Ok(Self {
            api_key: SecretString::new(api_key),
            base_url: non_empty(env::var("OPENROUTER_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty(env::var("OPENROUTER_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
