use thiserror::Error;

/// Error taxonomy for the support agent.
///
/// The core performs no local recovery: everything except tolerated tool
/// input anomalies propagates to the HTTP façade unchanged.
#[derive(Debug, Error)]
pub enum ShopEasyError {
    /// Missing or unusable configuration (API credential, base URL).
    /// Surfaced as a client-facing 400 by the façade.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Any failure from the remote model call: network, rate limit,
    /// malformed response. Never retried, never classified further.
    #[error("LLM provider failed: {0}")]
    LlmProvider(String),
    #[error("Tool call failed for '{tool_name}': {reason}")]
    ToolCallFailed { tool_name: String, reason: String },
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}
