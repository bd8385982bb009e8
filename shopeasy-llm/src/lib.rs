mod config;
mod openrouter;
pub mod wire;

pub use config::{OpenRouterConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openrouter::OpenRouterClient;

pub use shopeasy_core::{LlmRequest, LlmResponse, Message, Role, ToolCall, ToolCallingLlm, ToolSpec};
