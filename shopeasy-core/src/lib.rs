mod error;
mod llm;
mod state;
mod tool;

pub use error::ShopEasyError;
pub use llm::{LlmRequest, LlmResponse, Message, Role, ToolCall, ToolCallingLlm, ToolSpec};
pub use state::{lock_state, StateStore, UserState, UserStateHandle};
pub use tool::{Tool, ToolError};

pub type Value = serde_json::Value;
