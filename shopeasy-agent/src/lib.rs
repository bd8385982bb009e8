//! LLM-driven support agent for the ShopEasy demo shop.
//!
//! One [`SupportAgent`] is built per inbound message, bound to that user's
//! conversational state. The agent exposes three tools to the model
//! (order-status lookup, return initiation, previous-order recall) and runs
//! a plain tool-call loop until the model produces a final answer.

mod chat;
mod prompt;
mod registry;
mod state_tools;
pub mod tools;

pub use chat::SupportAgent;
pub use prompt::{PromptTemplate, SYSTEM_PROMPT};
pub use registry::ToolRegistry;
pub use state_tools::{CheckOrderStatus, PreviousOrderId, RequestReturn};
