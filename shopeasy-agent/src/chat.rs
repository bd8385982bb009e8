use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use shopeasy_core::{
    lock_state, LlmRequest, Message, ShopEasyError, ToolCallingLlm, UserStateHandle, Value,
};
use tracing::debug;

use crate::prompt::{PromptTemplate, SYSTEM_PROMPT};
use crate::registry::ToolRegistry;
use crate::state_tools::{CheckOrderStatus, PreviousOrderId, RequestReturn};

/// Sentinel substituted into the prompt when an optional state field is unset.
const NONE_SENTINEL: &str = "None";

const DEFAULT_MAX_STEPS: usize = 5;

/// Single-use conversational agent bound to one user's state for exactly one
/// message exchange.
///
/// The model owns the internal mechanics of the turn: it may call zero, one,
/// or several tools in any order before answering. This type only shuttles
/// messages and dispatches tool calls.
pub struct SupportAgent {
    llm: Arc<dyn ToolCallingLlm>,
    model: String,
    state: UserStateHandle,
    tools: ToolRegistry,
    max_steps: usize,
}

impl SupportAgent {
    pub fn new(llm: Arc<dyn ToolCallingLlm>, model: impl Into<String>, state: UserStateHandle) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(Box::new(CheckOrderStatus::new(state.clone())));
        tools.register(Box::new(RequestReturn::new(state.clone())));
        tools.register(Box::new(PreviousOrderId::new(state.clone())));

        Self {
            llm,
            model: model.into(),
            state,
            tools,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Process one inbound message: run the tool-call loop until the model
    /// answers in plain text, then count the completed turn.
    ///
    /// Errors from the model propagate unmodified; no retry, no timeout.
    pub async fn process(&self, message: &str) -> Result<String, ShopEasyError> {
        let system_prompt = self.render_system_prompt();
        let mut messages = vec![Message::system(system_prompt), Message::user(message)];

        for step in 0..self.max_steps {
            let response = self
                .llm
                .invoke(LlmRequest {
                    model: self.model.clone(),
                    messages: messages.clone(),
                    tools: self.tools.to_specs(),
                })
                .await?;

            if response.tool_calls.is_empty() {
                // Counted on top of any increments the tools applied.
                lock_state(&self.state).message_count += 1;
                debug!(step, "turn completed");
                return Ok(response.content);
            }

            messages.push(Message::assistant(
                response.content,
                response.tool_calls.clone(),
            ));

            for call in response.tool_calls {
                debug!(tool = %call.name, step, "dispatching tool call");
                let result = self.tools.call(&call.name, call.args).await?;
                messages.push(Message::tool(call.id, value_to_text(result)));
            }
        }

        Err(ShopEasyError::LlmProvider(format!(
            "model did not produce a final answer within {} steps",
            self.max_steps
        )))
    }

    fn render_system_prompt(&self) -> String {
        let state = lock_state(&self.state).clone();
        let mut vars = HashMap::new();
        vars.insert(
            "last_intent".to_string(),
            json!(state.last_intent.as_deref().unwrap_or(NONE_SENTINEL)),
        );
        vars.insert(
            "last_order_id".to_string(),
            json!(state.last_order_id.as_deref().unwrap_or(NONE_SENTINEL)),
        );
        vars.insert("message_count".to_string(), json!(state.message_count));

        PromptTemplate::new(SYSTEM_PROMPT).render(&vars)
    }
}

// Tool results are plain strings here; anything else goes back to the model
// as compact JSON.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
