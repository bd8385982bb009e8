//! OpenAI-compatible chat-completions wire format.
//!
//! OpenRouter speaks OpenAI's API shape: tool arguments travel as a JSON
//! string inside `function.arguments`, not as a structured object, so the
//! client converts between that encoding and the core `ToolCall` type.

use serde::{Deserialize, Serialize};
use shopeasy_core::{Message, Role, ShopEasyError, ToolCall, ToolSpec, Value};

#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<WireTool>>,
}

#[derive(Serialize, Debug, Clone)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded arguments object.
    pub arguments: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct WireTool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: WireFunction,
}

#[derive(Serialize, Debug, Clone)]
pub struct WireFunction {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

/// OpenAI-style error envelope returned on non-2xx responses.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

pub fn encode_message(message: Message) -> Result<WireMessage, ShopEasyError> {
    let tool_calls = if message.tool_calls.is_empty() {
        None
    } else {
        Some(
            message
                .tool_calls
                .into_iter()
                .map(encode_tool_call)
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    Ok(WireMessage {
        role: message.role,
        content: message.content,
        tool_call_id: message.tool_call_id,
        tool_calls,
    })
}

pub fn encode_tool_call(call: ToolCall) -> Result<WireToolCall, ShopEasyError> {
    Ok(WireToolCall {
        id: call.id,
        call_type: "function".to_string(),
        function: WireFunctionCall {
            name: call.name,
            arguments: serde_json::to_string(&call.args)?,
        },
    })
}

pub fn encode_tool_spec(spec: ToolSpec) -> WireTool {
    WireTool {
        tool_type: "function".to_string(),
        function: WireFunction {
            name: spec.name,
            description: spec.description,
            parameters: spec.parameters,
        },
    }
}

pub fn decode_tool_call(call: WireToolCall) -> Result<ToolCall, ShopEasyError> {
    Ok(ToolCall {
        id: call.id,
        name: call.function.name,
        args: serde_json::from_str(&call.function.arguments)?,
    })
}
