use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use shopeasy_core::Value;

/// System prompt for the ShopEasy support agent. The three placeholders give
/// the model conversational continuity without replaying message history.
pub const SYSTEM_PROMPT: &str = r#"You are a helpful e-commerce customer support agent for "ShopEasy".

Your responsibilities:
- Help customers check their order status
- Assist with return requests
- Answer general questions about shipping and returns

Guidelines:
- Be friendly, concise, and helpful
- When a customer asks about an order, use the check_order_status tool
- When a customer wants to return an item, use the request_return tool
- If the customer mentions an order ID, remember it for future reference
- If the customer asks about "my order" without an ID, check if you have a previous order ID from context

Current user context:
- Last intent: {{last_intent}}
- Last order ID: {{last_order_id}}
- Message count: {{message_count}}

Use this context to provide continuity in the conversation. If the user refers to
"my order" or "the order" without specifying an ID, use the last_order_id if available.
"#;

// Compiled once per process; the pattern is a fixed literal.
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("valid placeholder pattern"))
}

/// Minimal `{{var}}` substitution. Unknown placeholders render empty.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> String {
        placeholder_pattern()
            .replace_all(&self.template, |caps: &regex::Captures| {
                match vars.get(&caps[1]) {
                    Some(value) => value
                        .as_str()
                        .map(|text| text.to_string())
                        .unwrap_or_else(|| value.to_string()),
                    None => String::new(),
                }
            })
            .into_owned()
    }
}
