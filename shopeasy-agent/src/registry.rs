use std::collections::BTreeMap;

use shopeasy_core::{ShopEasyError, Tool, ToolSpec, Value};

/// Tool descriptors registered for one agent instance, keyed by name.
///
/// BTreeMap keeps the spec order stable across runs, which keeps prompts
/// (and cassette-style tests) reproducible.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Dispatch one model-requested call to its handler.
    pub async fn call(&self, name: &str, args: Value) -> Result<Value, ShopEasyError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ShopEasyError::ToolCallFailed {
                tool_name: name.to_string(),
                reason: "not found".to_string(),
            })?;

        tool.invoke(args)
            .await
            .map_err(|err| ShopEasyError::ToolCallFailed {
                tool_name: name.to_string(),
                reason: err.to_string(),
            })
    }

    /// Specs advertised to the model alongside each request.
    pub fn to_specs(&self) -> Vec<ToolSpec> {
        self.tools
            .values()
            .map(|tool| ToolSpec {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.schema(),
            })
            .collect()
    }
}
