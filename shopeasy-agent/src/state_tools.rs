//! The three tools the model can call during a support turn.
//!
//! Each tool is an explicit descriptor struct holding the bound user's state
//! handle; mutation goes through `UserState::update`, never through hidden
//! closures. The handle is valid for one message-processing call.

use serde::Deserialize;
use serde_json::json;
use shopeasy_core::{lock_state, Tool, ToolError, UserStateHandle, Value};

use crate::tools;

#[derive(Debug, Deserialize)]
struct OrderIdArgs {
    order_id: String,
}

fn order_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "order_id": {
                "type": "string",
                "description": "The order ID to look up (e.g. \"ORD-12345\")."
            }
        },
        "required": ["order_id"]
    })
}

/// Look up an order's status; records intent `check_order`.
pub struct CheckOrderStatus {
    state: UserStateHandle,
}

impl CheckOrderStatus {
    pub fn new(state: UserStateHandle) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl Tool for CheckOrderStatus {
    fn name(&self) -> &str {
        "check_order_status"
    }

    fn description(&self) -> &str {
        "Check the status of a customer's order."
    }

    fn schema(&self) -> Value {
        order_id_schema()
    }

    async fn invoke(&self, args: Value) -> Result<Value, ToolError> {
        let args: OrderIdArgs = serde_json::from_value(args)?;
        lock_state(&self.state).update(Some("check_order"), Some(&args.order_id));
        Ok(Value::String(tools::order_status(&args.order_id)))
    }
}

/// Start a return; records intent `return_request`.
pub struct RequestReturn {
    state: UserStateHandle,
}

impl RequestReturn {
    pub fn new(state: UserStateHandle) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl Tool for RequestReturn {
    fn name(&self) -> &str {
        "request_return"
    }

    fn description(&self) -> &str {
        "Start a return request for an order."
    }

    fn schema(&self) -> Value {
        order_id_schema()
    }

    async fn invoke(&self, args: Value) -> Result<Value, ToolError> {
        let args: OrderIdArgs = serde_json::from_value(args)?;
        lock_state(&self.state).update(Some("return_request"), Some(&args.order_id));
        Ok(Value::String(tools::start_return(&args.order_id)))
    }
}

/// Recall the last order id this customer mentioned. Read-only.
pub struct PreviousOrderId {
    state: UserStateHandle,
}

impl PreviousOrderId {
    pub fn new(state: UserStateHandle) -> Self {
        Self { state }
    }
}

#[async_trait::async_trait]
impl Tool for PreviousOrderId {
    fn name(&self) -> &str {
        "get_previous_order_id"
    }

    fn description(&self) -> &str {
        "Get the last order ID mentioned by this customer. Use this when the \
         customer refers to \"my order\" without specifying an ID."
    }

    fn schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn invoke(&self, _args: Value) -> Result<Value, ToolError> {
        let last_order_id = lock_state(&self.state).last_order_id.clone();
        let message = match last_order_id {
            Some(order_id) => format!("The customer's last mentioned order ID is: {order_id}"),
            None => "No previous order ID found for this customer.".to_string(),
        };
        Ok(Value::String(message))
    }
}
