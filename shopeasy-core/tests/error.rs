use shopeasy_core::ShopEasyError;

#[test]
fn display_messages_are_stable() {
    let config = ShopEasyError::InvalidConfig("OPENROUTER_API_KEY is not set".to_string());
    assert_eq!(
        config.to_string(),
        "Invalid configuration: OPENROUTER_API_KEY is not set"
    );

    let provider = ShopEasyError::LlmProvider("429: rate limited".to_string());
    assert_eq!(provider.to_string(), "LLM provider failed: 429: rate limited");

    let tool = ShopEasyError::ToolCallFailed {
        tool_name: "check_order_status".to_string(),
        reason: "missing field `order_id`".to_string(),
    };
    assert_eq!(
        tool.to_string(),
        "Tool call failed for 'check_order_status': missing field `order_id`"
    );
}

#[test]
fn serde_errors_convert_and_keep_their_message() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let detail = source.to_string();
    let err = ShopEasyError::from(source);
    assert!(matches!(err, ShopEasyError::Serde(_)));
    assert_eq!(
        err.to_string(),
        format!("Serialization/deserialization error: {detail}")
    );
}
