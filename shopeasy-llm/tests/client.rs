use httpmock::prelude::*;
use secrecy::SecretString;
use serde_json::json;
use shopeasy_core::{LlmRequest, Message, ShopEasyError, ToolCallingLlm, ToolSpec};
use shopeasy_llm::{OpenRouterClient, OpenRouterConfig, DEFAULT_MODEL};

fn config_for(server: &MockServer) -> OpenRouterConfig {
    OpenRouterConfig {
        api_key: SecretString::new("test-key".to_string()),
        base_url: server.url("/api/v1"),
        model: DEFAULT_MODEL.to_string(),
    }
}

fn request() -> LlmRequest {
    LlmRequest {
        model: DEFAULT_MODEL.to_string(),
        messages: vec![Message::system("You are helpful."), Message::user("hi")],
        tools: vec![ToolSpec {
            name: "check_order_status".to_string(),
            description: "Check the status of a customer's order.".to_string(),
            parameters: json!({"type": "object", "properties": {}}),
        }],
    }
}

#[tokio::test]
async fn plain_answer_is_decoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/chat/completions")
                .header("authorization", "Bearer test-key");
            then.status(200).json_body(json!({
                "id": "gen-1",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello!"},
                    "finish_reason": "stop"
                }]
            }));
        })
        .await;

    let client = OpenRouterClient::new(&config_for(&server)).unwrap();
    let response = client.invoke(request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.content, "Hello!");
    assert!(response.tool_calls.is_empty());
}

#[tokio::test]
async fn tool_call_arguments_are_parsed_from_json_string() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_1",
                            "type": "function",
                            "function": {
                                "name": "check_order_status",
                                "arguments": "{\"order_id\":\"ORD-12345\"}"
                            }
                        }]
                    },
                    "finish_reason": "tool_calls"
                }]
            }));
        })
        .await;

    let client = OpenRouterClient::new(&config_for(&server)).unwrap();
    let response = client.invoke(request()).await.unwrap();

    assert_eq!(response.content, "");
    assert_eq!(response.tool_calls.len(), 1);
    let call = &response.tool_calls[0];
    assert_eq!(call.name, "check_order_status");
    assert_eq!(call.args, json!({"order_id": "ORD-12345"}));
}

#[tokio::test]
async fn provider_error_body_surfaces_raw_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat/completions");
            then.status(429).json_body(json!({
                "error": {"message": "rate limit exceeded", "type": "rate_limit"}
            }));
        })
        .await;

    let client = OpenRouterClient::new(&config_for(&server)).unwrap();
    let err = client.invoke(request()).await.unwrap_err();

    match err {
        ShopEasyError::LlmProvider(message) => {
            assert!(message.contains("rate limit exceeded"), "got: {message}");
        }
        other => panic!("expected LlmProvider, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_a_provider_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let client = OpenRouterClient::new(&config_for(&server)).unwrap();
    let err = client.invoke(request()).await.unwrap_err();
    assert!(matches!(err, ShopEasyError::LlmProvider(_)));
}

#[test]
fn malformed_base_url_is_rejected_before_any_network_call() {
    let config = OpenRouterConfig {
        api_key: SecretString::new("test-key".to_string()),
        base_url: "not a url".to_string(),
        model: DEFAULT_MODEL.to_string(),
    };
    assert!(matches!(
        OpenRouterClient::new(&config),
        Err(ShopEasyError::InvalidConfig(_))
    ));
}
