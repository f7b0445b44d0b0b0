use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "tool_use",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_tool_use_response() {
    let json = make_response(serde_json::json!([
        { "type": "tool_use", "id": "tu_1", "name": "emit_floor_plan", "input": { "rooms": [], "doors": [] } }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert!(resp.tool_call("emit_floor_plan").is_some());
    assert_eq!(resp.stop_reason, "tool_use");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_filters_unknown_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "Here is the plan" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.content.len(), 1);
    assert_eq!(resp.text(), "Here is the plan");
}

#[test]
fn parse_tolerates_null_stop_reason() {
    let json = serde_json::json!({
        "content": [],
        "model": "m",
        "stop_reason": null,
        "usage": { "input_tokens": 1, "output_tokens": 2 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "");
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn request_omits_absent_tools() {
    let messages = [Message::user("hi")];
    let body = ApiRequest {
        model: "m",
        max_tokens: 10,
        system: "sys",
        messages: &messages,
        tools: None,
        tool_choice: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert!(value.get("tools").is_none());
    assert!(value.get("tool_choice").is_none());
    assert_eq!(value["messages"][0]["role"], "user");
}

#[test]
fn client_builds_with_configured_model() {
    let client = AnthropicClient::new(
        "key".into(),
        "claude-test".into(),
        LlmTimeouts { request_secs: 5, connect_secs: 1 },
    )
    .unwrap();
    assert_eq!(client.model(), "claude-test");
}
