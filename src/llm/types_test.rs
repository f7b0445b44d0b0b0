use serde_json::json;

use super::*;

// =============================================================================
// LlmError
// =============================================================================

#[test]
fn error_codes_are_distinct() {
    let errors = [
        LlmError::ConfigParse("bad".into()),
        LlmError::MissingApiKey { var: "KEY".into() },
        LlmError::ApiRequest("timeout".into()),
        LlmError::ApiResponse { status: 500, body: String::new() },
        LlmError::ApiParse("json".into()),
        LlmError::HttpClientBuild("tls".into()),
    ];
    let mut codes: Vec<&str> = errors.iter().map(ErrorCode::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn transport_and_server_errors_are_retryable() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
    assert!(LlmError::ApiResponse { status: 429, body: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: String::new() }.retryable());
}

#[test]
fn client_errors_are_not_retryable() {
    assert!(!LlmError::ApiResponse { status: 400, body: String::new() }.retryable());
    assert!(!LlmError::ApiParse("bad".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "KEY".into() }.retryable());
}

// =============================================================================
// ContentBlock / Content
// =============================================================================

#[test]
fn tool_use_block_round_trips() {
    let block: ContentBlock =
        serde_json::from_value(json!({ "type": "tool_use", "id": "tu_1", "name": "emit_floor_plan", "input": {} }))
            .unwrap();
    assert!(matches!(&block, ContentBlock::ToolUse { name, .. } if name == "emit_floor_plan"));
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(value["type"], "tool_use");
}

#[test]
fn unrecognized_block_is_unknown() {
    let block: ContentBlock = serde_json::from_value(json!({ "type": "thinking", "thinking": "hmm" })).unwrap();
    assert!(matches!(block, ContentBlock::Unknown));
}

#[test]
fn tool_result_skips_absent_error_flag() {
    let block = ContentBlock::ToolResult { tool_use_id: "tu_1".into(), content: "ok".into(), is_error: None };
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(value, json!({ "type": "tool_result", "tool_use_id": "tu_1", "content": "ok" }));
}

#[test]
fn user_message_serializes_as_plain_text() {
    let value = serde_json::to_value(Message::user("hello")).unwrap();
    assert_eq!(value, json!({ "role": "user", "content": "hello" }));
}

#[test]
fn tool_choice_serializes_tagged() {
    let value = serde_json::to_value(ToolChoice::Tool { name: "emit_floor_plan".into() }).unwrap();
    assert_eq!(value, json!({ "type": "tool", "name": "emit_floor_plan" }));
}

// =============================================================================
// ChatResponse helpers
// =============================================================================

fn response(content: Vec<ContentBlock>) -> ChatResponse {
    ChatResponse { content, model: "m".into(), stop_reason: "tool_use".into(), input_tokens: 0, output_tokens: 0 }
}

#[test]
fn tool_call_finds_first_matching_call() {
    let resp = response(vec![
        ContentBlock::Text { text: "here".into() },
        ContentBlock::ToolUse { id: "a".into(), name: "other".into(), input: json!(1) },
        ContentBlock::ToolUse { id: "b".into(), name: "emit_floor_plan".into(), input: json!(2) },
        ContentBlock::ToolUse { id: "c".into(), name: "emit_floor_plan".into(), input: json!(3) },
    ]);
    assert_eq!(resp.tool_call("emit_floor_plan"), Some(("b", &json!(2))));
    assert!(resp.tool_call("missing").is_none());
}

#[test]
fn text_joins_text_blocks() {
    let resp = response(vec![
        ContentBlock::Text { text: "one".into() },
        ContentBlock::Unknown,
        ContentBlock::Text { text: "two".into() },
    ]);
    assert_eq!(resp.text(), "one\ntwo");
}
