use super::*;

#[test]
fn request_serializes_with_snake_case_fields() {
    let req = ChatRequest { message: "What is VCS?".to_owned(), selected_standard: Standard::Vcs };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "What is VCS?", "selected_standard": "vcs" }));
}

#[test]
fn reply_prefers_answer() {
    let resp: ChatResponse =
        serde_json::from_str(r#"{"answer":"VCS is...","clarification":"Which one?"}"#).unwrap();
    assert_eq!(resp.reply_text(), "VCS is...");
}

#[test]
fn reply_falls_back_to_clarification() {
    let resp: ChatResponse =
        serde_json::from_str(r#"{"answer":null,"clarification":"Please choose a standard"}"#).unwrap();
    assert_eq!(resp.reply_text(), "Please choose a standard");
}

#[test]
fn empty_answer_counts_as_missing() {
    let resp = ChatResponse { answer: Some(String::new()), clarification: Some("Narrow it down".to_owned()) };
    assert_eq!(resp.reply_text(), "Narrow it down");
}

#[test]
fn reply_without_fields_uses_placeholder() {
    let resp: ChatResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.reply_text(), NO_ANSWER_TEXT);
}
