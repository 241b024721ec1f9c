use super::*;
use protocol::chat::NO_ANSWER_TEXT;

fn with_input(text: &str) -> ChatState {
    ChatState { input: text.to_owned(), ..ChatState::default() }
}

#[test]
fn default_shows_welcome_with_gs_selected() {
    let state = ChatState::default();
    assert!(state.shows_welcome());
    assert_eq!(state.standard, Standard::Gs);
    assert!(!state.loading);
}

#[test]
fn blank_input_is_not_sent() {
    let mut state = with_input("   ");
    assert_eq!(state.begin_send(), None);
    assert!(state.messages.is_empty());
    assert!(state.shows_welcome());
}

#[test]
fn begin_send_appends_user_message_and_builds_request() {
    let mut state = with_input("What is ICR?");
    state.standard = Standard::Icr;

    let request = state.begin_send().expect("request");

    assert_eq!(request.message, "What is ICR?");
    assert_eq!(request.selected_standard, Standard::Icr);
    assert_eq!(state.messages, vec![ChatMessage { sender: Sender::User, text: "What is ICR?".to_owned() }]);
    assert!(state.loading);
    assert!(!state.shows_welcome());
}

#[test]
fn second_send_while_loading_is_ignored() {
    let mut state = with_input("one");
    state.begin_send();
    state.input = "two".to_owned();
    assert_eq!(state.begin_send(), None);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn finish_send_prefers_answer_then_clarification() {
    let mut state = with_input("q");
    state.begin_send();
    state.finish_send(Ok(ChatResponse { answer: None, clarification: Some("Which standard?".to_owned()) }));

    assert_eq!(state.messages[1], ChatMessage { sender: Sender::Bot, text: "Which standard?".to_owned() });
    assert!(!state.loading);
    assert!(state.input.is_empty());
}

#[test]
fn empty_reply_uses_placeholder() {
    let mut state = with_input("q");
    state.begin_send();
    state.finish_send(Ok(ChatResponse::default()));
    assert_eq!(state.messages[1].text, NO_ANSWER_TEXT);
}

#[test]
fn failed_send_keeps_user_message_and_appends_error_line() {
    let mut state = with_input("q");
    state.begin_send();
    state.finish_send(Err("chat request failed: 500".to_owned()));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[1].text, CHAT_ERROR_TEXT);
    assert!(!state.loading);
}

#[test]
fn new_chat_resets_transcript_but_keeps_standard() {
    let mut state = with_input("q");
    state.standard = Standard::Vcs;
    state.begin_send();
    state.finish_send(Ok(ChatResponse::default()));
    state.input = "draft".to_owned();

    state.new_chat();

    assert!(state.messages.is_empty());
    assert!(state.input.is_empty());
    assert!(state.shows_welcome());
    assert_eq!(state.standard, Standard::Vcs);
}
