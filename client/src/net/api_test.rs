use super::*;

#[test]
fn chat_failed_message_formats_status() {
    assert_eq!(chat_failed_message(502), "chat request failed: 502");
}

#[cfg(not(feature = "hydrate"))]
mod server_render {
    use futures::executor::block_on;

    use super::*;
    use protocol::Standard;

    #[test]
    fn send_chat_is_unavailable_during_server_render() {
        let request = ChatRequest { message: "hi".to_owned(), selected_standard: Standard::Gs };
        assert_eq!(block_on(send_chat(&request)), Err(unavailable_on_server()));
    }

    #[test]
    fn status_calls_fail_as_network_errors_during_server_render() {
        let err = block_on(BrowserStatusApi.trial_status("tok")).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
