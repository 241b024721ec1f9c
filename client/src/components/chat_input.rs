//! Input row: new-chat button, message box, standard selector, send button.

use leptos::prelude::*;
use protocol::Standard;

use crate::state::chat::ChatState;

#[component]
pub fn ChatInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let do_send = move || {
        let Some(request) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_chat(&request).await;
                if let Err(e) = &result {
                    log::warn!("chat request failed: {e}");
                }
                chat.update(|c| c.finish_send(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let on_standard = move |ev: leptos::ev::Event| {
        if let Some(standard) = Standard::parse(&event_target_value(&ev)) {
            chat.update(|c| c.standard = standard);
        }
    };

    view! {
        <div class="input-container">
            <div class="icon-row">
                <button class="icon-btn new-chat-circle" title="New chat" on:click=move |_| chat.update(ChatState::new_chat)>
                    "↻"
                </button>
            </div>

            <input
                class="chat-input"
                type="text"
                placeholder="How can I help you today?"
                prop:value=move || chat.with(|c| c.input.clone())
                on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                on:keydown=on_keydown
            />

            <div class="right-controls">
                <select class="dropdown" prop:value=move || chat.with(|c| c.standard.as_str()) on:change=on_standard>
                    {Standard::ALL
                        .into_iter()
                        .map(|standard| view! { <option value={standard.as_str()}>{standard.label()}</option> })
                        .collect_view()}
                </select>
                <button
                    class="send-btn"
                    title="Send"
                    on:click=move |_| do_send()
                    disabled=move || chat.with(|c| c.loading)
                >
                    "➤"
                </button>
            </div>
        </div>
    }
}
