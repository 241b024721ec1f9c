//! Transcript area: welcome panel, messages, and the loading line.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Sender};
use crate::util::markdown::render_markdown_html;

/// Scrolling chat transcript.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Follow the newest entry.
    Effect::new(move || {
        chat.with(|c| (c.messages.len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-area" node_ref=messages_ref>
            {move || {
                if chat.with(ChatState::shows_welcome) {
                    return view! {
                        <div class="welcome-message">
                            <h2 class="welcome-title">"Hello! 👋"</h2>
                            <p class="welcome-subtext">
                                "I'm " <strong>"Flora GPT"</strong>
                                ", your assistant for exploring carbon standards, projects, and sustainability insights."
                            </p>
                        </div>
                    }
                        .into_any();
                }
                chat.with(|c| c.messages.iter().map(message_line).collect_view()).into_any()
            }}

            {move || {
                chat.with(|c| c.loading)
                    .then(|| {
                        view! {
                            <div class="loading-message">
                                <span class="dot"></span>
                                <span class="dot"></span>
                                <span class="dot"></span>
                                <span class="loading-text">"Generating accurate answer..."</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn message_line(msg: &ChatMessage) -> AnyView {
    match msg.sender {
        Sender::User => {
            let text = msg.text.clone();
            view! {
                <div class="chat-line user-msg">
                    <span>{text}</span>
                </div>
            }
            .into_any()
        }
        Sender::Bot => {
            let rendered = render_markdown_html(&msg.text);
            view! {
                <div class="chat-line bot-msg">
                    <div class="markdown-body" inner_html=rendered></div>
                </div>
            }
            .into_any()
        }
    }
}
