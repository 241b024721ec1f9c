//! One-shot "your free trial has started" modal.

use leptos::prelude::*;
use protocol::StatusSnapshot;

use crate::state::ui::{dismisses_popup, trial_popup_message};

/// Modal announcing a freshly activated trial.
#[component]
pub fn TrialPopup(on_close: Callback<()>) -> impl IntoView {
    let status = expect_context::<RwSignal<StatusSnapshot>>();

    let message = move || trial_popup_message(status.with(StatusSnapshot::trial_days_remaining));
    // Listen on the window so Escape works without focusing the dialog first.
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if dismisses_popup(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="trial-popup__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="trial-popup"
                role="dialog"
                on:click=move |ev| ev.stop_propagation()
            >
                <button class="trial-popup__close" title="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <div class="trial-popup__icon">"🎉"</div>
                <h2 class="trial-popup__title">"Your Free Trial Has Started!"</h2>
                <p class="trial-popup__message">{message}</p>
                <button class="btn btn--primary trial-popup__ok" on:click=move |_| on_close.run(())>
                    "Got it"
                </button>
            </div>
        </div>
    }
}
