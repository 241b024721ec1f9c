//! Header banner with the signed-in user and the trial/paid badge.
//!
//! At most one badge renders; which one is decided by
//! [`crate::state::status::badge_view`].

use leptos::prelude::*;
use protocol::StatusSnapshot;

use crate::state::session::SessionState;
use crate::state::status::{Countdowns, badge_view};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let status = expect_context::<RwSignal<StatusSnapshot>>();
    let countdowns = expect_context::<RwSignal<Countdowns>>();

    let badge = move || status.with(|s| countdowns.with(|c| badge_view(s, c)));

    view! {
        <div class="status-banner">
            {move || {
                session
                    .with(SessionState::greeting)
                    .map(|greeting| view! { <span class="status-banner__user">{greeting}</span> })
            }}
            {move || {
                badge()
                    .map(|shown| {
                        let class = shown.css_class();
                        view! {
                            <div class=class>
                                <span class="status-badge__label">{shown.label}</span>
                                {shown.detail.map(|detail| view! { <span class="status-badge__countdown">{detail}</span> })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
