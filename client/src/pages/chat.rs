//! The chat widget page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Once hydration has finished the page bootstraps the session from the launch
//! URL and the identity cache, fetches billing status, and keeps three timers
//! alive for as long as it is mounted:
//!
//! - a 5-minute status refresh using whichever token is cached at tick time
//! - a 1-second trial countdown while an unpaid trial runs
//! - a 1-second renewal countdown while a paid plan has an end date
//!
//! Countdown timers follow their target through `Memo`s, so they only restart
//! when the deadline actually changes. All timers are cancelled on cleanup.

use leptos::prelude::*;
use protocol::StatusSnapshot;

use crate::components::chat_input::ChatInput;
use crate::components::chat_window::ChatWindow;
use crate::components::status_banner::StatusBanner;
use crate::components::trial_popup::TrialPopup;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::state::{session::SessionState, status::Countdowns};
#[cfg(feature = "hydrate")]
use crate::util::schedule::{CountdownTimer, IntervalSlot};

#[component]
pub fn ChatPage() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusSnapshot>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<RwSignal<SessionState>>();
        let countdowns = expect_context::<RwSignal<Countdowns>>();
        let refresh = StoredValue::new_local(IntervalSlot::default());
        // Effects first run after hydration, so the first client render
        // matches the anonymous server render.
        Effect::new(move |prev: Option<()>| {
            if prev.is_none() {
                untrack(|| start_session(session, status, ui, refresh));
            }
        });
        on_cleanup(move || {
            refresh.try_update_value(IntervalSlot::cancel);
        });
        start_countdowns(status, countdowns);
    }

    // A pending trial popup opens on the first status showing the active trial.
    Effect::new(move || {
        status.with(|snapshot| ui.maybe_update(|u| u.on_status(snapshot)));
    });

    let close_popup = Callback::new(move |()| ui.update(UiState::dismiss_trial_popup));

    view! {
        <div class="app-container">
            <div class="logo-header">
                <StatusBanner/>
            </div>
            <ChatWindow/>
            <ChatInput/>
            <Show when=move || ui.with(UiState::trial_popup_open)>
                <TrialPopup on_close=close_popup/>
            </Show>
        </div>
    }
}

/// Bootstrap identity, fetch status once, and schedule the periodic refresh.
#[cfg(feature = "hydrate")]
fn start_session(
    session: RwSignal<SessionState>,
    status: RwSignal<StatusSnapshot>,
    ui: RwSignal<UiState>,
    refresh: StoredValue<IntervalSlot, LocalStorage>,
) {
    use protocol::session::TOKEN_KEY;
    use protocol::sync::STATUS_REFRESH_INTERVAL_MS;
    use protocol::{KeyValueStore, LaunchParams, bootstrap};

    use crate::net::api::refresh_status;
    use crate::util::{clock, location, storage::BrowserStore};

    let params = LaunchParams::from_query(&location::current_query());
    let boot = bootstrap(&params, &mut BrowserStore, clock::now_ms());
    if boot.strip_url {
        location::strip_launch_params_from_address_bar();
    }
    if boot.token_stale {
        log::warn!("cached token is past its recorded expiry; using it until the backend rejects it");
    }
    if boot.trial_started {
        ui.update(UiState::arm_trial_popup);
    }
    if let Some(token) = boot.fetch_token.clone() {
        leptos::task::spawn_local(refresh_status(token, status));
    } else {
        log::info!("no token in launch URL or cache; billing status disabled");
    }
    session.update(|s| s.apply_bootstrap(&boot));

    refresh.update_value(|slot| {
        slot.start(STATUS_REFRESH_INTERVAL_MS, move || {
            if let Some(token) = BrowserStore.get(TOKEN_KEY) {
                leptos::task::spawn_local(refresh_status(token, status));
            }
        });
    });
}

/// Drive the trial and renewal countdowns from the status snapshot.
#[cfg(feature = "hydrate")]
fn start_countdowns(status: RwSignal<StatusSnapshot>, countdowns: RwSignal<Countdowns>) {
    let trial_target = Memo::new(move |_| status.with(StatusSnapshot::trial_countdown_target));
    let renewal_target = Memo::new(move |_| status.with(StatusSnapshot::subscription_countdown_target));

    let trial_timer = StoredValue::new_local(CountdownTimer::default());
    let renewal_timer = StoredValue::new_local(CountdownTimer::default());

    Effect::new(move || {
        let target = trial_target.get();
        trial_timer.update_value(|timer| {
            timer.sync(target, move |countdown| countdowns.update(|c| c.trial = countdown));
        });
    });
    Effect::new(move || {
        let target = renewal_target.get();
        renewal_timer.update_value(|timer| {
            timer.sync(target, move |countdown| countdowns.update(|c| c.subscription = countdown));
        });
    });

    on_cleanup(move || {
        trial_timer.try_update_value(CountdownTimer::stop);
        renewal_timer.try_update_value(CountdownTimer::stop);
    });
}
