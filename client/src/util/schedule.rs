//! Owned interval timers for countdown ticks and status refresh.
//!
//! Each periodic job lives in an [`IntervalSlot`]. Starting a slot replaces
//! whatever it was running, and dropping or cancelling it clears the
//! underlying `setInterval`. Outside the browser the slot only tracks whether
//! it would be running, which is enough for the control logic to be tested.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use protocol::sync::COUNTDOWN_TICK_MS;
use protocol::{Countdown, calculate_countdown};
use time::OffsetDateTime;

use super::clock;

#[cfg(feature = "hydrate")]
type Handle = gloo_timers::callback::Interval;
#[cfg(not(feature = "hydrate"))]
type Handle = ();

/// A single repeating timer that is cancelled on drop.
#[derive(Default)]
pub struct IntervalSlot {
    active: Option<Handle>,
}

impl IntervalSlot {
    /// Run `tick` every `period_ms`, replacing any running timer.
    pub fn start<F>(&mut self, period_ms: u32, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.cancel();
        #[cfg(feature = "hydrate")]
        {
            self.active = Some(gloo_timers::callback::Interval::new(period_ms, tick));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period_ms, tick);
            self.active = Some(());
        }
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }
}

/// What a countdown timer must do when its target changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerControl {
    /// Same target: keep the running tick.
    Keep,
    /// New or changed target: (re)start ticking toward it.
    Start(OffsetDateTime),
    /// Target gone: release the timer.
    Stop,
}

pub fn timer_control(current: Option<OffsetDateTime>, next: Option<OffsetDateTime>) -> TimerControl {
    match (current, next) {
        (_, None) => TimerControl::Stop,
        (Some(current), Some(next)) if current == next => TimerControl::Keep,
        (_, Some(next)) => TimerControl::Start(next),
    }
}

/// One-second countdown toward a target that may change over time.
#[derive(Default)]
pub struct CountdownTimer {
    target: Option<OffsetDateTime>,
    slot: IntervalSlot,
}

impl CountdownTimer {
    /// Follow `next`, publishing a fresh countdown on every tick.
    ///
    /// `publish(None)` is sent once when the timer stops.
    pub fn sync<F>(&mut self, next: Option<OffsetDateTime>, publish: F)
    where
        F: Fn(Option<Countdown>) + 'static,
    {
        match timer_control(self.target, next) {
            TimerControl::Keep => {}
            TimerControl::Stop => {
                self.stop();
                publish(None);
            }
            TimerControl::Start(target) => {
                self.target = Some(target);
                publish(Some(calculate_countdown(target, clock::now())));
                self.slot
                    .start(COUNTDOWN_TICK_MS, move || publish(Some(calculate_countdown(target, clock::now()))));
            }
        }
    }

    pub fn stop(&mut self) {
        self.slot.cancel();
        self.target = None;
    }

    pub fn target(&self) -> Option<OffsetDateTime> {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.slot.is_running()
    }
}
