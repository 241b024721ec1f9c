//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (the trial popup) out of the
//! session and status containers.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use protocol::StatusSnapshot;

/// Lifecycle of the one-shot "trial started" popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrialPopup {
    /// The landing URL did not announce a new trial.
    #[default]
    Idle,
    /// Announced; waiting for a status showing the active trial.
    Pending,
    Open,
    Dismissed,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub trial_popup: TrialPopup,
}

impl UiState {
    /// Remember that the landing URL carried `trialStarted`.
    pub fn arm_trial_popup(&mut self) {
        if self.trial_popup == TrialPopup::Idle {
            self.trial_popup = TrialPopup::Pending;
        }
    }

    /// Open a pending popup once the active trial has loaded.
    ///
    /// Returns whether the state changed.
    pub fn on_status(&mut self, snapshot: &StatusSnapshot) -> bool {
        let trial_active = snapshot.trial.as_ref().is_some_and(|t| t.is_trial_active);
        if self.trial_popup == TrialPopup::Pending && trial_active {
            self.trial_popup = TrialPopup::Open;
            return true;
        }
        false
    }

    pub fn dismiss_trial_popup(&mut self) {
        if self.trial_popup == TrialPopup::Open {
            self.trial_popup = TrialPopup::Dismissed;
        }
    }

    pub fn trial_popup_open(&self) -> bool {
        self.trial_popup == TrialPopup::Open
    }
}

/// Popup body line, e.g. "Your free trial expires in 7 days".
pub fn trial_popup_message(days_remaining: i64) -> String {
    format!("Your free trial expires in {}", protocol::billing::days_phrase(days_remaining))
}

/// Keys that close the popup from anywhere in the window.
pub fn dismisses_popup(key: &str) -> bool {
    key == "Escape"
}
