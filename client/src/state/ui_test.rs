use super::*;
use protocol::TrialStatus;

fn active(days: i64) -> StatusSnapshot {
    let mut snapshot = StatusSnapshot::default();
    snapshot.apply(TrialStatus { is_trial_active: true, days_remaining: days, ..TrialStatus::default() }, None);
    snapshot
}

#[test]
fn popup_stays_closed_without_announcement() {
    let mut ui = UiState::default();
    assert!(!ui.on_status(&active(7)));
    assert!(!ui.trial_popup_open());
}

#[test]
fn popup_waits_for_active_trial() {
    let mut ui = UiState::default();
    ui.arm_trial_popup();
    assert!(!ui.on_status(&StatusSnapshot::default()));
    assert_eq!(ui.trial_popup, TrialPopup::Pending);

    assert!(ui.on_status(&active(7)));
    assert!(ui.trial_popup_open());
}

#[test]
fn popup_opens_only_once() {
    let mut ui = UiState::default();
    ui.arm_trial_popup();
    ui.on_status(&active(7));
    ui.dismiss_trial_popup();

    ui.arm_trial_popup();
    assert!(!ui.on_status(&active(6)));
    assert_eq!(ui.trial_popup, TrialPopup::Dismissed);
}

#[test]
fn popup_message_pluralizes_days() {
    assert_eq!(trial_popup_message(7), "Your free trial expires in 7 days");
    assert_eq!(trial_popup_message(1), "Your free trial expires in 1 day");
}

#[test]
fn only_escape_dismisses_popup_from_keyboard() {
    assert!(dismisses_popup("Escape"));
    assert!(!dismisses_popup("Enter"));
    assert!(!dismisses_popup("Esc"));
}
