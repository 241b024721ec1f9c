use super::*;
use protocol::{KeyValueStore, LaunchParams, MemoryStore, bootstrap};

#[test]
fn default_session_is_anonymous_and_not_ready() {
    let session = SessionState::default();
    assert!(!session.ready);
    assert_eq!(session.greeting(), None);
    assert_eq!(session.token(), None);
}

#[test]
fn from_bootstrap_carries_identity() {
    let mut store = MemoryStore::default();
    let boot = bootstrap(&LaunchParams::from_query("?token=abc&name=Ana"), &mut store, 0);
    let session = SessionState::from_bootstrap(&boot);
    assert!(session.ready);
    assert_eq!(session.token(), Some("abc"));
    assert_eq!(session.greeting().as_deref(), Some("Signed in as Ana"));
}

#[test]
fn session_stays_anonymous_until_bootstrap_is_applied() {
    let mut store = MemoryStore::default();
    store.set(protocol::session::USER_NAME_KEY, "Ana");
    let boot = bootstrap(&LaunchParams::default(), &mut store, 0);

    let mut session = SessionState::default();
    assert_eq!(session, SessionState::default());
    assert_eq!(session.greeting(), None);

    session.apply_bootstrap(&boot);
    assert!(session.ready);
    assert_eq!(session.greeting().as_deref(), Some("Signed in as Ana"));
}
