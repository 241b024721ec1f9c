//! Signed-in identity as seen by the UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use protocol::{Bootstrap, Identity};

/// Identity resolved at bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Identity,
    /// Set once bootstrap has run in the browser.
    pub ready: bool,
}

impl SessionState {
    pub fn from_bootstrap(boot: &Bootstrap) -> Self {
        Self { identity: boot.identity.clone(), ready: true }
    }

    /// Adopt the bootstrap outcome. Runs after hydration; until then the
    /// session stays anonymous, as it is on the server.
    pub fn apply_bootstrap(&mut self, boot: &Bootstrap) {
        *self = Self::from_bootstrap(boot);
    }

    /// Header label for the current user.
    pub fn greeting(&self) -> Option<String> {
        self.identity.display_name().map(|name| format!("Signed in as {name}"))
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.token.as_deref()
    }
}
