//! Identity bootstrap: reconcile launch URL parameters with the persisted cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! Users land on the widget either straight from the external auth redirect
//! (`?token=...&name=...&email=...&trialStarted=true`) or on a return visit
//! with nothing in the URL. [`bootstrap`] decides, without touching the
//! browser, what to persist, which token to fetch status with, and whether the
//! visible URL needs cleaning.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

pub const TOKEN_KEY: &str = "token";
pub const TOKEN_EXPIRATION_KEY: &str = "tokenExpiration";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Lifetime stamped onto a freshly received token.
pub const TOKEN_TTL_MS: i64 = 3_600_000;

/// Query parameters consumed on load and stripped from the address bar.
pub const LAUNCH_PARAMS: [&str; 4] = ["token", "name", "email", "trialStarted"];

/// String key/value cache the identity is persisted in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`KeyValueStore`], used where no browser storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Launch parameters read from the page URL. Empty values count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchParams {
    pub token: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub trial_started: Option<String>,
    /// A launch key appeared in the URL, even with an empty value.
    pub key_seen: bool,
}

impl LaunchParams {
    /// Parse a `location.search` string, with or without the leading `?`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let slot = match &*key {
                "token" => &mut params.token,
                "name" => &mut params.name,
                "email" => &mut params.email,
                "trialStarted" => &mut params.trial_started,
                _ => continue,
            };
            params.key_seen = true;
            if !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    #[must_use]
    pub fn any_present(&self) -> bool {
        self.key_seen || self.token.is_some() || self.name.is_some() || self.email.is_some() || self.trial_started.is_some()
    }

    /// Whether the auth redirect announced a freshly started trial.
    #[must_use]
    pub fn trial_started(&self) -> bool {
        self.trial_started
            .as_deref()
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
    }
}

/// Identity fields as currently held in the cache.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    /// Epoch milliseconds written alongside the token.
    pub token_expires_at_ms: Option<i64>,
}

impl Identity {
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            name: store.get(USER_NAME_KEY).filter(|v| !v.is_empty()),
            email: store.get(USER_EMAIL_KEY).filter(|v| !v.is_empty()),
            token: store.get(TOKEN_KEY).filter(|v| !v.is_empty()),
            token_expires_at_ms: store
                .get(TOKEN_EXPIRATION_KEY)
                .and_then(|v| v.trim().parse::<i64>().ok()),
        }
    }

    /// Whether the stamped expiry has passed. Tokens without a stamp never expire.
    #[must_use]
    pub fn token_expired(&self, now_ms: i64) -> bool {
        self.token_expires_at_ms.is_some_and(|at| at <= now_ms)
    }

    /// Best label for the signed-in user, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

/// Outcome of [`bootstrap`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bootstrap {
    pub identity: Identity,
    /// Token the initial status fetch should use.
    pub fetch_token: Option<String>,
    /// Whether the address bar must be rewritten without the launch parameters.
    pub strip_url: bool,
    pub trial_started: bool,
    /// The cached token carries an expiry stamp that has already passed.
    pub token_stale: bool,
}

/// Seed the identity from launch parameters, falling back to the cache.
///
/// URL values always overwrite cached ones. A URL token is persisted together
/// with a fresh `now_ms + TOKEN_TTL_MS` expiry stamp.
pub fn bootstrap(params: &LaunchParams, store: &mut impl KeyValueStore, now_ms: i64) -> Bootstrap {
    if let Some(token) = &params.token {
        store.set(TOKEN_KEY, token);
        store.set(TOKEN_EXPIRATION_KEY, &(now_ms + TOKEN_TTL_MS).to_string());
    }
    if let Some(name) = &params.name {
        store.set(USER_NAME_KEY, name);
    }
    if let Some(email) = &params.email {
        store.set(USER_EMAIL_KEY, email);
    }

    let identity = Identity::load(&*store);
    Bootstrap {
        fetch_token: identity.token.clone(),
        token_stale: params.token.is_none() && identity.token.is_some() && identity.token_expired(now_ms),
        strip_url: params.any_present(),
        trial_started: params.trial_started(),
        identity,
    }
}

/// Remove the launch parameters from a query string.
///
/// Other parameters are kept exactly as written. Returns the remaining query
/// with its leading `?`, or an empty string when nothing is left.
#[must_use]
pub fn strip_launch_params(query: &str) -> String {
    let kept: Vec<&str> = query
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty() && !is_launch_param(segment))
        .collect();
    if kept.is_empty() {
        return String::new();
    }
    format!("?{}", kept.join("&"))
}

fn is_launch_param(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| LAUNCH_PARAMS.contains(&&*key))
}
