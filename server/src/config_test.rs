use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("FLORA_UPSTREAM_URL");
        std::env::remove_var("FLORA_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("FLORA_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_lock();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, None);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("FLORA_UPSTREAM_URL", "https://api.flora.test/");
        std::env::set_var("FLORA_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("FLORA_CONNECT_TIMEOUT_SECS", "3");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url.as_deref(), Some("https://api.flora.test"));
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 30, connect_secs: 3 });

    unsafe { clear_server_env() };
}

#[test]
fn malformed_timeouts_fall_back_to_defaults() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("FLORA_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(p)) if p == "http"));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort(_))));
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
    assert_eq!(parse_port(Some("")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_upstream_requires_http_scheme() {
    assert!(matches!(parse_upstream(Some("api.flora.test")), Err(ConfigError::InvalidUpstream(_))));
    assert_eq!(parse_upstream(Some("http://localhost:8000")).unwrap().as_deref(), Some("http://localhost:8000"));
    assert_eq!(parse_upstream(Some("  ")).unwrap(), None);
}
