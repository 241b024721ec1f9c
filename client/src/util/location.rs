//! Address bar access for the launch parameters.
//!
//! The auth redirect lands with `?token=...&name=...` in the URL. After the
//! values are cached they are removed with `history.replaceState`, so neither
//! a reload nor the back button replays them.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use protocol::session::strip_launch_params;

/// Rebuild a same-page URL without the launch parameters.
pub fn cleaned_url(path: &str, query: &str, hash: &str) -> String {
    format!("{path}{}{hash}", strip_launch_params(query))
}

/// Current `location.search`, including the leading `?`.
pub fn current_query() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Replace the current history entry with the launch parameters removed.
pub fn strip_launch_params_from_address_bar() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let query = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = cleaned_url(&path, &query, &hash);
        if let Ok(history) = window.history() {
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
                log::warn!("could not rewrite address bar: {e:?}");
            }
        }
    }
}
