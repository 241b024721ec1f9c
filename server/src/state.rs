//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries the upstream client; the server keeps no per-user state.

use std::sync::Arc;

use crate::proxy::Upstream;

#[derive(Clone, Default)]
pub struct AppState {
    /// Backend client. `None` when `FLORA_UPSTREAM_URL` is not configured.
    pub upstream: Option<Arc<Upstream>>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Option<Upstream>) -> Self {
        Self { upstream: upstream.map(Arc::new) }
    }
}
