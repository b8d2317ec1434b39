//! Explicitly injected application context.
//!
//! ARCHITECTURE
//! ============
//! `App` builds one `AppContext` and passes it as a prop to `RootLayout`,
//! which hands it to `Providers` and `Navigation`. `Providers` scopes it for
//! route-level pages only, because the router constructs those itself.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::session::SessionState;

/// Shared, cheaply clonable handle to site configuration and session state.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Arc<SiteConfig>,
    pub session: RwSignal<SessionState>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        Self::from_shared(Arc::new(config))
    }

    /// Context over a config that is already shared with the document shell.
    pub fn from_shared(config: Arc<SiteConfig>) -> Self {
        Self { config, session: RwSignal::new(SessionState::default()) }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
