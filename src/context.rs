//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos_contextmenu::MenuSignals;

use crate::config::ApiConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Server endpoints
    pub api: ApiConfig,
    /// Right-click menu visibility and placement
    pub menu: MenuSignals,
}

impl AppContext {
    pub fn new(api: ApiConfig, menu: MenuSignals) -> Self {
        Self { api, menu }
    }
}
