//! Shared application state.

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Largest `ancestorIds` set accepted in a sanitize request.
    pub max_ancestor_ids: usize,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(max_ancestor_ids: usize) -> Self {
        Self { max_ancestor_ids }
    }

    /// Derive state from server configuration.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.max_ancestor_ids)
    }
}
