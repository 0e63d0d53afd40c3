//! Application state for the recap API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RecapConfig;

/// Shared application state.
///
/// Holds only the configuration; record and marker snapshots arrive with
/// each request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<RecapConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: RecapConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &RecapConfig {
        &self.config
    }
}
