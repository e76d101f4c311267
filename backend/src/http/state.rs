//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::config::ControlSettings;
use crate::db::LaunchDataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable dataset loaded at startup
    pub dataset: Arc<LaunchDataset>,
    /// Slider step and page title
    pub controls: ControlSettings,
}

impl AppState {
    /// Create a new application state with the given dataset.
    pub fn new(dataset: Arc<LaunchDataset>, controls: ControlSettings) -> Self {
        Self { dataset, controls }
    }
}
