//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::data::CalendarDataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Calendar data, loaded once and never mutated
    pub dataset: Arc<CalendarDataset>,
    /// Directory served at `/`, if any
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create a new application state around the given dataset.
    pub fn new(dataset: Arc<CalendarDataset>) -> Self {
        Self {
            dataset,
            static_dir: None,
        }
    }

    /// Serve static files from `dir` for any path outside the API.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}
