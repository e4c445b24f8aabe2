//! Application state for API handlers

use std::sync::Arc;

use crate::controller::SelectionController;

/// Shared application state. Everything in it is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<SelectionController>,
}

impl AppState {
    pub fn new(controller: SelectionController) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}
