/// Shared application state
use catalog_core::ItemRepository;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Holds the one process-wide repository handle; cloning shares it.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}
