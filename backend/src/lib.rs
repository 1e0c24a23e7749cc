pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod slots;
pub mod store;

use std::sync::Arc;

use crate::store::Store;

/// Shared application state available to all handlers via axum's State
/// extractor. The store is injected explicitly; there is no module-level
/// persistence handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub slot_interval_minutes: u16,
}

impl axum::extract::FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
