use std::sync::Arc;

use crate::db::PlayerStore;

/// Shared by every handler. Built before the listener binds and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlayerStore>,
}

impl AppState {
    pub fn new(store: PlayerStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
