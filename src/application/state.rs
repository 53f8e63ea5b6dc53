// src/application/state.rs

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::services::MovieStore;

/// Handle the presentation layer holds for one session.
/// Cloning shares the same store.
#[derive(Clone)]
pub struct AppState {
    pub movie_store: Arc<MovieStore>,
}

impl AppState {
    pub fn new(movie_store: Arc<MovieStore>) -> Self {
        Self { movie_store }
    }

    /// Fresh in-memory session built from `config`
    pub fn from_config(config: StoreConfig) -> Self {
        Self::new(Arc::new(MovieStore::in_memory(config)))
    }
}
