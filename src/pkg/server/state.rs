use std::sync::Arc;

use crate::{conf::Settings, pkg::internal::store::JobStore};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<JobStore>,
}

impl AppState {
    pub fn new(conf: &Settings) -> AppState {
        let store = if conf.seed_store {
            JobStore::seeded()
        } else {
            JobStore::empty()
        };
        tracing::debug!(
            "store seeded: {}, latency: {}ms",
            conf.seed_store,
            conf.store_latency_ms
        );
        AppState::with_store(store.with_latency(conf.store_latency()))
    }

    pub fn with_store(store: JobStore) -> AppState {
        AppState {
            store: Arc::new(store),
        }
    }
}
