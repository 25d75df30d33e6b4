use std::sync::Arc;

use crate::config::Config;
use session_store::{SessionStore, Storage};
use upstream::BackendClient;

pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
    pub store: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = SessionStore::in_memory();
        Self::with_storage_facade(config, store)
    }

    /// Same state with a caller-supplied storage backend.
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> anyhow::Result<Self> {
        Self::with_storage_facade(config, SessionStore::new(storage))
    }

    fn with_storage_facade(config: Config, store: SessionStore) -> anyhow::Result<Self> {
        let backend = BackendClient::new(&config.backend_url)?;
        tracing::info!("Question backend configured at {}", backend.base_url());

        Ok(Self {
            config,
            backend,
            store,
        })
    }
}

pub mod evaluator;
pub mod fallback;
pub mod question_service;
pub mod session_store;
pub mod upstream;
