//! Application state management.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::store::{RecordStore, StoreError};

use super::config::Config;

/// Shared application state.
///
/// Every request takes one lock for the full duration of its store
/// operation, so multi-record mutations (a freeze-triggered status rewrite,
/// the retention truncation) are atomic to readers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    /// Create a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let store = if config.storage.ephemeral {
            RecordStore::in_memory()
        } else {
            let path = std::path::Path::new(&config.storage.path);
            RecordStore::open(path).map_err(|e| StateError::OpenStore {
                path: config.storage.path.clone(),
                source: e,
            })?
        };
        Ok(Self::new(store))
    }

    /// Wrap an already constructed store.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the store for the duration of one operation.
    pub async fn store(&self) -> MutexGuard<'_, RecordStore> {
        self.store.lock().await
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open the durable store.
    OpenStore { path: String, source: StoreError },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenStore { path, source } => {
                write!(f, "Failed to open store at '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {}
