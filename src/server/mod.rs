//! HTTP API server for archive-store.
//!
//! This module provides an HTTP API on top of the record store using axum:
//! one action per store operation, JSON in and out, backed by the same
//! [`RecordStore`](crate::store::RecordStore) the in-process interface uses.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{
    Config, ConfigError, CorsConfig, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
};
pub use error::ApiError;
pub use logging::{init as init_logging, LoggingError};
pub use routes::router;
pub use state::{AppState, StateError};
