//! Error types for the record store module.

use thiserror::Error;

/// Errors that can occur while persisting or reloading store state.
///
/// Mutations themselves are total: an error returned from a mutating call
/// means the in-memory change was applied but the durable flush failed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "persist")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
