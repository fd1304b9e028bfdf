//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring all commonly used types
//! into scope.
//!
//! # Example
//!
//! ```ignore
//! use archive_store::prelude::*;
//!
//! let mut store = RecordStore::in_memory();
//! store.record_visit("203.0.113.7", "/", "Mozilla/5.0")?;
//! store.add_showcase_item("First frame", None)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Store types
pub use crate::store::{
    RecordStore, Resource, ResourceKind, ShowcaseItem, Snapshot, StoreError, Visit, VisitStatus,
    VoiceMessage,
};

// Server types (requires "server" feature)
#[cfg(feature = "server")]
pub use crate::server::{router, AppState, Config};
