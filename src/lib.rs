//! Record store and admin API behind a personal site.
//!
//! This library is the single source of truth for the site's admin state:
//! visit analytics, the frozen address list, uploaded resources, showcase
//! items and voice messages. The same [`RecordStore`] serves a direct
//! in-process call interface and, behind the `server` feature, an HTTP API
//! with one action per store operation.
//!
//! # Quick Start
//!
//! ```ignore
//! use archive_store::prelude::*;
//!
//! // Open a store backed by a durable slot
//! let mut store = RecordStore::open(std::path::Path::new(".archive-store"))?;
//!
//! // Record a visit and freeze its address
//! let visit = store.record_visit("203.0.113.7", "/mindspace", "Mozilla/5.0")?;
//! store.freeze("203.0.113.7")?;
//! assert!(store.is_frozen("203.0.113.7"));
//!
//! // Read everything back, with derived counts
//! let snapshot = store.snapshot();
//! ```
//!
//! # Modules
//!
//! - [`store`] - The record store and its data types (always available)
//! - [`server`] - HTTP API on top of the store (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `persist` - Durable slot persistence backed by fjall (enabled by default)
//! - `logging` - Library-level tracing (consumers provide their own subscriber)
//! - `server` - The HTTP API server and its binary
//! - `full` - Enable all features

mod logging;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export store types at crate root for convenience
pub use store::{
    RecordStore, Resource, ResourceKind, ShowcaseItem, Snapshot, StoreError, Visit, VisitStatus,
    VoiceMessage,
};
