//! Record store module: the shared mutable data model behind the site.
//!
//! One implementation serves both the in-process call interface and the
//! HTTP server, so the two can never drift apart. State persists to a
//! single named durable slot and reloads on startup.

mod error;
#[cfg(feature = "persist")]
mod persist;
mod store;
mod types;

pub use error::StoreError;
pub use store::RecordStore;
pub use types::{
    Resource, ResourceKind, ShowcaseItem, Snapshot, Visit, VisitStatus, VoiceMessage,
};
