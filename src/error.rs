//! Unified error type for the archive-store library.

use thiserror::Error;

use crate::store::StoreError;

/// Unified error type for all archive-store operations.
///
/// # Example
///
/// ```ignore
/// use archive_store::{RecordStore, Result};
///
/// fn do_something() -> Result<()> {
///     let mut store = RecordStore::open(std::path::Path::new(".archive-store"))?;
///     store.freeze("203.0.113.7")?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error from record store persistence.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a store persistence error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
