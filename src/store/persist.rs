//! Durable slot persistence backed by fjall.
//!
//! The whole store state lives in one named slot: a JSON document under
//! `archive-storage`, a CRC32 of that document under a sibling key, and a
//! format version under `config`. Writes persist with `PersistMode::SyncAll`,
//! so an acknowledged mutation survives a crash.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging;

use super::error::StoreError;
use super::types::StoreState;

/// Keyspace holding the slot.
const STATE_KEYSPACE: &str = "state";

/// Slot key for the serialized store document.
const STATE_SLOT_KEY: &str = "archive-storage";

/// Sibling key holding the CRC32 of the document.
const STATE_CRC_KEY: &str = "archive-storage.crc";

/// Format version key.
const META_CONFIG_KEY: &str = "config";

/// Current slot format version.
const SLOT_VERSION: u32 = 1;

/// Durable slot for the store document.
pub(crate) struct StateSlot {
    db: fjall::Database,
    state: Keyspace,
}

impl StateSlot {
    /// Open the slot at the given path, initializing it on first use.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = fjall::Database::builder(path).open()?;
        let state = db.keyspace(STATE_KEYSPACE, KeyspaceCreateOptions::default)?;

        // Verify slot version, or stamp it on a fresh slot
        if let Some(config) = state.get(META_CONFIG_KEY)? {
            let version = u32::from_le_bytes(
                config
                    .as_ref()
                    .try_into()
                    .map_err(|_| StoreError::InvalidFormat("Invalid config format".to_string()))?,
            );
            if version != SLOT_VERSION {
                return Err(StoreError::InvalidFormat(format!(
                    "Slot version mismatch: expected {}, got {}",
                    SLOT_VERSION, version
                )));
            }
        } else {
            state.insert(META_CONFIG_KEY, SLOT_VERSION.to_le_bytes())?;
            db.persist(PersistMode::SyncAll)?;
        }

        Ok(Self { db, state })
    }

    /// Load the persisted document, if any.
    pub fn load(&self) -> Result<Option<StoreState>, StoreError> {
        let Some(buffer) = self.state.get(STATE_SLOT_KEY)? else {
            return Ok(None);
        };

        match self.state.get(STATE_CRC_KEY)? {
            Some(crc) => {
                let stored = u32::from_le_bytes(crc.as_ref().try_into().map_err(|_| {
                    StoreError::InvalidFormat("Invalid checksum format".to_string())
                })?);
                let computed = crc32fast::hash(buffer.as_ref());
                if stored != computed {
                    return Err(StoreError::InvalidFormat(format!(
                        "Checksum mismatch for slot '{}': stored {:08x}, computed {:08x}",
                        STATE_SLOT_KEY, stored, computed
                    )));
                }
            }
            None => {
                logging::warn!(slot = STATE_SLOT_KEY, "persisted document has no checksum");
            }
        }

        let state = serde_json::from_slice(buffer.as_ref())?;
        logging::debug!(slot = STATE_SLOT_KEY, "loaded persisted store state");
        Ok(Some(state))
    }

    /// Serialize and durably write the document.
    pub fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        let buffer = serde_json::to_vec(state)?;
        let crc = crc32fast::hash(&buffer);

        self.state.insert(STATE_SLOT_KEY, buffer.as_slice())?;
        self.state.insert(STATE_CRC_KEY, crc.to_le_bytes())?;
        self.db.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}
