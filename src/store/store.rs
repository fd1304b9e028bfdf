//! The record store: visits, voice messages, resources and showcase items.

use std::collections::BTreeSet;
#[cfg(feature = "persist")]
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::logging;

use super::error::StoreError;
#[cfg(feature = "persist")]
use super::persist::StateSlot;
use super::types::{
    Resource, ResourceKind, ShowcaseItem, Snapshot, StoreState, Visit, VisitStatus, VoiceMessage,
};

/// Visits retained before the oldest entries are dropped.
const VISIT_CAP: usize = 1000;

/// Single source of truth for visit analytics, voice messages, downloadable
/// resources and showcase items.
///
/// Mutations apply in memory first, then flush the whole document to the
/// durable slot (write-through). An `Err` from a mutating call means the
/// flush failed; the in-memory change has already been applied and stands.
/// A store created with [`in_memory`](Self::in_memory) never errors.
///
/// Collaborators receive clones and snapshots, never references into the
/// collections.
pub struct RecordStore {
    state: StoreState,
    #[cfg(feature = "persist")]
    slot: Option<StateSlot>,
    clock_floor: u64,
}

impl RecordStore {
    /// Create a store with no durable slot.
    pub fn in_memory() -> Self {
        Self {
            state: StoreState::default(),
            #[cfg(feature = "persist")]
            slot: None,
            clock_floor: 0,
        }
    }

    /// Open a store backed by a durable slot at `path`, reloading any
    /// previously persisted state.
    #[cfg(feature = "persist")]
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let slot = StateSlot::open(path)?;
        let state = slot.load()?.unwrap_or_default();
        let clock_floor = latest_timestamp(&state);
        logging::info!(
            path = %path.display(),
            visits = state.visits.len(),
            "opened record store"
        );
        Ok(Self {
            state,
            slot: Some(slot),
            clock_floor,
        })
    }

    /// Record a page access. The new visit goes to the head of the sequence
    /// (most-recent-first); entries beyond the retention cap fall off the
    /// tail. Its status reflects current frozen-set membership.
    pub fn record_visit(
        &mut self,
        ip: impl Into<String>,
        path: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Visit, StoreError> {
        let ip = ip.into();
        let status = if self.state.frozen_ips.contains(&ip) {
            VisitStatus::Frozen
        } else {
            VisitStatus::Active
        };
        let visit = Visit {
            id: fresh_id(),
            ip,
            path: path.into(),
            user_agent: user_agent.into(),
            timestamp: self.next_timestamp(),
            status,
        };
        self.state.visits.insert(0, visit.clone());
        self.state.visits.truncate(VISIT_CAP);
        self.flush()?;
        Ok(visit)
    }

    /// Record a voice message. Most-recent-first, unbounded.
    pub fn record_message(
        &mut self,
        audio_url: impl Into<String>,
        duration: f64,
    ) -> Result<VoiceMessage, StoreError> {
        let message = VoiceMessage {
            id: fresh_id(),
            audio_url: audio_url.into(),
            duration,
            timestamp: self.next_timestamp(),
        };
        self.state.messages.insert(0, message.clone());
        self.flush()?;
        Ok(message)
    }

    /// Add `ip` to the frozen set and mark every recorded visit from it as
    /// frozen, including visits recorded before this call. Idempotent. The
    /// rewrite is unconditional, so it overwrites any manual status toggle.
    pub fn freeze(&mut self, ip: &str) -> Result<(), StoreError> {
        self.state.frozen_ips.insert(ip.to_string());
        for visit in self.state.visits.iter_mut().filter(|v| v.ip == ip) {
            visit.status = VisitStatus::Frozen;
        }
        logging::debug!(ip = ip, "froze address");
        self.flush()
    }

    /// Remove `ip` from the frozen set and mark every recorded visit from it
    /// as active. Idempotent; overwrites any manual status toggle.
    pub fn unfreeze(&mut self, ip: &str) -> Result<(), StoreError> {
        self.state.frozen_ips.remove(ip);
        for visit in self.state.visits.iter_mut().filter(|v| v.ip == ip) {
            visit.status = VisitStatus::Active;
        }
        logging::debug!(ip = ip, "unfroze address");
        self.flush()
    }

    /// Whether `ip` is currently in the frozen set.
    pub fn is_frozen(&self, ip: &str) -> bool {
        self.state.frozen_ips.contains(ip)
    }

    /// Add a downloadable resource with a zeroed download counter.
    /// Most-recent-first.
    pub fn add_resource(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
        size: u64,
    ) -> Result<Resource, StoreError> {
        let resource = Resource {
            id: fresh_id(),
            name: name.into(),
            url: url.into(),
            kind,
            size,
            downloads: 0,
            uploaded_at: self.next_timestamp(),
        };
        self.state.resources.insert(0, resource.clone());
        self.flush()?;
        Ok(resource)
    }

    /// Delete the resource with the given id. Absent ids are a no-op.
    pub fn remove_resource(&mut self, id: &str) -> Result<(), StoreError> {
        self.state.resources.retain(|r| r.id != id);
        self.flush()
    }

    /// Bump the download counter of the matching resource. Absent ids are a
    /// no-op.
    pub fn increment_download(&mut self, id: &str) -> Result<(), StoreError> {
        if let Some(resource) = self.state.resources.iter_mut().find(|r| r.id == id) {
            resource.downloads += 1;
        }
        self.flush()
    }

    /// Append a showcase item. Unlike visits, messages and resources, the
    /// showcase keeps authoring order: new items go to the tail.
    pub fn add_showcase_item(
        &mut self,
        title: impl Into<String>,
        image: Option<String>,
    ) -> Result<ShowcaseItem, StoreError> {
        let item = ShowcaseItem {
            id: fresh_id(),
            title: title.into(),
            image,
        };
        self.state.showcase_items.push(item.clone());
        self.flush()?;
        Ok(item)
    }

    /// Delete the showcase item with the given id. Absent ids are a no-op.
    pub fn remove_showcase_item(&mut self, id: &str) -> Result<(), StoreError> {
        self.state.showcase_items.retain(|item| item.id != id);
        self.flush()
    }

    /// Set the image of the matching showcase item. Absent ids are a no-op.
    pub fn set_showcase_image(
        &mut self,
        id: &str,
        image: impl Into<String>,
    ) -> Result<(), StoreError> {
        if let Some(item) = self.state.showcase_items.iter_mut().find(|item| item.id == id) {
            item.image = Some(image.into());
        }
        self.flush()
    }

    /// Flip a single visit's status without touching the frozen set.
    ///
    /// This is a manual override for one record, distinct from
    /// [`freeze`](Self::freeze)/[`unfreeze`](Self::unfreeze): a later mass
    /// update on the same address rewrites the record again. Absent ids are
    /// a no-op.
    pub fn toggle_visit_status(&mut self, id: &str) -> Result<(), StoreError> {
        if let Some(visit) = self.state.visits.iter_mut().find(|v| v.id == id) {
            visit.status = visit.status.toggled();
        }
        self.flush()
    }

    /// Materialize a read-only view of every collection plus derived counts.
    pub fn snapshot(&self) -> Snapshot {
        let unique_ips: BTreeSet<&str> = self.state.visits.iter().map(|v| v.ip.as_str()).collect();
        Snapshot {
            visits: self.state.visits.clone(),
            messages: self.state.messages.clone(),
            resources: self.state.resources.clone(),
            showcase_items: self.state.showcase_items.clone(),
            frozen_ips: self.state.frozen_ips.iter().cloned().collect(),
            total_visits: self.state.visits.len(),
            unique_ip_count: unique_ips.len(),
            message_count: self.state.messages.len(),
            frozen_count: self.state.frozen_ips.len(),
        }
    }

    /// Timestamps are wall-clock milliseconds, clamped so insertion order is
    /// never decreasing even if the clock steps backwards.
    fn next_timestamp(&mut self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.clock_floor = now.max(self.clock_floor);
        self.clock_floor
    }

    fn flush(&self) -> Result<(), StoreError> {
        #[cfg(feature = "persist")]
        if let Some(slot) = &self.slot {
            slot.save(&self.state)?;
        }
        Ok(())
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Highest timestamp in a loaded document, used to seed the clock floor.
#[cfg(feature = "persist")]
fn latest_timestamp(state: &StoreState) -> u64 {
    let visits = state.visits.iter().map(|v| v.timestamp);
    let messages = state.messages.iter().map(|m| m.timestamp);
    let resources = state.resources.iter().map(|r| r.uploaded_at);
    visits.chain(messages).chain(resources).max().unwrap_or(0)
}
