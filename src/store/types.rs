//! Data types owned by the record store.
//!
//! Wire and persisted field names are camelCase; timestamps are Unix
//! milliseconds assigned by the store.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Whether a visit's originating address is currently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Active,
    Frozen,
}

impl VisitStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Frozen,
            Self::Frozen => Self::Active,
        }
    }
}

/// One recorded page access event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: String,
    /// Originating network address as reported by the client. Not validated.
    pub ip: String,
    pub path: String,
    pub user_agent: String,
    pub timestamp: u64,
    pub status: VisitStatus,
}

/// A recorded voice message pointing at externally stored audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceMessage {
    pub id: String,
    pub audio_url: String,
    /// Length in seconds.
    pub duration: f64,
    pub timestamp: u64,
}

/// Kind of an uploaded or linked downloadable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Image,
    Pdf,
    Archive,
    Other,
}

/// A downloadable asset with a usage counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Size in bytes.
    pub size: u64,
    pub downloads: u64,
    pub uploaded_at: u64,
}

/// A curated display entry. The showcase keeps authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The persisted document: every collection the store owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreState {
    pub visits: Vec<Visit>,
    pub messages: Vec<VoiceMessage>,
    pub resources: Vec<Resource>,
    pub showcase_items: Vec<ShowcaseItem>,
    pub frozen_ips: BTreeSet<String>,
}

/// Fully-materialized read view of all collections plus derived counts.
///
/// Counts are computed from the collections at call time, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub visits: Vec<Visit>,
    pub messages: Vec<VoiceMessage>,
    pub resources: Vec<Resource>,
    pub showcase_items: Vec<ShowcaseItem>,
    pub frozen_ips: Vec<String>,
    pub total_visits: usize,
    /// Distinct `ip` values across all visits, regardless of status.
    #[serde(rename = "uniqueIPCount")]
    pub unique_ip_count: usize,
    pub message_count: usize,
    pub frozen_count: usize,
}
