//! Wire format and caller-facing data model for livestream status.
//!
//! The API wraps its payload in a success/error envelope with PascalCase
//! record fields. Everything here is transient: decoded, reshaped, and
//! handed to the caller within a single fetch.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LivestreamError;

/// Sentinel claim id for streams whose on-chain claim has not yet finalized.
/// Such streams must not be surfaced as live.
const CONFIRMING: &str = "Confirming";

/// Raw response envelope from the status endpoint.
///
/// Exactly one of "successful data" or "error-with-trace" is the meaningful
/// branch; every other combination is treated as an unhandled shape.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusEnvelope {
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<Vec<LivestreamRecord>>,
    #[serde(rename = "_trace")]
    pub trace: Option<Vec<String>>,
}

/// Raw per-stream record from the API.
#[derive(Debug, Deserialize)]
pub(crate) struct LivestreamRecord {
    #[serde(rename = "Start")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "ViewerCount")]
    pub viewer_count: u64,
    #[serde(rename = "ChannelClaimID")]
    pub channel_claim_id: String,
    #[serde(rename = "ActiveClaim")]
    pub active_claim: ActiveClaim,
}

/// The stream's content claim, as reported by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ActiveClaim {
    #[serde(rename = "ClaimID")]
    pub claim_id: String,
}

/// Live-status metadata for a single stream.
///
/// Keyed by the stream's active claim id in [`LivestreamMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LivestreamInfo {
    /// When the stream went live
    pub start_time: DateTime<Utc>,
    /// Current concurrent viewer count
    pub viewer_count: u64,
    /// Claim id of the broadcasting channel
    pub channel_claim_id: String,
}

impl LivestreamInfo {
    /// Elapsed time since the stream started, saturating at zero when the
    /// reported start lies in the future.
    pub fn started_ago(&self, now: DateTime<Utc>) -> std::time::Duration {
        (now - self.start_time).to_std().unwrap_or_default()
    }
}

/// Lookup table from active claim id to live-status metadata.
///
/// Built fresh per fetch; there is no cross-call caching.
pub type LivestreamMap = HashMap<String, LivestreamInfo>;

/// Returns the subset of `claim_ids` that is currently live, in caller
/// order, paired with the matching status metadata.
///
/// This is the join consumers perform to decorate already-loaded content
/// listings with "LIVE" badges and viewer counts.
pub fn live_entries_for<'a>(
    map: &'a LivestreamMap,
    claim_ids: impl IntoIterator<Item = &'a str>,
) -> Vec<(&'a str, &'a LivestreamInfo)> {
    claim_ids
        .into_iter()
        .filter_map(|id| map.get(id).map(|info| (id, info)))
        .collect()
}

impl StatusEnvelope {
    /// Classifies the envelope and reshapes the success branch into a map.
    ///
    /// Branches are checked in priority order: success-with-data, then
    /// error-with-trace, then the unhandled catch-all. No intent is inferred
    /// for shapes outside the first two.
    pub(crate) fn into_map(self) -> Result<LivestreamMap, LivestreamError> {
        match self {
            Self {
                success: true,
                error: None,
                data: Some(data),
                ..
            } => Ok(build_map(data)),
            Self {
                data: None,
                error: Some(message),
                trace: Some(trace),
                ..
            } => Err(LivestreamError::Remote { message, trace }),
            _ => Err(LivestreamError::UnhandledEnvelope),
        }
    }
}

/// Builds the claim-id lookup table from raw records.
///
/// Records still `Confirming` are dropped. Claim ids are expected to be
/// unique within one API snapshot; on a duplicate the later record wins.
fn build_map(records: Vec<LivestreamRecord>) -> LivestreamMap {
    let mut map = LivestreamMap::with_capacity(records.len());
    for record in records {
        if record.active_claim.claim_id == CONFIRMING {
            continue;
        }
        map.insert(
            record.active_claim.claim_id,
            LivestreamInfo {
                start_time: record.start_time,
                viewer_count: record.viewer_count,
                channel_claim_id: record.channel_claim_id,
            },
        );
    }
    map
}
