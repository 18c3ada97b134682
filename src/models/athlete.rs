//! Athlete document for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityRecord;

/// Per-athlete document stored in Firestore (also the `GET /data` shape).
///
/// Replaced wholesale on every accepted submission: the new value is always
/// the union of previous and incoming activities, deduped and cutoff-filtered,
/// never a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRecord {
    /// Opaque athlete id (also used as document ID)
    pub id: String,
    /// Merged activity list; order carries no meaning
    pub activities: Vec<ActivityRecord>,
    /// Wall-clock time of the write that produced this list (ISO 8601)
    pub last_updated: String,
}
