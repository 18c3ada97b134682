// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity record as scraped from the athlete's feed.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A single logged activity.
///
/// Distance arrives unit-stripped from the scraper and stays text; it is
/// parsed to a float only when the leaderboard aggregates it. Deduplication
/// compares the raw `date` and `distance` strings, so `"5.0"` and `"5"` are
/// distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    /// Distance in kilometers, unit already stripped
    pub distance: String,
    /// Start date/time (ISO 8601)
    pub date: String,
    /// Duration in minutes, when the scraper could extract it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl ActivityRecord {
    /// Key used for duplicate detection: the exact `(date, distance)` strings.
    pub fn dedup_key(&self) -> (String, String) {
        (self.date.clone(), self.distance.clone())
    }
}
