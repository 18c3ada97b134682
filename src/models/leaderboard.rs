// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard aggregates computed from persisted athlete records.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::AthleteRecord;

/// One row of the leaderboard, ranked by total distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Athlete id
    pub id: String,
    /// Sum of all activity distances (kilometers)
    pub total_distance: f64,
    /// Number of persisted activities
    pub activity_count: u32,
    /// When this athlete's record was last replaced (ISO 8601)
    pub last_updated: String,
}

impl LeaderboardEntry {
    /// Rank athletes by total distance, descending. Ties break by id so the
    /// ordering is stable across requests. Distances that fail to parse as a
    /// float contribute zero, matching how the dashboard has always summed.
    pub fn compute(records: &[AthleteRecord]) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = records
            .iter()
            .map(|record| {
                let total_distance = record
                    .activities
                    .iter()
                    .map(|a| a.distance.parse::<f64>().unwrap_or(0.0))
                    .sum();

                LeaderboardEntry {
                    id: record.id.clone(),
                    total_distance,
                    activity_count: record.activities.len() as u32,
                    last_updated: record.last_updated.clone(),
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.total_distance
                .partial_cmp(&a.total_distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityRecord;

    fn make_record(id: &str, distances: Vec<&str>) -> AthleteRecord {
        AthleteRecord {
            id: id.to_string(),
            activities: distances
                .into_iter()
                .map(|d| ActivityRecord {
                    distance: d.to_string(),
                    date: "2025-10-05T08:00:00".to_string(),
                    time: None,
                })
                .collect(),
            last_updated: "2025-10-06T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_ranking_by_total_distance() {
        let records = vec![
            make_record("a", vec!["5.2", "3.1"]),
            make_record("b", vec!["10.0"]),
            make_record("c", vec!["1.0", "1.0"]),
        ];

        let entries = LeaderboardEntry::compute(&records);

        assert_eq!(entries[0].id, "b");
        assert_eq!(entries[0].total_distance, 10.0);
        assert_eq!(entries[1].id, "a");
        assert_eq!(entries[2].id, "c");
        assert_eq!(entries[2].activity_count, 2);
    }

    #[test]
    fn test_unparseable_distance_counts_as_zero() {
        let records = vec![make_record("a", vec!["5.0", "not-a-number"])];

        let entries = LeaderboardEntry::compute(&records);

        assert_eq!(entries[0].total_distance, 5.0);
        assert_eq!(entries[0].activity_count, 2);
    }

    #[test]
    fn test_ties_break_by_id() {
        let records = vec![
            make_record("zeta", vec!["4.0"]),
            make_record("alpha", vec!["4.0"]),
        ];

        let entries = LeaderboardEntry::compute(&records);

        assert_eq!(entries[0].id, "alpha");
        assert_eq!(entries[1].id, "zeta");
    }
}
