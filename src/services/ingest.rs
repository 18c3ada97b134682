// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity ingestion service.
//!
//! Handles the core workflow:
//! 1. Load the athlete's stored activities
//! 2. Merge with the incoming submission (dedup + cutoff filter)
//! 3. Replace the stored document if the athlete is on the allow-list

use chrono::NaiveDateTime;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::db::AthleteStore;
use crate::error::Result;
use crate::models::{ActivityRecord, AthleteRecord};
use crate::time_utils::{now_iso8601, parse_activity_date};

/// Merges scraped submissions into per-athlete documents.
pub struct IngestService {
    store: AthleteStore,
    allowed_athlete_ids: HashSet<String>,
    cutoff: NaiveDateTime,
    /// Per-athlete locks serializing the read-merge-write sequence.
    /// Shared across all requests within this instance.
    submit_locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl IngestService {
    pub fn new(
        store: AthleteStore,
        allowed_athlete_ids: HashSet<String>,
        cutoff: NaiveDateTime,
    ) -> Self {
        Self {
            store,
            allowed_athlete_ids,
            cutoff,
            submit_locks: Arc::new(DashMap::new()),
        }
    }

    /// Merge a submission into the athlete's stored record.
    ///
    /// Returns `true` if a document was written, `false` when the id is not
    /// on the allow-list (the submission is accepted but nothing persists).
    /// One store read and at most one store write per call.
    pub async fn submit(&self, user_id: &str, incoming: Vec<ActivityRecord>) -> Result<bool> {
        // Hold the per-athlete lock across read+merge+write so concurrent
        // submissions for the same id cannot clobber each other.
        let lock = self
            .submit_locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let existing = self
            .store
            .get_athlete(user_id)
            .await?
            .map(|record| record.activities)
            .unwrap_or_default();

        let incoming_count = incoming.len();
        let merged = merge_activities(incoming, existing, self.cutoff);

        if !self.allowed_athlete_ids.contains(user_id) {
            tracing::info!(user_id, "Athlete not on allow-list, skipping write");
            return Ok(false);
        }

        let record = AthleteRecord {
            id: user_id.to_string(),
            activities: merged,
            last_updated: now_iso8601(),
        };
        self.store.set_athlete(&record).await?;

        tracing::info!(
            user_id,
            incoming = incoming_count,
            persisted = record.activities.len(),
            "Athlete record replaced"
        );

        Ok(true)
    }
}

/// Merge incoming and stored activities into the new persisted list.
///
/// Incoming entries come first, so on a duplicate `(date, distance)` key the
/// submitted copy wins over the stored one. Comparison is exact string
/// equality with no numeric normalization. Records dated before `cutoff`
/// are dropped, as are records whose date does not parse at all.
pub fn merge_activities(
    incoming: Vec<ActivityRecord>,
    existing: Vec<ActivityRecord>,
    cutoff: NaiveDateTime,
) -> Vec<ActivityRecord> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(incoming.len() + existing.len());

    for activity in incoming.into_iter().chain(existing) {
        if seen.insert(activity.dedup_key()) {
            merged.push(activity);
        }
    }

    merged.retain(|activity| {
        parse_activity_date(&activity.date).is_some_and(|date| date >= cutoff)
    });

    merged
}
