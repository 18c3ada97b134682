// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory athlete store.
//!
//! Used by the test suites and for offline development runs where no
//! Firestore emulator is available.

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::AthleteRecord;

/// Process-local document store keyed by athlete id.
#[derive(Clone, Default)]
pub struct MemoryStore {
    docs: Arc<DashMap<String, AthleteRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_athlete(&self, id: &str) -> Option<AthleteRecord> {
        self.docs.get(id).map(|entry| entry.value().clone())
    }

    pub fn set_athlete(&self, record: &AthleteRecord) {
        self.docs.insert(record.id.clone(), record.clone());
    }

    pub fn list_athletes(&self) -> Vec<AthleteRecord> {
        self.docs.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Number of stored documents (test assertions).
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
