// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use runboard::config::Config;
use runboard::db::{AthleteStore, MemoryStore};
use runboard::routes::create_router;
use runboard::services::IngestService;
use runboard::AppState;
use std::sync::Arc;

/// Create a test app backed by the in-memory store.
/// Returns the router, the shared state, and the store for assertions.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, MemoryStore) {
    create_test_app_with(Config::default())
}

/// Create a test app with a custom config (e.g. the 403 rejection mode).
#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>, MemoryStore) {
    let memory = MemoryStore::new();
    let store = AthleteStore::Memory(memory.clone());

    let ingest = IngestService::new(
        store.clone(),
        config.allowed_athlete_ids.clone(),
        config.activity_cutoff,
    );

    let state = Arc::new(AppState {
        config,
        store,
        ingest,
    });

    (create_router(state.clone()), state, memory)
}

/// Build a submission body for the given athlete.
#[allow(dead_code)]
pub fn submit_body(user_id: &str, activities: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "activities": activities,
    })
}
