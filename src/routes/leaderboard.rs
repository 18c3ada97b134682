// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-side leaderboard summary.

use crate::error::Result;
use crate::models::LeaderboardEntry;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

/// Per-athlete totals ranked by distance, ready for the dashboard.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>> {
    let athletes = state.store.list_athletes().await?;
    Ok(Json(LeaderboardEntry::compute(&athletes)))
}
