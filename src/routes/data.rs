// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission and retrieval routes for athlete activity data.

use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, AthleteRecord};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/data", post(submit_data).get(list_data))
}

/// Submission payload as posted by the scraper.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,
    pub activities: Vec<ActivityRecord>,
}

/// Accept a scraped submission and merge it into the athlete's record.
///
/// The scraper expects its own payload echoed back with a 201, even when the
/// id is not on the allow-list and nothing was persisted. Setting
/// `REJECT_UNLISTED_ATHLETES=true` switches the unlisted case to a 403.
async fn submit_data(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(
        user_id = %payload.user_id,
        incoming = payload.activities.len(),
        "Received submission"
    );

    let persisted = state
        .ingest
        .submit(&payload.user_id, payload.activities.clone())
        .await?;

    if !persisted && state.config.reject_unlisted_athletes {
        return Err(AppError::Forbidden(format!(
            "athlete {} is not on the allow-list",
            payload.user_id
        )));
    }

    Ok((StatusCode::CREATED, Json(payload)))
}

/// Return every persisted athlete record verbatim.
///
/// No filtering, pagination, or ordering guarantee; the dashboard does its
/// own aggregation client-side.
async fn list_data(State(state): State<Arc<AppState>>) -> Result<Json<Vec<AthleteRecord>>> {
    let athletes = state.store.list_athletes().await?;

    tracing::debug!(count = athletes.len(), "Listing athlete records");

    Ok(Json(athletes))
}
