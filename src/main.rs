// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Runboard API Server
//!
//! Ingests scraped run-club activity submissions, deduplicates them into
//! per-athlete Firestore documents, and serves leaderboard data.

use runboard::{
    config::Config, db::AthleteStore, db::FirestoreDb, services::IngestService, AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        allowed = config.allowed_athlete_ids.len(),
        cutoff = %config.activity_cutoff,
        "Starting Runboard API"
    );

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");
    let store = AthleteStore::Firestore(db);

    // Initialize ingestion service with explicit allow-list and cutoff
    let ingest = IngestService::new(
        store.clone(),
        config.allowed_athlete_ids.clone(),
        config.activity_cutoff,
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        ingest,
    });

    // Build router
    let app = runboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("runboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
