//! Application configuration loaded from environment variables.
//!
//! Everything the ingestion path depends on (allow-list, cutoff instant,
//! rejection behavior) is explicit configuration, so tests can construct a
//! `Config` directly instead of reaching for globals.

use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::env;

/// Club roster used when `ALLOWED_ATHLETE_IDS` is not set.
const DEFAULT_ALLOWED_ATHLETE_IDS: &[&str] = &[
    "52574369",
    "46048265",
    "116093133",
    "52568829",
    "55710489",
    "83786875",
    "135110733",
    "80395176",
];

/// Activities dated before this instant are discarded during merge.
const DEFAULT_ACTIVITY_CUTOFF: &str = "2025-10-01T00:00:00";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Athlete ids permitted to have data persisted
    pub allowed_athlete_ids: HashSet<String>,
    /// Cutoff instant, naive local time, no timezone normalization
    pub activity_cutoff: NaiveDateTime,
    /// When true, submissions for unlisted ids get 403 instead of the
    /// silent-success echo
    pub reject_unlisted_athletes: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            allowed_athlete_ids: DEFAULT_ALLOWED_ATHLETE_IDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            activity_cutoff: DEFAULT_ACTIVITY_CUTOFF
                .parse()
                .expect("default cutoff is a valid timestamp"),
            reject_unlisted_athletes: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let allowed_athlete_ids = match env::var("ALLOWED_ATHLETE_IDS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect(),
            Err(_) => DEFAULT_ALLOWED_ATHLETE_IDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let activity_cutoff = env::var("ACTIVITY_CUTOFF")
            .unwrap_or_else(|_| DEFAULT_ACTIVITY_CUTOFF.to_string())
            .parse::<NaiveDateTime>()
            .map_err(|_| ConfigError::Invalid("ACTIVITY_CUTOFF"))?;

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            allowed_athlete_ids,
            activity_cutoff,
            reject_unlisted_athletes: env::var("REJECT_UNLISTED_ATHLETES")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
