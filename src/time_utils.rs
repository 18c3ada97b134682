// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Current wall-clock time formatted the way `lastUpdated` is stored
/// (RFC3339 with milliseconds and a `Z` suffix).
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an activity date as a naive timestamp.
///
/// Accepts RFC3339 (the offset is discarded, keeping the clock time as
/// written), a bare `YYYY-MM-DDTHH:MM:SS`, or a bare date at midnight.
/// Anything else returns `None`, which the merge treats as "drop the record".
pub fn parse_activity_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_naive_timestamp() {
        let parsed = parse_activity_date("2025-10-05T08:00:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 10, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_keeps_clock_time() {
        // The offset is dropped, not normalized to UTC.
        let parsed = parse_activity_date("2025-10-05T08:00:00+02:00").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 10, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let parsed = parse_activity_date("2025-10-05").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 10, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_activity_date("last tuesday").is_none());
        assert!(parse_activity_date("").is_none());
    }
}
