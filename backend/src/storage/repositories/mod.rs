// Repository modules
pub mod expense_repository;
pub mod trip_repository;

// Re-export repository types
pub use expense_repository::ExpenseRepository;
pub use trip_repository::{ExpensePolicy, TripRepository, TripUpdate};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamps are stored as fixed-width RFC 3339 text so that they sort lexically
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid stored timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Member lists are stored as JSON arrays of names
pub(crate) fn encode_names(names: &[String]) -> Result<String> {
    serde_json::to_string(names).context("Failed to encode member names")
}

pub(crate) fn decode_names(value: &str) -> Result<Vec<String>> {
    serde_json::from_str(value).with_context(|| format!("Invalid stored member list: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip_is_fixed_width() {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 9, 8, 5, 0).unwrap();
        let formatted = format_timestamp(&timestamp);

        assert_eq!(formatted, "2025-03-09T08:05:00.000Z");
        assert_eq!(parse_timestamp(&formatted).unwrap(), timestamp);
    }

    #[test]
    fn test_decode_names_rejects_garbage() {
        assert!(decode_names("not json").is_err());
        assert_eq!(decode_names(r#"["A","B"]"#).unwrap(), vec!["A", "B"]);
    }
}
