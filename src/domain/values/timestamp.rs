use crate::domain::error::DomainError;
use chrono::NaiveDateTime;

/// Local-time layout used by the forecast provider when `timezone=auto`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a provider timestamp such as `2024-05-16T12:30`.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| DomainError::TimeParse(format!("{s:?}: {e}")))
}

/// Hour-and-minute label used on the graph axis and in the report.
pub fn clock_label(t: &NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}
