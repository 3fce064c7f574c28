use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::errors::{DomainError, DomainResult};

/// Parses a client-supplied deadline. Accepts a full RFC 3339 timestamp or
/// a bare `YYYY-MM-DD` date, which is taken as midnight UTC.
pub fn parse_deadline(raw: &str) -> DomainResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
        .ok_or_else(|| DomainError::InvalidDeadline(raw.to_string()))
}
