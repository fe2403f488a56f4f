use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::EngineError;

pub const DATE_KEY_FMT: &str = "%Y-%m-%d";

/// Parse a decimal-as-string amount into a non-negative integer.
/// Fails with `MalformedAmount` on anything that is not a plain base-10
/// integer (empty, signs, decimals, separators) — a bad amount must never
/// reach an accumulator as a silent zero.
pub fn parse_amount(raw: &str) -> Result<u64, EngineError> {
    let trimmed = raw.trim();
    // u64::from_str tolerates a leading '+'; a signed amount is malformed
    // here, so only digit runs are let through.
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::MalformedAmount(raw.to_string()));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| EngineError::MalformedAmount(raw.to_string()))
}

/// Parse an ISO-8601 date or datetime into its calendar date. Time-of-day is
/// truncated: two records on the same calendar day map to the same key no
/// matter the hour. Fails with `InvalidDate` on unparsable input.
pub fn parse_date_key(raw: &str) -> Result<NaiveDate, EngineError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_KEY_FMT) {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    Err(EngineError::InvalidDate(raw.to_string()))
}

/// `YYYY-MM-DD` string form of a date, the grouping key used by trends.
pub fn date_key_string(date: NaiveDate) -> String {
    date.format(DATE_KEY_FMT).to_string()
}
