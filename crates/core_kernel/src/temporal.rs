//! Lenient civil-date handling for extraction output
//!
//! Upstream extraction emits dates in whatever shape the source document
//! used: ISO dates, slashed day-first or month-first dates, spelled-out
//! months, sometimes full timestamps. This module normalizes the common
//! shapes to `NaiveDate` and treats anything unrecognized as absent,
//! never as a hard error.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Date formats accepted from extraction output, tried in order.
///
/// Day-first formats come before month-first, so an ambiguous
/// `03/04/2024` reads as 3 April 2024.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Parses a date string in any of the supported formats.
///
/// Falls back to the date part of an RFC 3339 timestamp, so
/// `2024-01-15T10:30:00Z` parses as 2024-01-15. Returns `None` for
/// blank or unrecognized input.
pub fn parse_lenient_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    // Timestamps without an offset ("2024-01-15T10:30:00"): take the
    // leading date part when it stands alone.
    trimmed
        .get(..10)
        .filter(|_| trimmed.len() > 10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Serde helper for optional date fields fed by extraction output.
///
/// Accepts a string in any supported format. Null, absent, non-string,
/// and unparsable values all deserialize to `None` so that one bad
/// scalar never rejects a whole document.
pub fn lenient_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_lenient_date(&s),
        _ => None,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn iso_formatted_dates_round_trip(
            year in 1990i32..2100i32,
            month in 1u32..13u32,
            day in 1u32..29u32
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let formatted = date.format("%Y-%m-%d").to_string();

            prop_assert_eq!(parse_lenient_date(&formatted), Some(date));
        }

        #[test]
        fn arbitrary_text_never_panics(input in "\\PC*") {
            let _ = parse_lenient_date(&input);
        }
    }
}
