//! Validation gate for raw birth requests.
//!
//! Runs before any geocoding or computation. Each field fails independently
//! so the caller can surface per-field errors.

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

/// Supported year range, proleptic Gregorian.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Errors produced by the validation gate, one variant per field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },
    #[error("invalid time {value:?}: {reason}")]
    InvalidTime { value: String, reason: String },
    #[error("location must not be empty")]
    InvalidLocation,
}

/// A request that passed the gate. `time` is `None` when the birth time is
/// unknown; downstream stages must then treat time-dependent fields (houses,
/// exact Moon degree) as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location_query: String,
}

impl ValidatedRequest {
    pub fn time_unknown(&self) -> bool {
        self.time.is_none()
    }
}

/// Validate raw field values. `date` as `YYYY-MM-DD`, `time` as `HH:MM`
/// (or absent), `location` free text.
pub fn validate(
    date: &str,
    time: Option<&str>,
    location: &str,
) -> Result<ValidatedRequest, ValidationError> {
    let parsed_date =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| ValidationError::InvalidDate {
            value: date.to_string(),
            reason: e.to_string(),
        })?;
    if parsed_date.year() < MIN_YEAR || parsed_date.year() > MAX_YEAR {
        return Err(ValidationError::InvalidDate {
            value: date.to_string(),
            reason: format!("year must be within {}..={}", MIN_YEAR, MAX_YEAR),
        });
    }

    let parsed_time = match time {
        Some(t) => Some(NaiveTime::parse_from_str(t, "%H:%M").map_err(|e| {
            ValidationError::InvalidTime {
                value: t.to_string(),
                reason: e.to_string(),
            }
        })?),
        None => None,
    };

    let query = location.trim();
    if query.is_empty() {
        return Err(ValidationError::InvalidLocation);
    }

    Ok(ValidatedRequest {
        date: parsed_date,
        time: parsed_time,
        location_query: query.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(matches!(
            validate("2024-02-30", Some("12:00"), "London"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            validate("2024-13-01", Some("12:00"), "London"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_years() {
        assert!(matches!(
            validate("0000-01-01", Some("12:00"), "London"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_time() {
        assert!(matches!(
            validate("2024-01-01", Some("24:00"), "London"),
            Err(ValidationError::InvalidTime { .. })
        ));
        assert!(matches!(
            validate("2024-01-01", Some("noonish"), "London"),
            Err(ValidationError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_missing_time_is_accepted_and_flagged() {
        let validated = validate("2024-01-01", None, "London").unwrap();
        assert!(validated.time_unknown());
    }

    #[test]
    fn test_rejects_empty_location() {
        assert_eq!(
            validate("2024-01-01", Some("12:00"), "   "),
            Err(ValidationError::InvalidLocation)
        );
    }

    #[test]
    fn test_accepts_leap_day() {
        let validated = validate("2024-02-29", Some("23:59"), " Greenwich, UK ").unwrap();
        assert_eq!(validated.location_query, "Greenwich, UK");
        assert!(!validated.time_unknown());
    }
}
