//! Civil time normalization.
//!
//! Converts a validated local date/time plus a geographic point into a single
//! UTC [`Instant`], honoring the historical DST rules of the location's IANA
//! zone. Ambiguous or nonexistent local times never fail: they resolve
//! deterministically and are marked on the instant.

pub mod julian;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolved geographic location, produced by the geocoding collaborator and
/// consumed read-only by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north, [-90, 90].
    pub latitude: f64,
    /// Degrees east, [-180, 180].
    pub longitude: f64,
    /// IANA zone identifier, e.g. "Europe/London".
    pub timezone: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// The geocoding collaborator handed us a zone id the tz database does
    /// not know. Not a user error.
    #[error("unknown timezone identifier {0:?}")]
    UnknownTimezone(String),
}

/// A point in time normalized to UTC, plus the originating local offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    pub utc: DateTime<Utc>,
    /// Offset of the originating civil time, seconds east of UTC.
    pub utc_offset_seconds: i32,
    /// Set when the civil time was ambiguous (DST fall-back), nonexistent
    /// (spring-forward gap), or predates standardized zone keeping.
    pub ambiguous: bool,
}

impl Instant {
    pub fn julian_day(&self) -> f64 {
        julian::julian_day_utc(self.utc)
    }
}

/// Clock time assumed when the birth time is unknown. Noon keeps the
/// worst-case clock error at twelve hours.
fn fallback_clock_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("12:00 is a valid clock time")
}

/// Resolve a civil date/time at a location to a UTC instant.
///
/// Ambiguous local times resolve to the earlier of the two possible UTC
/// instants; nonexistent local times resolve to the first valid instant
/// after the gap. Both set `ambiguous` instead of failing.
pub fn normalize(
    date: NaiveDate,
    time: Option<NaiveTime>,
    point: &GeoPoint,
) -> Result<Instant, TemporalError> {
    let tz: Tz = point
        .timezone
        .parse()
        .map_err(|_| TemporalError::UnknownTimezone(point.timezone.clone()))?;

    let clock = time.unwrap_or_else(fallback_clock_time);
    let civil = NaiveDateTime::new(date, clock);

    let (local, ambiguous) = match tz.from_local_datetime(&civil) {
        LocalResult::Single(dt) => (dt, false),
        LocalResult::Ambiguous(earlier, _later) => (earlier, true),
        LocalResult::None => (first_valid_after_gap(tz, civil), true),
    };

    let utc_offset_seconds = local.offset().fix().local_minus_utc();
    // Local-mean-time offsets predate standardized zone keeping and carry
    // sub-minute seconds; such dates are resolvable but not trustworthy to
    // the minute.
    let pre_standard_time = utc_offset_seconds % 60 != 0;

    Ok(Instant {
        utc: local.with_timezone(&Utc),
        utc_offset_seconds,
        ambiguous: ambiguous || pre_standard_time,
    })
}

/// Walk forward in one-minute steps until the zone maps the civil time again.
/// Gaps are normally 30 or 60 minutes; the bound covers the odd whole-day
/// calendar skip (Pacific/Apia, 2011).
fn first_valid_after_gap(tz: Tz, civil: NaiveDateTime) -> DateTime<Tz> {
    let mut probe = civil;
    for _ in 0..(2 * 24 * 60) {
        probe += Duration::minutes(1);
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) => return dt,
            LocalResult::Ambiguous(earlier, _later) => return earlier,
            LocalResult::None => continue,
        }
    }
    // A gap wider than two days means broken zone data; pin the civil time
    // to UTC so the pipeline still produces a chart.
    tz.from_utc_datetime(&civil)
}
