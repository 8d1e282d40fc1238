//! Julian day, delta-T, and sidereal time helpers.

use chrono::{DateTime, Utc};

pub const JD_J2000: f64 = 2_451_545.0;
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Wrap an angle into [0, 360). The upper bound is exclusive even under
/// floating-point rounding.
pub fn wrap_degrees(degrees: f64) -> f64 {
    let mut wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    if wrapped >= 360.0 {
        wrapped = 0.0;
    }
    wrapped
}

/// Julian day (UT scale) for a UTC datetime.
pub fn julian_day_utc(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
    seconds / SECONDS_PER_DAY + JD_UNIX_EPOCH
}

/// Delta-T = TT - UT, in seconds.
///
/// Quadratic fit through the observed 1900/1950/2000 values inside
/// 1900..2100; the long-term parabola around 1820 elsewhere. Decade-level
/// accuracy, which is below this model's angular resolution.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - JD_J2000) / 365.25;
    if (1900.0..2100.0).contains(&year) {
        let x = (year - 1900.0) / 100.0;
        -2.8 + 61.0 * x + 5.6 * x * x
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Julian centuries of the TT scale since J2000, from a UT Julian day.
pub fn julian_centuries_tt(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY;
    (jd_tt - JD_J2000) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn gmst_degrees(jd_ut: f64) -> f64 {
    let d = jd_ut - JD_J2000;
    let t = d / DAYS_PER_CENTURY;
    wrap_degrees(280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0)
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 series, truncated).
pub fn mean_obliquity_degrees(t_tt: f64) -> f64 {
    23.439_291_11 - 0.013_004_17 * t_tt - 1.638_9e-7 * t_tt * t_tt
        + 5.036_1e-7 * t_tt * t_tt * t_tt
}
