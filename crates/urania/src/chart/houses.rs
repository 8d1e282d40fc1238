//! Ascendant, midheaven, and house cusp computation.

use crate::chart::settings::HouseSystem;
use crate::temporal::julian::{gmst_degrees, julian_centuries_tt, mean_obliquity_degrees,
    wrap_degrees};
use crate::temporal::{GeoPoint, Instant};
use crate::zodiac::SIGN_SPAN_DEGREES;

pub const HOUSE_COUNT: usize = 12;

/// Beyond this |latitude| the ascendant formula degenerates (tan of the
/// geographic latitude blows up); houses are reported unavailable instead.
pub const POLAR_LATITUDE_LIMIT: f64 = 89.9;

/// Local sidereal time in degrees for an instant at an east longitude.
pub fn local_sidereal_degrees(instant: Instant, east_longitude: f64) -> f64 {
    wrap_degrees(gmst_degrees(instant.julian_day()) + east_longitude)
}

/// Ecliptic longitude of the ascendant, degrees in [0, 360).
pub fn ascendant_degrees(instant: Instant, point: &GeoPoint) -> f64 {
    let theta = local_sidereal_degrees(instant, point.longitude).to_radians();
    let obliquity = mean_obliquity_degrees(julian_centuries_tt(instant.julian_day())).to_radians();
    let latitude = point.latitude.to_radians();

    let y = theta.cos();
    let x = -(theta.sin() * obliquity.cos() + latitude.tan() * obliquity.sin());
    wrap_degrees(y.atan2(x).to_degrees())
}

/// Ecliptic longitude of the midheaven, degrees in [0, 360).
pub fn midheaven_degrees(instant: Instant, point: &GeoPoint) -> f64 {
    let theta = local_sidereal_degrees(instant, point.longitude).to_radians();
    let obliquity = mean_obliquity_degrees(julian_centuries_tt(instant.julian_day())).to_radians();
    wrap_degrees(theta.sin().atan2(theta.cos() * obliquity.cos()).to_degrees())
}

/// Twelve house cusps for the configured system, or `None` where the
/// ascendant is numerically meaningless (polar latitudes).
pub fn compute_cusps(
    instant: Instant,
    point: &GeoPoint,
    system: HouseSystem,
) -> Option<Vec<f64>> {
    if point.latitude.abs() > POLAR_LATITUDE_LIMIT {
        return None;
    }

    let ascendant = ascendant_degrees(instant, point);
    let anchor = match system {
        HouseSystem::Equal => ascendant,
        HouseSystem::WholeSign => (ascendant / SIGN_SPAN_DEGREES).floor() * SIGN_SPAN_DEGREES,
    };

    Some(
        (0..HOUSE_COUNT)
            .map(|i| wrap_degrees(anchor + i as f64 * SIGN_SPAN_DEGREES))
            .collect(),
    )
}
