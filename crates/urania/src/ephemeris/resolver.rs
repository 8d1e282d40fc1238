//! Ecliptic longitude computation for every tracked body.
//!
//! Sun and Moon use truncated analytic series (mean longitude, mean anomaly,
//! equation-of-center and principal periodic terms). Planets use the mean
//! element tables in [`crate::ephemeris::orbits`]: Kepler's equation solved
//! by Newton iteration, heliocentric rectangular coordinates rotated into
//! the ecliptic, then reduced against the Earth-Moon barycenter.

use crate::ephemeris::bodies::Body;
use crate::ephemeris::orbits::{self, ElementsAtEpoch, EARTH_MOON_BARYCENTER};
use crate::ephemeris::types::{BodyLongitude, EphemerisOutcome};
use crate::temporal::julian::{julian_centuries_tt, wrap_degrees};
use crate::temporal::Instant;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Solve Kepler's equation M = E - e*sin(E) for the eccentric anomaly.
/// Angles in radians. Newton iteration; converges in a handful of steps for
/// the eccentricities in the element tables (e < 0.25).
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut eccentric_anomaly = if eccentricity < 0.8 {
        mean_anomaly
    } else {
        std::f64::consts::PI
    };
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * eccentric_anomaly.cos());
        eccentric_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    eccentric_anomaly
}

/// Heliocentric ecliptic rectangular coordinates (au) from propagated
/// elements.
fn heliocentric_position(elements: &ElementsAtEpoch) -> (f64, f64, f64) {
    // Mean anomaly, wrapped to [-180, 180] for solver stability.
    let mut mean_anomaly = wrap_degrees(elements.mean_longitude - elements.perihelion_longitude);
    if mean_anomaly > 180.0 {
        mean_anomaly -= 360.0;
    }

    let e = elements.eccentricity;
    let eccentric_anomaly = solve_kepler(mean_anomaly.to_radians(), e);

    // Position in the orbital plane, x toward perihelion.
    let xp = elements.semi_major_axis * (eccentric_anomaly.cos() - e);
    let yp = elements.semi_major_axis * (1.0 - e * e).sqrt() * eccentric_anomaly.sin();

    let omega = (elements.perihelion_longitude - elements.node_longitude).to_radians();
    let node = elements.node_longitude.to_radians();
    let incl = elements.inclination.to_radians();

    let (sin_o, cos_o) = omega.sin_cos();
    let (sin_n, cos_n) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    let x = (cos_o * cos_n - sin_o * sin_n * cos_i) * xp
        + (-sin_o * cos_n - cos_o * sin_n * cos_i) * yp;
    let y = (cos_o * sin_n + sin_o * cos_n * cos_i) * xp
        + (-sin_o * sin_n + cos_o * cos_n * cos_i) * yp;
    let z = sin_o * sin_i * xp + cos_o * sin_i * yp;
    (x, y, z)
}

/// Geocentric ecliptic longitude of a planet, degrees in [0, 360).
fn planet_longitude(body: Body, t: f64) -> f64 {
    let elements = orbits::elements_for(body)
        .unwrap_or(&EARTH_MOON_BARYCENTER)
        .at(t);
    let (px, py, _pz) = heliocentric_position(&elements);
    let (ex, ey, _ez) = heliocentric_position(&EARTH_MOON_BARYCENTER.at(t));
    wrap_degrees((py - ey).atan2(px - ex).to_degrees())
}

/// Apparent solar longitude, degrees in [0, 360).
///
/// Geometric mean longitude plus the equation of center (three sine terms),
/// minus the constant aberration correction.
fn solar_longitude(t: f64) -> f64 {
    let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let mean_anomaly = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();

    let center = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * mean_anomaly.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000_289 * (3.0 * mean_anomaly).sin();

    wrap_degrees(mean_longitude + center - 0.005_69)
}

/// Lunar longitude from the principal periodic terms, degrees in [0, 360).
///
/// Carries the elliptic term, evection, variation, the annual equation and
/// their strongest companions; accuracy a few arcminutes, far inside one
/// zodiac degree.
fn lunar_longitude(t: f64) -> f64 {
    // Fundamental arguments, degrees.
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t
        + t * t * t / 538_841.0;
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t
        + t * t * t / 545_868.0)
        .to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t
        + t * t * t / 69_699.0)
        .to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t).to_radians();

    let correction = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin()
        - 0.040_923 * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * (m + mp).sin();

    wrap_degrees(lp + correction)
}

/// Ecliptic longitude of one body at `t` Julian centuries TT.
pub fn body_longitude(body: Body, t: f64) -> f64 {
    match body {
        Body::Sun => solar_longitude(t),
        Body::Moon => lunar_longitude(t),
        _ => planet_longitude(body, t),
    }
}

/// Compute every tracked body's longitude at the given instant, canonical
/// order. Instants outside the element tables' validity window still
/// compute; they come back flagged instead of failing.
pub fn resolve_all(instant: Instant) -> EphemerisOutcome {
    let jd = instant.julian_day();
    let t = julian_centuries_tt(jd);
    let low_confidence = !orbits::within_validity_window(jd);

    let positions = Body::ALL
        .iter()
        .map(|&body| BodyLongitude {
            body,
            longitude: body_longitude(body, t),
        })
        .collect();

    EphemerisOutcome {
        positions,
        low_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kepler_residual_is_tiny() {
        for &e in &[0.0, 0.016, 0.093, 0.205, 0.249] {
            for step in 0..24 {
                let m = -std::f64::consts::PI + step as f64 * (std::f64::consts::PI / 12.0);
                let big_e = solve_kepler(m, e);
                let residual = big_e - e * big_e.sin() - m;
                assert!(
                    residual.abs() < 1e-11,
                    "residual {} for M={} e={}",
                    residual,
                    m,
                    e
                );
            }
        }
    }

    #[test]
    fn test_kepler_circular_orbit_is_identity() {
        let m = 1.234;
        assert!((solve_kepler(m, 0.0) - m).abs() < 1e-15);
    }

    #[test]
    fn test_solar_longitude_at_j2000() {
        // Almanac value for 2000-01-01 12:00 TT, about 280.38 degrees.
        let lon = solar_longitude(0.0);
        assert!((lon - 280.38).abs() < 0.05, "got {}", lon);
    }

    #[test]
    fn test_lunar_longitude_at_j2000() {
        // Almanac value, about 223.3 degrees (Scorpio).
        let lon = lunar_longitude(0.0);
        assert!((lon - 223.3).abs() < 0.5, "got {}", lon);
    }

    #[test]
    fn test_planet_longitudes_in_range() {
        for &t in &[-1.0, -0.5, 0.0, 0.25, 0.5] {
            for body in Body::ALL {
                let lon = body_longitude(body, t);
                assert!((0.0..360.0).contains(&lon), "{:?} at t={} gave {}", body, t, lon);
            }
        }
    }
}
