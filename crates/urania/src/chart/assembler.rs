//! Chart assembly: sign placement, house cusps, result flags.

use crate::chart::houses;
use crate::chart::settings::EngineSettings;
use crate::ephemeris::types::EphemerisOutcome;
use crate::ephemeris::Body;
use crate::temporal::{GeoPoint, Instant};
use crate::zodiac::Sign;
use serde::Serialize;

/// One fully derived placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Degrees in [0, 360).
    pub longitude: f64,
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartFlags {
    pub time_unknown: bool,
    pub low_confidence: bool,
    pub temporal_ambiguity: bool,
    pub houses_available: bool,
}

/// The engine's sole output artifact. Immutable once constructed; every
/// request produces a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    /// Canonical body order.
    pub positions: Vec<PlanetPosition>,
    /// Twelve cusps, or `None` when the birth time is unknown or the
    /// latitude is polar.
    pub houses: Option<Vec<f64>>,
    pub flags: ChartFlags,
}

/// Derive sign placements and house cusps from resolved longitudes.
///
/// With an unknown birth time the house cusps are omitted entirely; a
/// chart is still produced.
pub fn assemble(
    outcome: &EphemerisOutcome,
    point: &GeoPoint,
    instant: Instant,
    time_unknown: bool,
    settings: &EngineSettings,
) -> ChartResult {
    let positions = outcome
        .positions
        .iter()
        .map(|entry| {
            let sign = Sign::from_longitude(entry.longitude);
            PlanetPosition {
                body: entry.body,
                longitude: entry.longitude,
                sign,
                degree_in_sign: entry.longitude - sign.start_degree(),
            }
        })
        .collect();

    let houses = if time_unknown {
        None
    } else {
        houses::compute_cusps(instant, point, settings.house_system)
    };

    let flags = ChartFlags {
        time_unknown,
        low_confidence: outcome.low_confidence,
        temporal_ambiguity: instant.ambiguous,
        houses_available: houses.is_some(),
    };

    ChartResult {
        positions,
        houses,
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::types::BodyLongitude;
    use crate::zodiac::SIGN_SPAN_DEGREES;
    use chrono::{TimeZone, Utc};

    fn sample_outcome() -> EphemerisOutcome {
        EphemerisOutcome {
            positions: vec![
                BodyLongitude {
                    body: Body::Sun,
                    longitude: 280.4,
                },
                BodyLongitude {
                    body: Body::Moon,
                    longitude: 359.999,
                },
            ],
            low_confidence: false,
        }
    }

    fn sample_instant() -> Instant {
        Instant {
            utc: Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
            utc_offset_seconds: 0,
            ambiguous: false,
        }
    }

    fn sample_point() -> GeoPoint {
        GeoPoint {
            latitude: 51.4769,
            longitude: 0.0005,
            timezone: "Europe/London".to_string(),
        }
    }

    #[test]
    fn test_sign_and_degree_are_exact() {
        let result = assemble(
            &sample_outcome(),
            &sample_point(),
            sample_instant(),
            false,
            &EngineSettings::default(),
        );
        let sun = &result.positions[0];
        assert_eq!(sun.sign, Sign::Capricorn);
        assert!((sun.degree_in_sign - 10.4).abs() < 1e-9);

        let moon = &result.positions[1];
        assert_eq!(moon.sign, Sign::Pisces);
        assert!(moon.degree_in_sign < SIGN_SPAN_DEGREES);
    }

    #[test]
    fn test_unknown_time_omits_houses() {
        let result = assemble(
            &sample_outcome(),
            &sample_point(),
            sample_instant(),
            true,
            &EngineSettings::default(),
        );
        assert!(result.houses.is_none());
        assert!(result.flags.time_unknown);
        assert!(!result.flags.houses_available);
    }

    #[test]
    fn test_known_time_has_twelve_houses() {
        let result = assemble(
            &sample_outcome(),
            &sample_point(),
            sample_instant(),
            false,
            &EngineSettings::default(),
        );
        assert_eq!(result.houses.as_ref().map(Vec::len), Some(12));
        assert!(result.flags.houses_available);
    }
}
