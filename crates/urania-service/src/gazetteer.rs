//! Offline gazetteer: a static table of well-known places.
//!
//! Stands in for a real geocoding service so the pipeline works without
//! network access. Lookup is case-insensitive; a query like
//! "Greenwich, UK" falls back to its first comma segment.

use crate::geocoding::{GeocodeError, Geocoder};
use async_trait::async_trait;
use std::collections::HashMap;
use urania::GeoPoint;

// (key, latitude, longitude, IANA zone)
const PLACES: &[(&str, f64, f64, &str)] = &[
    ("greenwich", 51.4769, 0.0005, "Europe/London"),
    ("london", 51.5074, -0.1278, "Europe/London"),
    ("new york", 40.7128, -74.0060, "America/New_York"),
    ("newcastle", 54.9783, -1.6178, "Europe/London"),
    ("washington", 38.9072, -77.0369, "America/New_York"),
    ("chicago", 41.8781, -87.6298, "America/Chicago"),
    ("los angeles", 34.0522, -118.2437, "America/Los_Angeles"),
    ("paris", 48.8566, 2.3522, "Europe/Paris"),
    ("berlin", 52.5200, 13.4050, "Europe/Berlin"),
    ("rome", 41.9028, 12.4964, "Europe/Rome"),
    ("moscow", 55.7558, 37.6173, "Europe/Moscow"),
    ("reykjavik", 64.1466, -21.9426, "Atlantic/Reykjavik"),
    ("cairo", 30.0444, 31.2357, "Africa/Cairo"),
    ("mumbai", 19.0760, 72.8777, "Asia/Kolkata"),
    ("tokyo", 35.6762, 139.6503, "Asia/Tokyo"),
    ("beijing", 39.9042, 116.4074, "Asia/Shanghai"),
    ("sydney", -33.8688, 151.2093, "Australia/Sydney"),
    ("lord howe island", -31.5553, 159.0821, "Australia/Lord_Howe"),
    ("auckland", -36.8509, 174.7645, "Pacific/Auckland"),
    ("apia", -13.8506, -171.7513, "Pacific/Apia"),
    ("sao paulo", -23.5505, -46.6333, "America/Sao_Paulo"),
    ("buenos aires", -34.6037, -58.3816, "America/Argentina/Buenos_Aires"),
];

lazy_static::lazy_static! {
    static ref PLACE_INDEX: HashMap<&'static str, GeoPoint> = {
        let mut index = HashMap::new();
        for (key, lat, lon, zone) in PLACES {
            index.insert(*key, GeoPoint {
                latitude: *lat,
                longitude: *lon,
                timezone: zone.to_string(),
            });
        }
        index
    };
}

/// Built-in [`Geocoder`] backed by the static place table.
#[derive(Debug, Default, Clone)]
pub struct StaticGazetteer;

impl StaticGazetteer {
    pub fn new() -> Self {
        Self
    }

    fn lookup(&self, query: &str) -> Result<GeoPoint, GeocodeError> {
        let normalized = query.trim().to_lowercase();

        if let Some(point) = PLACE_INDEX.get(normalized.as_str()) {
            return Ok(point.clone());
        }

        // "Greenwich, UK" -> "greenwich"
        let head = normalized
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default();
        if let Some(point) = PLACE_INDEX.get(head) {
            return Ok(point.clone());
        }

        // Last resort: a unique prefix match ("new y" -> "new york").
        // Several matches mean the query needs to be more specific.
        if !head.is_empty() {
            let mut candidates: Vec<&str> = PLACE_INDEX
                .keys()
                .copied()
                .filter(|key| key.starts_with(head))
                .collect();
            candidates.sort_unstable();
            match candidates.as_slice() {
                [single] => return Ok(PLACE_INDEX[single].clone()),
                [] => {}
                _ => {
                    return Err(GeocodeError::Ambiguous {
                        query: query.to_string(),
                        candidates: candidates.iter().map(|c| c.to_string()).collect(),
                    })
                }
            }
        }

        Err(GeocodeError::NotFound {
            query: query.to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for StaticGazetteer {
    async fn resolve(&self, query: &str) -> Result<GeoPoint, GeocodeError> {
        self.lookup(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_comma_segment_lookup() {
        let gazetteer = StaticGazetteer::new();
        let direct = gazetteer.lookup("Greenwich").unwrap();
        let suffixed = gazetteer.lookup("Greenwich, UK").unwrap();
        assert_eq!(direct, suffixed);
        assert_eq!(direct.timezone, "Europe/London");
    }

    #[test]
    fn test_case_insensitive() {
        let gazetteer = StaticGazetteer::new();
        assert!(gazetteer.lookup("NEW YORK").is_ok());
    }

    #[test]
    fn test_unique_prefix_resolves() {
        let gazetteer = StaticGazetteer::new();
        let point = gazetteer.lookup("Tok").unwrap();
        assert_eq!(point.timezone, "Asia/Tokyo");
    }

    #[test]
    fn test_shared_prefix_is_ambiguous() {
        let gazetteer = StaticGazetteer::new();
        // "new" prefixes both "new york" and "newcastle".
        assert!(matches!(
            gazetteer.lookup("New"),
            Err(GeocodeError::Ambiguous { .. })
        ));
    }

    #[test]
    fn test_unknown_place_not_found() {
        let gazetteer = StaticGazetteer::new();
        assert!(matches!(
            gazetteer.lookup("Xyzzy"),
            Err(GeocodeError::NotFound { .. })
        ));
    }
}
