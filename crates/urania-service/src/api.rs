//! Wire types for the UI boundary.

use serde::{Deserialize, Serialize};
use urania::{Body, ChartResult, Sign};

/// Raw request as submitted by the birth form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, or null when the birth time is unknown.
    #[serde(default)]
    pub time: Option<String>,
    /// Free-text place name, resolved by the geocoding collaborator.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub body: Body,
    pub sign: Sign,
    /// Degrees into the sign, [0, 30).
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseEntry {
    /// 1-based house number.
    pub house: u8,
    /// Cusp longitude in degrees, [0, 360).
    pub cusp: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFlags {
    pub time_unknown: bool,
    pub low_confidence: bool,
    pub temporal_ambiguity: bool,
    pub houses_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResponse {
    pub positions: Vec<PositionEntry>,
    pub houses: Option<Vec<HouseEntry>>,
    pub flags: ResponseFlags,
}

impl ChartResponse {
    pub fn from_result(result: &ChartResult) -> Self {
        let positions = result
            .positions
            .iter()
            .map(|p| PositionEntry {
                body: p.body,
                sign: p.sign,
                degree: p.degree_in_sign,
            })
            .collect();

        let houses = result.houses.as_ref().map(|cusps| {
            cusps
                .iter()
                .enumerate()
                .map(|(i, &cusp)| HouseEntry {
                    house: (i + 1) as u8,
                    cusp,
                })
                .collect()
        });

        ChartResponse {
            positions,
            houses,
            flags: ResponseFlags {
                time_unknown: result.flags.time_unknown,
                low_confidence: result.flags.low_confidence,
                temporal_ambiguity: result.flags.temporal_ambiguity,
                houses_available: result.flags.houses_available,
            },
        }
    }
}
