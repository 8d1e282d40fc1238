//! Ephemeris output types.

use crate::ephemeris::bodies::Body;
use serde::Serialize;

/// Ecliptic longitude of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyLongitude {
    pub body: Body,
    /// Degrees in [0, 360).
    pub longitude: f64,
}

/// Output of a full resolver pass: one entry per tracked body, canonical
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EphemerisOutcome {
    pub positions: Vec<BodyLongitude>,
    /// The instant fell outside the orbital model's validity window. The
    /// positions are still computed; precision degrades, refusal does not
    /// happen.
    pub low_confidence: bool,
}
