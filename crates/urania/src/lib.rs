//! Birth chart computation engine.
//!
//! A chain of pure stages: validation gate, temporal normalizer, ephemeris
//! resolver, chart assembler. Each stage is a pure function of its inputs;
//! nothing is cached or mutated across requests, so independent requests may
//! run fully in parallel. The engine performs no I/O; geocoding and
//! transport live in the surrounding service.

pub mod chart;
pub mod ephemeris;
pub mod temporal;
pub mod validate;
pub mod zodiac;

pub use chart::{assemble, ChartFlags, ChartResult, EngineSettings, HouseSystem, PlanetPosition};
pub use ephemeris::{resolve_all, Body, BodyLongitude, EphemerisOutcome};
pub use temporal::{normalize, GeoPoint, Instant, TemporalError};
pub use validate::{validate, ValidatedRequest, ValidationError};
pub use zodiac::{Element, Sign};

/// Run the full engine over an already validated and geocoded request.
pub fn compute_chart(
    request: &ValidatedRequest,
    point: &GeoPoint,
    settings: &EngineSettings,
) -> Result<ChartResult, TemporalError> {
    let instant = temporal::normalize(request.date, request.time, point)?;
    let outcome = ephemeris::resolve_all(instant);
    Ok(chart::assemble(
        &outcome,
        point,
        instant,
        request.time_unknown(),
        settings,
    ))
}
