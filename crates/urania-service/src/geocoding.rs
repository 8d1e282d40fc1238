//! Geocoding collaborator interface.
//!
//! Resolution happens before the engine is invoked; the engine only ever
//! sees a finished [`GeoPoint`]. A failure here is its own error kind so the
//! UI can prompt for a clearer place name instead of implying a date/time
//! problem.

use async_trait::async_trait;
use thiserror::Error;
use urania::GeoPoint;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("no place matches {query:?}")]
    NotFound { query: String },
    #[error("{query:?} matches multiple places: {candidates:?}")]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

/// Resolves a free-text place name to a single geographic point.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, query: &str) -> Result<GeoPoint, GeocodeError>;
}
