//! End-to-end chart service: validation, geocoding, engine, wire response.

use crate::api::{BirthRequest, ChartResponse};
use crate::gazetteer::StaticGazetteer;
use crate::geocoding::{GeocodeError, Geocoder};
use std::sync::Arc;
use thiserror::Error;
use urania::{EngineSettings, TemporalError, ValidationError};

/// Everything that can go wrong between a raw request and a response.
/// Ephemeris-model staleness is not here: it degrades to a response flag.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Geocoding(#[from] GeocodeError),
    #[error(transparent)]
    Temporal(#[from] TemporalError),
}

pub struct ChartService {
    geocoder: Arc<dyn Geocoder>,
    settings: EngineSettings,
}

impl ChartService {
    pub fn new(geocoder: Arc<dyn Geocoder>, settings: EngineSettings) -> Self {
        Self { geocoder, settings }
    }

    /// Service backed by the built-in offline gazetteer.
    pub fn with_default_gazetteer(settings: EngineSettings) -> Self {
        Self::new(Arc::new(StaticGazetteer::new()), settings)
    }

    /// Run the full pipeline. Either a complete, internally consistent
    /// response comes back, or an error; never partial output.
    pub async fn compute(&self, request: &BirthRequest) -> Result<ChartResponse, ChartError> {
        // An empty time field from the form means unknown, same as null.
        let time = request
            .time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let validated = urania::validate(&request.date, time, &request.location)?;
        log::debug!(
            "chart request: {} {:?} at {:?}",
            validated.date,
            validated.time,
            validated.location_query
        );

        let point = self.geocoder.resolve(&validated.location_query).await?;
        let result = urania::compute_chart(&validated, &point, &self.settings)?;

        if result.flags.low_confidence {
            log::warn!(
                "instant outside the orbital model window; serving low-confidence chart for {}",
                validated.date
            );
        }

        Ok(ChartResponse::from_result(&result))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::with_default_gazetteer(EngineSettings::default())
    }
}
