//! Service boundary around the urania engine: JSON wire types, the
//! geocoding collaborator, and the async request pipeline. Transport,
//! storage, and rendering belong to the surrounding application.

pub mod api;
pub mod gazetteer;
pub mod geocoding;
pub mod interpretations;
pub mod service;

pub use api::{BirthRequest, ChartResponse, HouseEntry, PositionEntry, ResponseFlags};
pub use gazetteer::StaticGazetteer;
pub use geocoding::{GeocodeError, Geocoder};
pub use interpretations::{interpretation_for, interpretations_for};
pub use service::{ChartError, ChartService};
