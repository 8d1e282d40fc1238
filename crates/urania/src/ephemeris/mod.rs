pub mod bodies;
pub mod orbits;
pub mod resolver;
pub mod types;

pub use bodies::Body;
pub use resolver::{body_longitude, resolve_all, solve_kepler};
pub use types::{BodyLongitude, EphemerisOutcome};
