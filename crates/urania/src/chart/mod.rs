pub mod assembler;
pub mod houses;
pub mod settings;

pub use assembler::{assemble, ChartFlags, ChartResult, PlanetPosition};
pub use houses::{ascendant_degrees, compute_cusps, midheaven_degrees, HOUSE_COUNT};
pub use settings::{load_engine_settings, EngineSettings, HouseSystem};
