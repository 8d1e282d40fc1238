//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::fs;

/// House division system. Both are anchored at the ascendant; the choice is
/// configuration, never varied silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Twelve equal 30-degree houses starting exactly at the ascendant.
    Equal,
    /// Houses coincide with whole signs; the first house is the sign the
    /// ascendant falls in.
    WholeSign,
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::Equal
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub house_system: HouseSystem,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineSettings>,
}

/// Matches the daemon behavior: try common relative paths for
/// `configs/engine.toml`.
pub fn read_engine_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/engine.toml", "../../configs/engine.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load engine.toml from {:?}", paths);
}

/// Load engine settings from `configs/engine.toml`; a missing `[engine]`
/// section falls back to defaults.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    let text = read_engine_toml_text()?;
    let root: RootConfigToml = toml::from_str(&text)
        .map_err(|e| anyhow::anyhow!("Failed to parse engine.toml: {e}"))?;
    Ok(root.engine.unwrap_or_default())
}
