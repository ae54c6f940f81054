use serde::{Deserialize, Serialize};

/// Inclusive comet count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CometCount {
    pub min: i64,
    pub max: i64,
}

/// Flat generation settings, read at the point of use.
///
/// Values are taken as given: out-of-range combinations (for example
/// `min > max`) are the caller's responsibility. The record deserializes
/// from TOML or JSON with camelCase keys, defaulting field-by-field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    pub min_planets: i64,
    pub max_planets: i64,
    pub max_moons: i64,
    pub asteroid_belt_chance: f64,
    pub ring_chance: f64,
    pub binary_star_chance: f64,
    pub base_orbit_radius: f64,
    pub orbit_spacing: f64,
    pub time_scale: f64,
    pub trail_length: usize,
    pub comet_count: CometCount,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_planets: 3,
            max_planets: 12,
            max_moons: 8,
            asteroid_belt_chance: 0.6,
            ring_chance: 0.4,
            binary_star_chance: 0.2,
            base_orbit_radius: 80.0,
            orbit_spacing: 60.0,
            time_scale: 1.0,
            trail_length: 50,
            comet_count: CometCount { min: 1, max: 3 },
        }
    }
}
