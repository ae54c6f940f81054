use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use units::Length;

/// Moon categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonType {
    Rocky,
    Icy,
    Volcanic,
    Captured,
}

impl MoonType {
    pub const ALL: [MoonType; 4] = [
        MoonType::Rocky,
        MoonType::Icy,
        MoonType::Volcanic,
        MoonType::Captured,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MoonType::Rocky => "Rocky Moon",
            MoonType::Icy => "Icy Moon",
            MoonType::Volcanic => "Volcanic Moon",
            MoonType::Captured => "Captured Asteroid",
        }
    }

    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            MoonType::Rocky => &["#a0a0a0", "#909090", "#b0b0b0", "#808080"],
            MoonType::Icy => &["#e8f4f8", "#d0e8f0", "#c0dce8", "#f0f8ff"],
            MoonType::Volcanic => &["#ff8c42", "#ffa500", "#ff6b35", "#e55934"],
            MoonType::Captured => &["#696969", "#778899", "#556b2f", "#8b4513"],
        }
    }
}

impl fmt::Display for MoonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A satellite owned by exactly one planet.
///
/// The physical orbit lives inside a fraction of the parent's Hill sphere;
/// the display orbit is an independent visibility scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub id: usize,
    pub name: String,
    pub moon_type: MoonType,
    pub color: String,
    /// Mass in Earth masses (Moon to Ganymede range).
    pub mass: f64,
    /// Radius in Earth radii.
    pub radius: f64,
    pub visual_radius: f64,
    /// Draw orbit around the parent in display units.
    pub orbit_radius: f64,
    /// Physical orbit around the parent.
    pub orbit_radius_au: Length,
    /// Orbital period in time units (visibility-scaled).
    pub orbital_period: f64,
    pub angle: f64,
    pub eccentricity: f64,
}

impl Moon {
    /// Position relative to the parent planet at simulated time, in display
    /// units.
    pub fn position_at(&self, time: f64, time_scale: f64) -> Vector2<f64> {
        let angle = self.angle
            + (time * 0.003 * time_scale) / self.orbital_period * std::f64::consts::TAU;
        let r = self.orbit_radius * (1.0 - self.eccentricity * angle.cos());
        Vector2::new(angle.cos() * r, angle.sin() * r)
    }
}
