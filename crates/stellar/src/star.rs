use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::spectral::SpectralClass;

/// The primary star of a generated system.
///
/// Carries the sampled physical parameters plus the derived zone geometry
/// (habitable band, frost line, inner orbital limit, all in AU) that the
/// planet generator builds around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub class: SpectralClass,
    pub name: String,
    /// Catalog display name ("G-Class (Yellow)").
    pub full_name: String,
    pub color: String,
    /// Effective temperature in Kelvin, rounded.
    pub temperature: f64,
    /// Radius in solar radii.
    pub radius: f64,
    /// Mass in solar masses.
    pub mass: f64,
    /// Luminosity in solar luminosities.
    pub luminosity: f64,
    /// Inner habitable-zone bound in AU.
    pub habitable_zone_inner: f64,
    /// Outer habitable-zone bound in AU.
    pub habitable_zone_outer: f64,
    /// Frost line in AU.
    pub frost_line: f64,
    /// Innermost stable orbit in AU.
    pub inner_limit: f64,
    /// Draw radius in display units.
    pub visual_radius: f64,
}

/// Secondary star of a binary pair.
///
/// Companions orbit at display scale rather than physical scale; the only
/// physical constraint is that the sampled mass stays below the primary's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionStar {
    pub class: SpectralClass,
    pub name: String,
    pub full_name: String,
    pub color: String,
    pub temperature: f64,
    pub radius: f64,
    pub mass: f64,
    pub luminosity: f64,
    pub visual_radius: f64,
    /// Orbit radius around the barycenter in display units.
    pub orbit_radius: f64,
    /// Orbital period in time units.
    pub orbital_period: f64,
    /// Initial phase angle in radians.
    pub angle: f64,
}

impl CompanionStar {
    /// Position at simulated time, in display units.
    pub fn position_at(&self, time: f64, time_scale: f64) -> Vector2<f64> {
        let angle = self.angle
            + (time * 0.002 * time_scale) / self.orbital_period * std::f64::consts::TAU;
        Vector2::new(angle.cos() * self.orbit_radius, angle.sin() * self.orbit_radius)
    }
}
