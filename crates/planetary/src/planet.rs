use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::composition::Composition;
use crate::moon::Moon;
use crate::planet_type::PlanetType;
use crate::surface::SurfaceDetails;
use crate::trojan::Trojan;

/// A fully characterized planet.
///
/// Everything except `angle`, `trail`, and `selected` is fixed at generation
/// time; those three are animation/display state mutated as the simulation
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: usize,
    pub name: String,
    pub planet_type: PlanetType,
    pub color: String,
    /// Radius in Earth radii.
    pub radius: f64,
    pub mass: Mass,
    /// Orbital semi-major axis.
    pub orbit_radius: Length,
    pub eccentricity: f64,
    /// Orbital period in days.
    pub orbital_period: f64,
    /// Circular-orbit velocity factor.
    pub orbital_velocity: f64,
    /// Hill-sphere radius.
    pub hill_sphere: Length,
    /// Current orbital phase angle in radians.
    pub angle: f64,
    pub rotation_speed: f64,
    pub atmosphere: String,
    pub composition: Composition,
    pub moons: Vec<Moon>,
    pub trojans: Vec<Trojan>,
    pub has_rings: bool,
    pub prominent_rings: bool,
    pub has_bands: bool,
    pub ring_color: String,
    /// Equilibrium temperature in Kelvin, rounded.
    pub temperature: f64,
    pub in_habitable_zone: bool,
    pub beyond_frost_line: bool,
    pub visual_radius: f64,
    pub surface: SurfaceDetails,
    /// Recent positions in display units, capped by the configured trail
    /// length.
    pub trail: Vec<Vector2<f64>>,
    pub selected: bool,
}

impl Planet {
    /// Orbital phase angle at simulated time.
    pub fn orbital_angle_at(&self, time: f64, time_scale: f64) -> f64 {
        self.angle + (time * 0.005 * time_scale) / self.orbital_period * std::f64::consts::TAU
    }

    /// Position at simulated time, in display units.
    ///
    /// Pure re-evaluation of `(orbital elements, time)`; nothing on the
    /// planet changes.
    pub fn position_at(&self, time: f64, time_scale: f64) -> Vector2<f64> {
        let angle = self.orbital_angle_at(time, time_scale);
        let r = self.orbit_radius.to_display() * (1.0 - self.eccentricity * angle.cos());
        Vector2::new(angle.cos() * r, angle.sin() * r)
    }

    /// Position of one of this planet's trojans, in display units.
    ///
    /// Trojans ride the planet's orbit offset ±60° to the L4/L5 point, plus
    /// their individual jitter.
    pub fn trojan_position_at(&self, trojan: &Trojan, time: f64, time_scale: f64) -> Vector2<f64> {
        let angle = self.orbital_angle_at(time, time_scale)
            + trojan.lagrange_point.angle_offset()
            + trojan.offset_angle;
        let r = self.orbit_radius.to_display() + trojan.offset_radius;
        Vector2::new(angle.cos() * r, angle.sin() * r)
    }

    /// Appends the current position to the trail, dropping the oldest points
    /// past `max_len`.
    pub fn record_trail(&mut self, time: f64, time_scale: f64, max_len: usize) {
        let position = self.position_at(time, time_scale);
        self.trail.push(position);
        if self.trail.len() > max_len {
            let overflow = self.trail.len() - max_len;
            self.trail.drain(..overflow);
        }
    }
}
