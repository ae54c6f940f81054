use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use units::{Length, DISPLAY_UNITS_PER_AU};

use orbital::hyperbolic;

use crate::catalog::{InterstellarClass, Rgb, RogueSubtype};

/// Hyperbolic orbital elements plus the time state needed to evolve them.
///
/// `semi_major_axis` is negative and `eccentricity` above 1 for every
/// visitor; position at a time value is a pure function of these elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    pub perihelion: Length,
    /// Orientation of the perihelion direction in radians.
    pub perihelion_angle: f64,
    /// Flattening applied to the cross-track axis.
    pub inclination: f64,
    /// Mean anomaly referenced to simulation time zero.
    pub mean_anomaly: f64,
    /// Mean motion in radians per time unit (visibility-scaled).
    pub mean_motion: f64,
}

/// Evaluated visitor state at a time value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisitorPosition {
    /// Position in display units.
    pub position: Vector2<f64>,
    /// Distance from the primary star.
    pub distance: Length,
    /// Polar angle of the position.
    pub angle: f64,
    pub true_anomaly: f64,
}

impl Trajectory {
    /// Position at simulated time: mean anomaly → hyperbolic eccentric
    /// anomaly → true anomaly → conic position.
    pub fn position_at(&self, time: f64) -> VisitorPosition {
        let mean = self.mean_anomaly + self.mean_motion * time;
        let eccentric = hyperbolic::eccentric_anomaly_from_mean(mean, self.eccentricity);
        let true_anomaly = hyperbolic::true_anomaly_from_eccentric(eccentric, self.eccentricity);

        let pos = hyperbolic::position(
            self.semi_major_axis.to_au(),
            self.eccentricity,
            true_anomaly,
            self.perihelion_angle,
        );

        VisitorPosition {
            position: Vector2::new(
                pos.position.x * DISPLAY_UNITS_PER_AU,
                pos.position.y * self.inclination.cos() * DISPLAY_UNITS_PER_AU,
            ),
            distance: Length::from_au(pos.radius),
            angle: pos.angle,
            true_anomaly,
        }
    }
}

/// Miniature star carried by a passing system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniStar {
    pub name: String,
    pub class: stellar::SpectralClass,
    pub color: String,
    pub temperature: f64,
    pub mass: f64,
    pub radius: f64,
    pub visual_radius: f64,
}

/// Miniature planet orbiting a passing system's star.
///
/// Orbits are visually scaled, not physical; the angle accumulator is the
/// only state the event engine advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniPlanet {
    pub id: usize,
    /// Orbit radius around the passing star in display units.
    pub orbit_radius_local: f64,
    pub angle: f64,
    pub orbit_speed: f64,
    pub size: f64,
    pub color: String,
}

/// Kind-specific payload of an interstellar visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum InterstellarKind {
    #[serde(rename_all = "camelCase")]
    Comet {
        size: f64,
        color: String,
        tail_color: Rgb,
        dust_color: Rgb,
        /// Distance inside which the tail activates.
        tail_activation_radius: Length,
        volatility: f64,
        tail_brightness: f64,
    },
    #[serde(rename_all = "camelCase")]
    RoguePlanet {
        subtype: RogueSubtype,
        size: f64,
        visual_radius: f64,
        color: String,
        /// Mass in Earth masses.
        mass: f64,
        has_bands: bool,
        band_count: i64,
    },
    #[serde(rename_all = "camelCase")]
    BlackHole {
        /// Mass in solar masses.
        mass: f64,
        visual_radius: f64,
        has_accretion_disk: bool,
        disk_color: String,
    },
    #[serde(rename_all = "camelCase")]
    PassingSystem {
        star: MiniStar,
        planets: Vec<MiniPlanet>,
    },
}

impl InterstellarKind {
    pub fn class(&self) -> InterstellarClass {
        match self {
            InterstellarKind::Comet { .. } => InterstellarClass::Comet,
            InterstellarKind::RoguePlanet { .. } => InterstellarClass::RoguePlanet,
            InterstellarKind::BlackHole { .. } => InterstellarClass::BlackHole,
            InterstellarKind::PassingSystem { .. } => InterstellarClass::PassingSystem,
        }
    }
}

/// A transient visitor on an unbound trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterstellarObject {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub kind: InterstellarKind,
    pub trajectory: Trajectory,
    pub spawned: bool,
    pub reached_perihelion: bool,
    pub despawned: bool,
}

impl InterstellarObject {
    /// Position at simulated time, in display units.
    pub fn position_at(&self, time: f64) -> VisitorPosition {
        self.trajectory.position_at(time)
    }

    pub fn class(&self) -> InterstellarClass {
        self.kind.class()
    }

    pub fn type_name(&self) -> &'static str {
        self.class().display_name()
    }
}
