//! Long-period comets on bound elliptical orbits

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use interstellar::catalog::Rgb;
use seedrand::SeededRandom;
use stellar::Star;
use units::Length;

/// Comet ice compositions; volatility scales how far from the star the tail
/// switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CometType {
    WaterIce,
    CarbonDioxide,
    Methane,
    Mixed,
}

/// Static profile for one comet composition.
#[derive(Debug, Clone, Copy)]
pub struct CometProfile {
    pub name: &'static str,
    pub color: &'static str,
    pub tail_color: Rgb,
    pub dust_color: Rgb,
    pub volatility: f64,
    pub tail_brightness: f64,
}

const WATER_ICE: CometProfile = CometProfile {
    name: "Water Ice Comet",
    color: "#aaddff",
    tail_color: Rgb { r: 170, g: 220, b: 255 },
    dust_color: Rgb { r: 255, g: 220, b: 180 },
    volatility: 1.0,
    tail_brightness: 1.0,
};

const CARBON_DIOXIDE: CometProfile = CometProfile {
    name: "CO2 Ice Comet",
    color: "#ddddff",
    tail_color: Rgb { r: 200, g: 200, b: 255 },
    dust_color: Rgb { r: 220, g: 200, b: 180 },
    volatility: 1.5,
    tail_brightness: 0.8,
};

const METHANE: CometProfile = CometProfile {
    name: "Methane Ice Comet",
    color: "#aaffdd",
    tail_color: Rgb { r: 170, g: 255, b: 220 },
    dust_color: Rgb { r: 200, g: 220, b: 180 },
    volatility: 2.0,
    tail_brightness: 0.6,
};

const MIXED: CometProfile = CometProfile {
    name: "Mixed Composition Comet",
    color: "#ccddee",
    tail_color: Rgb { r: 200, g: 220, b: 240 },
    dust_color: Rgb { r: 240, g: 220, b: 200 },
    volatility: 1.2,
    tail_brightness: 0.9,
};

impl CometType {
    pub const ALL: [CometType; 4] = [
        CometType::WaterIce,
        CometType::CarbonDioxide,
        CometType::Methane,
        CometType::Mixed,
    ];

    pub fn profile(&self) -> &'static CometProfile {
        match self {
            CometType::WaterIce => &WATER_ICE,
            CometType::CarbonDioxide => &CARBON_DIOXIDE,
            CometType::Methane => &METHANE,
            CometType::Mixed => &MIXED,
        }
    }
}

/// A bound comet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comet {
    /// Historical comets carry names; generated ones do not.
    pub name: Option<String>,
    pub comet_type: CometType,
    pub perihelion: Length,
    pub aphelion: Length,
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    pub angle: f64,
    pub orbital_period: f64,
    pub inclination: f64,
    pub size: f64,
    pub color: String,
    pub tail_color: Rgb,
    pub dust_color: Rgb,
    pub volatility: f64,
    pub tail_brightness: f64,
    /// Distance inside which sublimation activates the tail.
    pub tail_activation_radius: Length,
}

impl Comet {
    /// Position on the elliptical orbit at simulated time, in display units.
    pub fn position_at(&self, time: f64, time_scale: f64) -> Vector2<f64> {
        let angle = self.angle
            + (time * 0.001 * time_scale) / self.orbital_period * std::f64::consts::TAU;
        let a = self.semi_major_axis.to_display();
        let r = a * (1.0 - self.eccentricity * self.eccentricity)
            / (1.0 + self.eccentricity * angle.cos());
        Vector2::new(
            angle.cos() * r,
            angle.sin() * r * self.inclination.cos(),
        )
    }

    /// Distance from the star at simulated time.
    pub fn distance_at(&self, time: f64, time_scale: f64) -> Length {
        Length::from_display(self.position_at(time, time_scale).norm())
    }

    /// True when the comet is inside its tail-activation radius.
    pub fn tail_active_at(&self, time: f64, time_scale: f64) -> bool {
        self.distance_at(time, time_scale) < self.tail_activation_radius
    }
}

/// Generates a long-period comet for a star.
///
/// Orbit extents are drawn at display scale; eccentricity follows from the
/// perihelion/aphelion pair. Tail activation scales with stellar luminosity
/// and the composition's volatility.
pub fn generate_comet(rng: &mut SeededRandom, star: &Star) -> Comet {
    let perihelion = rng.range(30.0, 100.0);
    let aphelion = rng.range(400.0, 1000.0);
    let semi_major_axis = (perihelion + aphelion) / 2.0;
    let eccentricity = (aphelion - perihelion) / (aphelion + perihelion);

    let comet_type = *rng.choice(&CometType::ALL);
    let profile = comet_type.profile();

    // ~2-3 AU for water ice around a Sun-like star
    let activation_au = 2.5 * star.luminosity.sqrt() * profile.volatility;

    Comet {
        name: None,
        comet_type,
        perihelion: Length::from_display(perihelion),
        aphelion: Length::from_display(aphelion),
        semi_major_axis: Length::from_display(semi_major_axis),
        eccentricity,
        angle: rng.range(0.0, std::f64::consts::TAU),
        orbital_period: rng.range(100.0, 500.0),
        inclination: rng.range(-0.3, 0.3),
        size: rng.range(1.0, 3.0),
        color: profile.color.to_string(),
        tail_color: profile.tail_color,
        dust_color: profile.dust_color,
        volatility: profile.volatility,
        tail_brightness: profile.tail_brightness,
        tail_activation_radius: Length::from_au(activation_au),
    }
}
