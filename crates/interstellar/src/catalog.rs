//! Visitor type catalog and event timing constants

use serde::{Deserialize, Serialize};

use seedrand::SeededRandom;

/// The four categories of interstellar visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterstellarClass {
    Comet,
    RoguePlanet,
    BlackHole,
    PassingSystem,
}

impl InterstellarClass {
    pub const ALL: [InterstellarClass; 4] = [
        InterstellarClass::Comet,
        InterstellarClass::RoguePlanet,
        InterstellarClass::BlackHole,
        InterstellarClass::PassingSystem,
    ];

    /// Relative spawn probability.
    pub fn probability(&self) -> f64 {
        match self {
            InterstellarClass::Comet => 0.5,
            InterstellarClass::RoguePlanet => 0.3,
            InterstellarClass::BlackHole => 0.05,
            InterstellarClass::PassingSystem => 0.15,
        }
    }

    /// Velocity factor range relative to system escape velocity; fast
    /// visitors ride more open hyperbolas.
    pub fn velocity_range(&self) -> (f64, f64) {
        match self {
            InterstellarClass::Comet => (1.2, 3.0),
            InterstellarClass::RoguePlanet => (0.8, 2.0),
            InterstellarClass::BlackHole => (0.5, 1.5),
            InterstellarClass::PassingSystem => (0.3, 1.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InterstellarClass::Comet => "Interstellar Comet",
            InterstellarClass::RoguePlanet => "Rogue Planet",
            InterstellarClass::BlackHole => "Rogue Black Hole",
            InterstellarClass::PassingSystem => "Passing Star System",
        }
    }

    /// Probability-weighted class draw; falls back to the comet (the most
    /// common visitor) when the cumulative scan exhausts the table.
    pub fn select(rng: &mut SeededRandom) -> Self {
        let weights: Vec<f64> = Self::ALL.iter().map(|c| c.probability()).collect();
        match rng.weighted_pick(&weights) {
            Some(index) => Self::ALL[index],
            None => InterstellarClass::Comet,
        }
    }
}

/// Rogue-planet subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RogueSubtype {
    Frozen,
    GasGiant,
    IceGiant,
}

impl RogueSubtype {
    pub const ALL: [RogueSubtype; 3] = [
        RogueSubtype::Frozen,
        RogueSubtype::GasGiant,
        RogueSubtype::IceGiant,
    ];

    pub fn probability(&self) -> f64 {
        match self {
            RogueSubtype::Frozen => 0.4,
            RogueSubtype::GasGiant => 0.35,
            RogueSubtype::IceGiant => 0.25,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RogueSubtype::Frozen => "Frozen World",
            RogueSubtype::GasGiant => "Gas Giant",
            RogueSubtype::IceGiant => "Ice Giant",
        }
    }

    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            RogueSubtype::Frozen => &["#667788", "#556677", "#778899"],
            RogueSubtype::GasGiant => &["#cc9966", "#aa7755", "#ddaa77", "#8877aa"],
            RogueSubtype::IceGiant => &["#6699bb", "#5588aa", "#77aacc"],
        }
    }

    /// Mass per unit of visual size, in Earth masses.
    pub fn mass_factor(&self) -> f64 {
        match self {
            RogueSubtype::Frozen => 2.0,
            RogueSubtype::GasGiant => 50.0,
            RogueSubtype::IceGiant => 20.0,
        }
    }

    /// Weighted subtype draw; falls back to the frozen world.
    pub fn select(rng: &mut SeededRandom) -> Self {
        let weights: Vec<f64> = Self::ALL.iter().map(|s| s.probability()).collect();
        match rng.weighted_pick(&weights) {
            Some(index) => Self::ALL[index],
            None => RogueSubtype::Frozen,
        }
    }
}

/// A flat 8-bit color triple for tail and dust tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Comet size range in visual units.
pub const COMET_SIZE: (f64, f64) = (0.5, 4.0);
/// Comet body colors.
pub const COMET_COLORS: [&str; 3] = ["#aaddff", "#cceeff", "#88bbdd"];
/// Comet tail tint.
pub const COMET_TAIL_COLOR: Rgb = Rgb { r: 150, g: 200, b: 255 };
/// Comet dust tint.
pub const COMET_DUST_COLOR: Rgb = Rgb { r: 200, g: 180, b: 150 };

/// Rogue-planet size range in visual units.
pub const ROGUE_SIZE: (f64, f64) = (4.0, 25.0);

/// Black-hole mass range in solar masses.
pub const BLACK_HOLE_MASS: (f64, f64) = (3.0, 50.0);
/// Accretion-disk tints.
pub const DISK_COLORS: [&str; 3] = ["#ff6600", "#ffaa00", "#ff4400"];

/// Visual radius for a black hole of the given solar mass.
pub fn black_hole_visual_radius(mass_solar: f64) -> f64 {
    (mass_solar * 0.8).max(3.0)
}

// =============================================================================
// Event timing configuration
// =============================================================================

/// Base check interval in simulation time units (scaled down by time speed).
pub const CHECK_INTERVAL: f64 = 500.0;
/// Base spawn probability per check (scaled up by sqrt of time speed).
pub const BASE_PROBABILITY: f64 = 0.002;
/// Cap on concurrently active ordinary visitors.
pub const MAX_ACTIVE_OBJECTS: usize = 5;
/// Cap on concurrently active passing systems.
pub const MAX_PASSING_SYSTEMS: usize = 1;
/// Spawn distance range in AU.
pub const SPAWN_DISTANCE: (f64, f64) = (80.0, 150.0);
/// Removal threshold in AU.
pub const DESPAWN_DISTANCE: f64 = 200.0;
/// Perihelion bounds in AU; visitors pass through the inner system.
pub const MIN_PERIHELION: f64 = 0.5;
pub const MAX_PERIHELION: f64 = 30.0;
