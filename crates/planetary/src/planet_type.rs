use std::fmt;

use serde::{Deserialize, Serialize};

use crate::composition::Composition;

/// The eight planet categories a system can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    GasGiant,
    IceGiant,
    Terrestrial,
    Rocky,
    LavaWorld,
    IceWorld,
    OceanWorld,
    Dwarf,
}

/// Static generation profile for one planet type.
///
/// Radius and mass are uniform within the ranges (Earth units); the moon and
/// atmosphere chances gate their respective draws.
#[derive(Debug, Clone, Copy)]
pub struct TypeProfile {
    pub name: &'static str,
    pub colors: &'static [&'static str],
    pub radius: (f64, f64),
    pub mass: (f64, f64),
    pub atmosphere_chance: f64,
    pub atmospheres: &'static [&'static str],
    pub moon_chance: f64,
    pub max_moons: i64,
    pub composition: Composition,
    pub has_rings: bool,
    pub has_bands: bool,
}

const GAS_GIANT: TypeProfile = TypeProfile {
    name: "Gas Giant",
    colors: &["#e8c48a", "#d4a574", "#c9956c", "#deb887", "#f4a460"],
    radius: (8.0, 15.0),
    mass: (50.0, 500.0),
    atmosphere_chance: 1.0,
    atmospheres: &["Hydrogen/Helium", "Hydrogen/Methane"],
    moon_chance: 0.95,
    max_moons: 12,
    composition: Composition::GAS_GIANT,
    has_rings: true,
    has_bands: true,
};

const ICE_GIANT: TypeProfile = TypeProfile {
    name: "Ice Giant",
    colors: &["#7ec8e3", "#5dade2", "#85c1e9", "#48c9b0", "#73c6b6"],
    radius: (4.0, 8.0),
    mass: (10.0, 50.0),
    atmosphere_chance: 1.0,
    atmospheres: &["Hydrogen/Methane", "Hydrogen/Ammonia"],
    moon_chance: 0.85,
    max_moons: 8,
    composition: Composition::ICE_GIANT,
    has_rings: true,
    has_bands: false,
};

const TERRESTRIAL: TypeProfile = TypeProfile {
    name: "Terrestrial",
    colors: &["#5d9b9b", "#6b8e6b", "#7a9a7a", "#4a7c59", "#5f9ea0"],
    radius: (0.8, 2.0),
    mass: (0.5, 5.0),
    atmosphere_chance: 0.7,
    atmospheres: &["Nitrogen/Oxygen", "Nitrogen", "Carbon Dioxide", "None"],
    moon_chance: 0.4,
    max_moons: 3,
    composition: Composition::TERRESTRIAL,
    has_rings: false,
    has_bands: false,
};

const ROCKY: TypeProfile = TypeProfile {
    name: "Rocky",
    colors: &["#a0a0a0", "#8b8b8b", "#9b9b9b", "#7a7a7a", "#b0a090"],
    radius: (0.3, 0.9),
    mass: (0.05, 0.8),
    atmosphere_chance: 0.2,
    atmospheres: &["Thin Carbon Dioxide", "Trace", "None"],
    moon_chance: 0.2,
    max_moons: 2,
    composition: Composition::ROCKY,
    has_rings: false,
    has_bands: false,
};

const LAVA_WORLD: TypeProfile = TypeProfile {
    name: "Lava World",
    colors: &["#ff6b35", "#ff8c42", "#e55934", "#ff4500", "#dc143c"],
    radius: (0.5, 1.5),
    mass: (0.3, 3.0),
    atmosphere_chance: 0.4,
    atmospheres: &["Sulfur Dioxide", "Carbon Dioxide", "Vaporized Rock"],
    moon_chance: 0.1,
    max_moons: 1,
    composition: Composition::LAVA_WORLD,
    has_rings: false,
    has_bands: false,
};

const ICE_WORLD: TypeProfile = TypeProfile {
    name: "Ice World",
    colors: &["#e0ffff", "#b0e0e6", "#add8e6", "#87ceeb", "#afeeee"],
    radius: (0.4, 2.5),
    mass: (0.1, 4.0),
    atmosphere_chance: 0.5,
    atmospheres: &["Nitrogen", "Methane", "None"],
    moon_chance: 0.3,
    max_moons: 2,
    composition: Composition::ICE_WORLD,
    has_rings: false,
    has_bands: false,
};

const OCEAN_WORLD: TypeProfile = TypeProfile {
    name: "Ocean World",
    colors: &["#1e90ff", "#4169e1", "#0077be", "#006994", "#0099cc"],
    radius: (0.8, 2.5),
    mass: (0.5, 6.0),
    atmosphere_chance: 0.9,
    atmospheres: &["Nitrogen/Oxygen", "Nitrogen/Water Vapor", "Carbon Dioxide"],
    moon_chance: 0.5,
    max_moons: 3,
    composition: Composition::OCEAN_WORLD,
    has_rings: false,
    has_bands: false,
};

const DWARF: TypeProfile = TypeProfile {
    name: "Dwarf Planet",
    colors: &["#c0c0c0", "#a9a9a9", "#d3d3d3", "#8b8989", "#cdc5bf"],
    radius: (0.1, 0.4),
    mass: (0.001, 0.05),
    atmosphere_chance: 0.05,
    atmospheres: &["Trace Nitrogen", "None"],
    moon_chance: 0.15,
    max_moons: 1,
    composition: Composition::DWARF,
    has_rings: false,
    has_bands: false,
};

impl PlanetType {
    /// Static profile for this type.
    pub fn profile(&self) -> &'static TypeProfile {
        match self {
            PlanetType::GasGiant => &GAS_GIANT,
            PlanetType::IceGiant => &ICE_GIANT,
            PlanetType::Terrestrial => &TERRESTRIAL,
            PlanetType::Rocky => &ROCKY,
            PlanetType::LavaWorld => &LAVA_WORLD,
            PlanetType::IceWorld => &ICE_WORLD,
            PlanetType::OceanWorld => &OCEAN_WORLD,
            PlanetType::Dwarf => &DWARF,
        }
    }

    /// Bond albedo used by the equilibrium-temperature approximation.
    pub fn albedo(&self) -> f64 {
        match self {
            PlanetType::IceWorld => 0.6,
            PlanetType::GasGiant => 0.5,
            _ => 0.3,
        }
    }

    /// Gas and ice giants host trojan swarms and ring systems.
    pub fn is_giant(&self) -> bool {
        matches!(self, PlanetType::GasGiant | PlanetType::IceGiant)
    }

    /// Rocky-family types, used by asteroid-belt gap scoring.
    pub fn is_rocky_family(&self) -> bool {
        matches!(
            self,
            PlanetType::Rocky
                | PlanetType::Terrestrial
                | PlanetType::LavaWorld
                | PlanetType::IceWorld
                | PlanetType::Dwarf
        )
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.profile().name)
    }
}
