//! Named real-system presets
//!
//! Historical astronomical data for reproducible systems: a seed matching a
//! preset name or alias hydrates this data instead of running the
//! procedural path. Compositions and orbital elements are literal; only
//! cosmetic values (phase angles, ring tints, surface scatter) come from
//! the seeded stream during hydration.

use planetary::{Composition, MoonType, PlanetType};
use stellar::SpectralClass;

/// Literal star parameters for a preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetStar {
    pub name: &'static str,
    pub class: SpectralClass,
    pub full_name: &'static str,
    pub temperature: f64,
    pub mass: f64,
    pub radius: f64,
    pub luminosity: f64,
    pub color: &'static str,
    pub frost_line: f64,
    pub habitable_zone_inner: f64,
    pub habitable_zone_outer: f64,
    pub inner_limit: f64,
}

/// Literal moon parameters for a preset planet.
#[derive(Debug, Clone, Copy)]
pub struct PresetMoon {
    pub name: &'static str,
    pub moon_type: MoonType,
    /// Display-unit orbit around the parent.
    pub orbit_radius: f64,
    /// Radius in Earth radii.
    pub size: f64,
    pub color: &'static str,
}

/// Literal planet parameters for a preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetPlanet {
    pub name: &'static str,
    pub planet_type: PlanetType,
    pub orbit_radius_au: f64,
    pub radius: f64,
    pub mass: f64,
    pub eccentricity: f64,
    pub color: &'static str,
    pub atmosphere: &'static str,
    pub composition: Composition,
    pub has_rings: bool,
    pub prominent_rings: bool,
    pub has_bands: bool,
    pub has_storm: bool,
    pub storm_size: f64,
    pub moons: &'static [PresetMoon],
}

/// Literal belt bounds for a preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetBelt {
    pub inner_au: f64,
    pub outer_au: f64,
    pub count: i64,
}

/// Literal comet parameters for a preset.
#[derive(Debug, Clone, Copy)]
pub struct PresetComet {
    pub name: &'static str,
    pub perihelion_au: f64,
    pub aphelion_au: f64,
    pub eccentricity: f64,
}

/// A complete named system.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub seed: &'static str,
    pub aliases: &'static [&'static str],
    pub star: PresetStar,
    pub planets: &'static [PresetPlanet],
    pub asteroid_belt: Option<PresetBelt>,
    pub kuiper_belt: Option<PresetBelt>,
    pub comets: &'static [PresetComet],
}

const fn planet(
    name: &'static str,
    planet_type: PlanetType,
    orbit_radius_au: f64,
    radius: f64,
    mass: f64,
    eccentricity: f64,
    color: &'static str,
    atmosphere: &'static str,
    composition: Composition,
    moons: &'static [PresetMoon],
) -> PresetPlanet {
    PresetPlanet {
        name,
        planet_type,
        orbit_radius_au,
        radius,
        mass,
        eccentricity,
        color,
        atmosphere,
        composition,
        has_rings: false,
        prominent_rings: false,
        has_bands: false,
        has_storm: false,
        storm_size: 0.2,
        moons,
    }
}

// =============================================================================
// Sol
// =============================================================================

const SOL_PLANETS: [PresetPlanet; 8] = [
    planet(
        "Mercury",
        PlanetType::Rocky,
        0.387,
        0.383,
        0.055,
        0.206,
        "#b0a090",
        "None",
        Composition { rock: 0.68, metal: 0.32, ..Composition::empty() },
        &[],
    ),
    planet(
        "Venus",
        PlanetType::Terrestrial,
        0.723,
        0.949,
        0.815,
        0.007,
        "#e6c87a",
        "Carbon Dioxide",
        Composition { rock: 0.70, metal: 0.25, volatiles: 0.05, ..Composition::empty() },
        &[],
    ),
    planet(
        "Earth",
        PlanetType::Terrestrial,
        1.0,
        1.0,
        1.0,
        0.017,
        "#5d9b9b",
        "Nitrogen/Oxygen",
        Composition { rock: 0.67, metal: 0.32, water: 0.01, ..Composition::empty() },
        &[PresetMoon {
            name: "Luna",
            moon_type: MoonType::Rocky,
            orbit_radius: 30.0,
            size: 0.273,
            color: "#c0c0c0",
        }],
    ),
    planet(
        "Mars",
        PlanetType::Rocky,
        1.524,
        0.532,
        0.107,
        0.093,
        "#c1440e",
        "Thin Carbon Dioxide",
        Composition { rock: 0.73, metal: 0.22, ice: 0.05, ..Composition::empty() },
        &[
            PresetMoon {
                name: "Phobos",
                moon_type: MoonType::Captured,
                orbit_radius: 8.0,
                size: 0.02,
                color: "#696969",
            },
            PresetMoon {
                name: "Deimos",
                moon_type: MoonType::Captured,
                orbit_radius: 12.0,
                size: 0.01,
                color: "#778899",
            },
        ],
    ),
    PresetPlanet {
        name: "Jupiter",
        planet_type: PlanetType::GasGiant,
        orbit_radius_au: 5.203,
        radius: 11.21,
        mass: 317.8,
        eccentricity: 0.049,
        color: "#e8c48a",
        atmosphere: "Hydrogen/Helium",
        composition: Composition::GAS_GIANT,
        has_rings: true,
        prominent_rings: false,
        has_bands: true,
        has_storm: true,
        storm_size: 0.25,
        moons: &[
            PresetMoon {
                name: "Io",
                moon_type: MoonType::Volcanic,
                orbit_radius: 35.0,
                size: 0.286,
                color: "#ffa500",
            },
            PresetMoon {
                name: "Europa",
                moon_type: MoonType::Icy,
                orbit_radius: 45.0,
                size: 0.245,
                color: "#e8f4f8",
            },
            PresetMoon {
                name: "Ganymede",
                moon_type: MoonType::Icy,
                orbit_radius: 60.0,
                size: 0.413,
                color: "#c0c0c0",
            },
            PresetMoon {
                name: "Callisto",
                moon_type: MoonType::Rocky,
                orbit_radius: 80.0,
                size: 0.378,
                color: "#808080",
            },
        ],
    },
    PresetPlanet {
        name: "Saturn",
        planet_type: PlanetType::GasGiant,
        orbit_radius_au: 9.537,
        radius: 9.45,
        mass: 95.2,
        eccentricity: 0.054,
        color: "#f4d9a0",
        atmosphere: "Hydrogen/Helium",
        composition: Composition::GAS_GIANT,
        has_rings: true,
        prominent_rings: true,
        has_bands: true,
        has_storm: false,
        storm_size: 0.2,
        moons: &[
            PresetMoon {
                name: "Mimas",
                moon_type: MoonType::Icy,
                orbit_radius: 25.0,
                size: 0.03,
                color: "#e8f4f8",
            },
            PresetMoon {
                name: "Enceladus",
                moon_type: MoonType::Icy,
                orbit_radius: 30.0,
                size: 0.04,
                color: "#f0f8ff",
            },
            PresetMoon {
                name: "Tethys",
                moon_type: MoonType::Icy,
                orbit_radius: 35.0,
                size: 0.08,
                color: "#e0e8f0",
            },
            PresetMoon {
                name: "Dione",
                moon_type: MoonType::Icy,
                orbit_radius: 40.0,
                size: 0.09,
                color: "#d0e0e8",
            },
            PresetMoon {
                name: "Rhea",
                moon_type: MoonType::Icy,
                orbit_radius: 50.0,
                size: 0.12,
                color: "#c8d8e0",
            },
            PresetMoon {
                name: "Titan",
                moon_type: MoonType::Icy,
                orbit_radius: 70.0,
                size: 0.404,
                color: "#e6a550",
            },
            PresetMoon {
                name: "Iapetus",
                moon_type: MoonType::Icy,
                orbit_radius: 100.0,
                size: 0.115,
                color: "#a0a0a0",
            },
        ],
    },
    PresetPlanet {
        name: "Uranus",
        planet_type: PlanetType::IceGiant,
        orbit_radius_au: 19.19,
        radius: 4.01,
        mass: 14.5,
        eccentricity: 0.047,
        color: "#7ec8e3",
        atmosphere: "Hydrogen/Methane",
        composition: Composition::ICE_GIANT,
        has_rings: true,
        prominent_rings: false,
        has_bands: false,
        has_storm: false,
        storm_size: 0.2,
        moons: &[
            PresetMoon {
                name: "Miranda",
                moon_type: MoonType::Icy,
                orbit_radius: 20.0,
                size: 0.037,
                color: "#c0c0c0",
            },
            PresetMoon {
                name: "Ariel",
                moon_type: MoonType::Icy,
                orbit_radius: 25.0,
                size: 0.091,
                color: "#d0d0d0",
            },
            PresetMoon {
                name: "Umbriel",
                moon_type: MoonType::Icy,
                orbit_radius: 30.0,
                size: 0.092,
                color: "#909090",
            },
            PresetMoon {
                name: "Titania",
                moon_type: MoonType::Icy,
                orbit_radius: 40.0,
                size: 0.124,
                color: "#b0b0b0",
            },
            PresetMoon {
                name: "Oberon",
                moon_type: MoonType::Icy,
                orbit_radius: 50.0,
                size: 0.119,
                color: "#a0a0a0",
            },
        ],
    },
    PresetPlanet {
        name: "Neptune",
        planet_type: PlanetType::IceGiant,
        orbit_radius_au: 30.07,
        radius: 3.88,
        mass: 17.1,
        eccentricity: 0.009,
        color: "#4169e1",
        atmosphere: "Hydrogen/Methane",
        composition: Composition::ICE_GIANT,
        has_rings: true,
        prominent_rings: false,
        has_bands: false,
        has_storm: true,
        storm_size: 0.2,
        moons: &[PresetMoon {
            name: "Triton",
            moon_type: MoonType::Icy,
            orbit_radius: 40.0,
            size: 0.212,
            color: "#d8bfd8",
        }],
    },
];

pub const SOL_SYSTEM: Preset = Preset {
    name: "Sol System",
    seed: "sol",
    aliases: &["solar system", "sol", "sun", "our system"],
    star: PresetStar {
        name: "Sol",
        class: SpectralClass::G,
        full_name: "G2V Yellow Dwarf",
        temperature: 5778.0,
        mass: 1.0,
        radius: 1.0,
        luminosity: 1.0,
        color: "#fff4ea",
        frost_line: 2.7,
        habitable_zone_inner: 0.95,
        habitable_zone_outer: 1.37,
        inner_limit: 0.1,
    },
    planets: &SOL_PLANETS,
    asteroid_belt: Some(PresetBelt { inner_au: 2.1, outer_au: 3.3, count: 200 }),
    kuiper_belt: Some(PresetBelt { inner_au: 30.0, outer_au: 50.0, count: 150 }),
    comets: &[
        PresetComet {
            name: "Halley's Comet",
            perihelion_au: 0.586,
            aphelion_au: 35.1,
            eccentricity: 0.967,
        },
        PresetComet {
            name: "Hale-Bopp",
            perihelion_au: 0.914,
            aphelion_au: 370.0,
            eccentricity: 0.995,
        },
    ],
};

// =============================================================================
// TRAPPIST-1
// =============================================================================

const TRAPPIST_ROCK: Composition =
    Composition { rock: 0.7, metal: 0.3, ..Composition::empty() };
const TRAPPIST_WET: Composition =
    Composition { rock: 0.6, metal: 0.2, water: 0.2, ..Composition::empty() };

const TRAPPIST1_PLANETS: [PresetPlanet; 7] = [
    planet("TRAPPIST-1b", PlanetType::Rocky, 0.0115, 1.12, 1.02, 0.006, "#a08070", "None", TRAPPIST_ROCK, &[]),
    planet("TRAPPIST-1c", PlanetType::Rocky, 0.0158, 1.10, 1.38, 0.007, "#908070", "Thin Carbon Dioxide", TRAPPIST_ROCK, &[]),
    planet("TRAPPIST-1d", PlanetType::Terrestrial, 0.0223, 0.77, 0.41, 0.008, "#6b8e6b", "Nitrogen", TRAPPIST_WET, &[]),
    planet("TRAPPIST-1e", PlanetType::Terrestrial, 0.0293, 0.91, 0.62, 0.005, "#5d9b9b", "Nitrogen/Oxygen", TRAPPIST_WET, &[]),
    planet(
        "TRAPPIST-1f",
        PlanetType::OceanWorld,
        0.0385,
        1.05,
        0.68,
        0.010,
        "#4a90d9",
        "Nitrogen/Water Vapor",
        Composition { water: 0.5, rock: 0.4, metal: 0.1, ..Composition::empty() },
        &[],
    ),
    planet(
        "TRAPPIST-1g",
        PlanetType::IceWorld,
        0.0469,
        1.13,
        1.34,
        0.002,
        "#b0e0e6",
        "Nitrogen",
        Composition { ice: 0.4, rock: 0.5, metal: 0.1, ..Composition::empty() },
        &[],
    ),
    planet(
        "TRAPPIST-1h",
        PlanetType::IceWorld,
        0.0619,
        0.77,
        0.33,
        0.006,
        "#e0ffff",
        "None",
        Composition { ice: 0.6, rock: 0.35, metal: 0.05, ..Composition::empty() },
        &[],
    ),
];

pub const TRAPPIST1_SYSTEM: Preset = Preset {
    name: "TRAPPIST-1 System",
    seed: "trappist-1",
    aliases: &["trappist", "trappist1", "trappist-1"],
    star: PresetStar {
        name: "TRAPPIST-1",
        class: SpectralClass::M,
        full_name: "M8V Red Dwarf",
        temperature: 2566.0,
        mass: 0.089,
        radius: 0.121,
        luminosity: 0.000525,
        color: "#ffcc6f",
        frost_line: 0.03,
        habitable_zone_inner: 0.022,
        habitable_zone_outer: 0.048,
        inner_limit: 0.005,
    },
    planets: &TRAPPIST1_PLANETS,
    asteroid_belt: None,
    kuiper_belt: None,
    comets: &[],
};

// =============================================================================
// Kepler-90
// =============================================================================

const KEPLER90_ICE_GIANT: Composition = Composition {
    hydrogen: 0.2,
    helium: 0.1,
    water: 0.4,
    ammonia: 0.15,
    methane: 0.15,
    ..Composition::empty()
};

const KEPLER90_PLANETS: [PresetPlanet; 8] = [
    planet("Kepler-90b", PlanetType::Rocky, 0.074, 1.31, 2.0, 0.01, "#c08060", "None", TRAPPIST_ROCK, &[]),
    planet("Kepler-90c", PlanetType::Terrestrial, 0.089, 1.18, 1.5, 0.01, "#a09080", "Thin Carbon Dioxide", TRAPPIST_ROCK, &[]),
    planet(
        "Kepler-90i",
        PlanetType::Terrestrial,
        0.1234,
        1.32,
        2.0,
        0.01,
        "#908570",
        "Carbon Dioxide",
        Composition { rock: 0.65, metal: 0.35, ..Composition::empty() },
        &[],
    ),
    planet(
        "Kepler-90d",
        PlanetType::Terrestrial,
        0.32,
        2.88,
        8.0,
        0.02,
        "#7a9a7a",
        "Nitrogen",
        Composition { rock: 0.6, metal: 0.25, water: 0.15, ..Composition::empty() },
        &[],
    ),
    planet("Kepler-90e", PlanetType::IceGiant, 0.42, 2.67, 7.0, 0.02, "#7ec8e3", "Hydrogen/Methane", KEPLER90_ICE_GIANT, &[]),
    planet("Kepler-90f", PlanetType::IceGiant, 0.48, 2.89, 8.0, 0.02, "#85c1e9", "Hydrogen/Methane", KEPLER90_ICE_GIANT, &[]),
    PresetPlanet {
        name: "Kepler-90g",
        planet_type: PlanetType::GasGiant,
        orbit_radius_au: 0.71,
        radius: 8.13,
        mass: 150.0,
        eccentricity: 0.03,
        color: "#deb887",
        atmosphere: "Hydrogen/Helium",
        composition: Composition::GAS_GIANT,
        has_rings: true,
        prominent_rings: false,
        has_bands: true,
        has_storm: false,
        storm_size: 0.2,
        moons: &[],
    },
    PresetPlanet {
        name: "Kepler-90h",
        planet_type: PlanetType::GasGiant,
        orbit_radius_au: 1.01,
        radius: 11.32,
        mass: 300.0,
        eccentricity: 0.03,
        color: "#e8c48a",
        atmosphere: "Hydrogen/Helium",
        composition: Composition::GAS_GIANT,
        has_rings: true,
        prominent_rings: false,
        has_bands: true,
        has_storm: false,
        storm_size: 0.2,
        moons: &[],
    },
];

pub const KEPLER90_SYSTEM: Preset = Preset {
    name: "Kepler-90 System",
    seed: "kepler-90",
    aliases: &["kepler90", "kepler-90"],
    star: PresetStar {
        name: "Kepler-90",
        class: SpectralClass::G,
        full_name: "G0V Yellow Dwarf",
        temperature: 6080.0,
        mass: 1.2,
        radius: 1.2,
        luminosity: 1.6,
        color: "#fff8e8",
        frost_line: 3.4,
        habitable_zone_inner: 1.1,
        habitable_zone_outer: 1.6,
        inner_limit: 0.05,
    },
    planets: &KEPLER90_PLANETS,
    asteroid_belt: None,
    kuiper_belt: Some(PresetBelt { inner_au: 2.0, outer_au: 4.0, count: 80 }),
    comets: &[],
};

/// All available presets.
pub const SYSTEM_PRESETS: [&Preset; 3] = [&SOL_SYSTEM, &TRAPPIST1_SYSTEM, &KEPLER90_SYSTEM];

/// Looks up the preset a seed refers to, by primary seed or alias,
/// case-insensitively and ignoring surrounding whitespace.
pub fn preset_for_seed(seed: &str) -> Option<&'static Preset> {
    let normalized = seed.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    SYSTEM_PRESETS.iter().copied().find(|preset| {
        preset.seed == normalized || preset.aliases.contains(&normalized.as_str())
    })
}
