use std::fmt;

use serde::{Deserialize, Serialize};

use seedrand::SeededRandom;

/// Named formation patterns a system can follow.
///
/// The archetype constrains planet count, which types are eligible in each
/// zone, and whether belts form at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Archetype {
    SolarLike,
    HotJupiter,
    SuperEarth,
    Compact,
    Sparse,
}

/// Feature flags attached to an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeFeatures {
    pub has_hot_jupiter: bool,
    pub inner_rocky_zone: bool,
    pub outer_giant_zone: bool,
    pub asteroid_belt: bool,
    pub kuiper_belt: bool,
}

/// Static profile for one archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub probability: f64,
    /// Inclusive planet count range.
    pub planet_count: (i64, i64),
    pub features: ArchetypeFeatures,
}

const SOLAR_LIKE: ArchetypeProfile = ArchetypeProfile {
    name: "Solar System Type",
    description: "Rocky inner planets, gas giants beyond frost line",
    probability: 0.35,
    planet_count: (4, 10),
    features: ArchetypeFeatures {
        has_hot_jupiter: false,
        inner_rocky_zone: true,
        outer_giant_zone: true,
        asteroid_belt: true,
        kuiper_belt: true,
    },
};

const HOT_JUPITER: ArchetypeProfile = ArchetypeProfile {
    name: "Hot Jupiter System",
    description: "Gas giant very close to star, few other planets",
    probability: 0.15,
    planet_count: (1, 4),
    features: ArchetypeFeatures {
        has_hot_jupiter: true,
        inner_rocky_zone: false,
        outer_giant_zone: false,
        asteroid_belt: false,
        kuiper_belt: true,
    },
};

const SUPER_EARTH: ArchetypeProfile = ArchetypeProfile {
    name: "Super-Earth System",
    description: "Multiple large rocky planets, tightly packed",
    probability: 0.25,
    planet_count: (3, 7),
    features: ArchetypeFeatures {
        has_hot_jupiter: false,
        inner_rocky_zone: true,
        outer_giant_zone: false,
        asteroid_belt: false,
        kuiper_belt: true,
    },
};

const COMPACT: ArchetypeProfile = ArchetypeProfile {
    name: "Compact Multi-Planet",
    description: "Many small planets in tight orbits (like TRAPPIST-1)",
    probability: 0.15,
    planet_count: (5, 8),
    features: ArchetypeFeatures {
        has_hot_jupiter: false,
        inner_rocky_zone: true,
        outer_giant_zone: false,
        asteroid_belt: false,
        kuiper_belt: false,
    },
};

const SPARSE: ArchetypeProfile = ArchetypeProfile {
    name: "Sparse System",
    description: "Few widely-spaced planets",
    probability: 0.10,
    planet_count: (2, 4),
    features: ArchetypeFeatures {
        has_hot_jupiter: false,
        inner_rocky_zone: true,
        outer_giant_zone: true,
        asteroid_belt: true,
        kuiper_belt: true,
    },
};

impl Archetype {
    /// All archetypes in catalog order.
    pub const ALL: [Archetype; 5] = [
        Archetype::SolarLike,
        Archetype::HotJupiter,
        Archetype::SuperEarth,
        Archetype::Compact,
        Archetype::Sparse,
    ];

    /// Static profile for this archetype.
    pub fn profile(&self) -> &'static ArchetypeProfile {
        match self {
            Archetype::SolarLike => &SOLAR_LIKE,
            Archetype::HotJupiter => &HOT_JUPITER,
            Archetype::SuperEarth => &SUPER_EARTH,
            Archetype::Compact => &COMPACT,
            Archetype::Sparse => &SPARSE,
        }
    }

    /// Probability-weighted archetype draw; falls back to solar-like when the
    /// cumulative scan exhausts the table.
    pub fn select(rng: &mut SeededRandom) -> Self {
        let weights: Vec<f64> = Self::ALL.iter().map(|a| a.profile().probability).collect();
        match rng.weighted_pick(&weights) {
            Some(index) => Self::ALL[index],
            None => Archetype::SolarLike,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.profile().name)
    }
}
