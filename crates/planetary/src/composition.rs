use serde::{Deserialize, Serialize};

/// Bulk composition as mass fractions.
///
/// Only the fractions relevant to a body's type are non-zero; the populated
/// fields sum to approximately 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub hydrogen: f64,
    pub helium: f64,
    pub water: f64,
    pub ammonia: f64,
    pub methane: f64,
    pub rock: f64,
    pub metal: f64,
    pub ice: f64,
    pub volatiles: f64,
    pub other: f64,
}

/// Shorthand for the zero composition, used as a base for the presets below.
const EMPTY: Composition = Composition {
    hydrogen: 0.0,
    helium: 0.0,
    water: 0.0,
    ammonia: 0.0,
    methane: 0.0,
    rock: 0.0,
    metal: 0.0,
    ice: 0.0,
    volatiles: 0.0,
    other: 0.0,
};

impl Composition {
    pub const GAS_GIANT: Composition = Composition {
        hydrogen: 0.75,
        helium: 0.24,
        other: 0.01,
        ..EMPTY
    };

    pub const ICE_GIANT: Composition = Composition {
        hydrogen: 0.15,
        helium: 0.15,
        water: 0.35,
        ammonia: 0.2,
        methane: 0.15,
        ..EMPTY
    };

    pub const TERRESTRIAL: Composition = Composition {
        rock: 0.7,
        metal: 0.25,
        water: 0.05,
        ..EMPTY
    };

    pub const ROCKY: Composition = Composition {
        rock: 0.65,
        metal: 0.35,
        ..EMPTY
    };

    pub const LAVA_WORLD: Composition = Composition {
        rock: 0.5,
        metal: 0.3,
        volatiles: 0.2,
        ..EMPTY
    };

    pub const ICE_WORLD: Composition = Composition {
        ice: 0.6,
        rock: 0.35,
        metal: 0.05,
        ..EMPTY
    };

    pub const OCEAN_WORLD: Composition = Composition {
        water: 0.7,
        rock: 0.25,
        metal: 0.05,
        ..EMPTY
    };

    pub const DWARF: Composition = Composition {
        ice: 0.5,
        rock: 0.45,
        metal: 0.05,
        ..EMPTY
    };

    /// Composition with every fraction zero.
    pub const fn empty() -> Self {
        EMPTY
    }

    /// Sum of all fractions.
    pub fn total(&self) -> f64 {
        self.hydrogen
            + self.helium
            + self.water
            + self.ammonia
            + self.methane
            + self.rock
            + self.metal
            + self.ice
            + self.volatiles
            + self.other
    }
}
