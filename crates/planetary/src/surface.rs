use serde::{Deserialize, Serialize};

use seedrand::SeededRandom;

use crate::planet_type::PlanetType;

/// An impact crater on a rocky body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crater {
    pub angle: f64,
    /// Fraction of the body radius from center.
    pub distance: f64,
    /// Fraction of the body radius.
    pub size: f64,
}

/// Generated surface features, all presentation-facing but seeded so they
/// reproduce with the system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceDetails {
    pub has_ice_caps: bool,
    pub ice_caps_size: f64,
    pub has_storm: bool,
    pub storm_angle: f64,
    pub storm_size: f64,
    pub craters: Vec<Crater>,
    pub band_count: i64,
    pub cloud_coverage: f64,
}

/// Samples surface features for a typed planet.
///
/// Ice caps form on cool terrestrial-family worlds, storms on gas giants,
/// craters on airless rocky bodies, bands on banded giants, clouds under
/// real atmospheres.
pub fn generate_surface(
    rng: &mut SeededRandom,
    planet_type: PlanetType,
    temperature: f64,
    atmosphere: &str,
    has_bands: bool,
) -> SurfaceDetails {
    let mut surface = SurfaceDetails::default();

    if matches!(
        planet_type,
        PlanetType::Terrestrial | PlanetType::Rocky | PlanetType::IceWorld
    ) && temperature < 300.0
    {
        surface.has_ice_caps = rng.next() < 0.6;
        surface.ice_caps_size = rng.range(0.1, 0.3);
    }

    if planet_type == PlanetType::GasGiant && rng.next() < 0.4 {
        surface.has_storm = true;
        surface.storm_angle = rng.range(0.0, std::f64::consts::TAU);
        surface.storm_size = rng.range(0.15, 0.35);
    }

    if matches!(planet_type, PlanetType::Rocky | PlanetType::Dwarf) {
        let crater_count = rng.int_range(3, 8);
        for _ in 0..crater_count {
            surface.craters.push(Crater {
                angle: rng.range(0.0, std::f64::consts::TAU),
                distance: rng.range(0.2, 0.7),
                size: rng.range(0.05, 0.15),
            });
        }
    }

    if has_bands || planet_type == PlanetType::GasGiant {
        surface.band_count = rng.int_range(4, 12);
    }

    if matches!(planet_type, PlanetType::Terrestrial | PlanetType::OceanWorld)
        && atmosphere != "None"
    {
        surface.cloud_coverage = rng.range(0.1, 0.5);
    }

    surface
}
