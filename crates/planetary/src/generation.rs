//! Planet and moon sampling
//!
//! Type selection is a decision tree keyed on orbital distance relative to
//! the star's zone geometry, with archetype overrides. Everything after the
//! type is uniform draws bounded by the type profile plus the derived
//! orbital physics.

use naming::{generate_name, moon_name};
use orbital::kepler;
use seedrand::SeededRandom;
use stellar::Star;
use units::{Length, Mass, EARTH_MASSES_PER_SOLAR, SOLAR_RADII_PER_AU};

use crate::archetype::Archetype;
use crate::moon::{Moon, MoonType};
use crate::planet::Planet;
use crate::planet_type::PlanetType;
use crate::surface::generate_surface;
use crate::trojan::{LagrangePoint, Trojan};

/// Stellar and configuration context for planet generation.
///
/// Groups the parameters every planet draw needs so call sites stay small.
#[derive(Debug, Clone, Copy)]
pub struct PlanetContext<'a> {
    pub star: &'a Star,
    pub archetype: Archetype,
    /// Global probability that a ring-capable planet actually gets rings.
    pub ring_chance: f64,
    /// Configured ceiling on moons per planet.
    pub max_moons: i64,
}

/// Resolves the planet type for an orbital distance.
///
/// Archetype overrides come first (hot-Jupiter forcing, super-Earth and
/// compact pools), then the physics-based zones: lava worlds hug the star,
/// rocky and terrestrial types fill the inner system, giants form beyond the
/// frost line where an outer giant zone exists, dwarfs take the far fringe.
pub fn type_for_distance(
    rng: &mut SeededRandom,
    distance_au: f64,
    star: &Star,
    archetype: Archetype,
) -> PlanetType {
    use PlanetType::*;

    let features = archetype.profile().features;
    let frost_line = star.frost_line;
    let hz_inner = star.habitable_zone_inner;
    let hz_outer = star.habitable_zone_outer;

    // Hot Jupiter archetype: anything this close is the migrated giant
    if features.has_hot_jupiter && distance_au < 0.1 {
        return GasGiant;
    }

    // Super-Earth archetype: no gas giants, larger rocky/terrestrial pool
    if archetype == Archetype::SuperEarth {
        if distance_au < hz_inner * 0.5 {
            return *rng.choice(&[LavaWorld, Rocky]);
        }
        return *rng.choice(&[Terrestrial, Terrestrial, OceanWorld, Rocky, IceWorld]);
    }

    // Compact archetype: small planets only
    if archetype == Archetype::Compact {
        if distance_au < hz_inner * 0.3 {
            return *rng.choice(&[LavaWorld, Rocky]);
        }
        return *rng.choice(&[Rocky, Terrestrial, IceWorld, Dwarf]);
    }

    // Inside the frost line volatiles are blown away
    if distance_au < frost_line * 0.5 {
        if distance_au < star.inner_limit * 3.0 {
            return LavaWorld;
        }
        if distance_au < hz_inner {
            return *rng.choice(&[Rocky, Rocky, LavaWorld]);
        }
        if distance_au <= hz_outer {
            return *rng.choice(&[Terrestrial, Terrestrial, OceanWorld, Rocky]);
        }
        return *rng.choice(&[Rocky, IceWorld, Terrestrial]);
    }

    // Transition zone around the frost line
    if distance_au < frost_line * 1.5 {
        return *rng.choice(&[IceWorld, IceWorld, Terrestrial, GasGiant]);
    }

    // Beyond the frost line giants can form where the archetype allows
    if distance_au < frost_line * 4.0 {
        if features.outer_giant_zone {
            return *rng.choice(&[GasGiant, GasGiant, IceGiant, IceWorld]);
        }
        return *rng.choice(&[IceWorld, IceWorld, Dwarf]);
    }

    if distance_au < frost_line * 8.0 {
        if features.outer_giant_zone {
            return *rng.choice(&[IceGiant, IceGiant, GasGiant, IceWorld]);
        }
        return *rng.choice(&[IceWorld, Dwarf, Dwarf]);
    }

    *rng.choice(&[Dwarf, Dwarf, IceWorld])
}

/// Generates a planet at a fixed orbit, with moons, trojans, and surface.
pub fn generate_planet(
    rng: &mut SeededRandom,
    ctx: &PlanetContext,
    id: usize,
    orbit_au: f64,
    force_type: Option<PlanetType>,
) -> Planet {
    let star = ctx.star;
    let planet_type =
        force_type.unwrap_or_else(|| type_for_distance(rng, orbit_au, star, ctx.archetype));
    let profile = planet_type.profile();

    // Mass first: the orbital physics depends on it
    let mass = rng.range(profile.mass.0, profile.mass.1);
    let radius = rng.range(profile.radius.0, profile.radius.1);

    let orbital_period = kepler::orbital_period(orbit_au, star.mass);
    let orbital_velocity = kepler::orbital_velocity(orbit_au, star.mass);
    let hill_sphere = kepler::hill_sphere(orbit_au, mass, star.mass);

    // Inner orbits circularize; the outer system tolerates more eccentricity
    let mut max_eccentricity = 0.1;
    if orbit_au > star.frost_line {
        max_eccentricity = 0.2;
    }
    if orbit_au > star.frost_line * 5.0 {
        max_eccentricity = 0.3;
    }
    let eccentricity = rng.range(0.0, max_eccentricity);

    let name = generate_name(rng);
    let color = rng.choice(profile.colors).to_string();
    let angle = rng.range(0.0, std::f64::consts::TAU);
    let rotation_speed = rng.range(0.001, 0.01);

    let atmosphere = if rng.next() < profile.atmosphere_chance {
        rng.choice(profile.atmospheres).to_string()
    } else {
        "None".to_string()
    };

    let has_rings = profile.has_rings && rng.next() < ctx.ring_chance;
    let ring_color = format!(
        "rgba({}, {}, {}, 0.5)",
        rng.int_range(150, 200),
        rng.int_range(150, 180),
        rng.int_range(130, 160)
    );

    let visual_radius = (4.0 + (radius + 1.0).ln() * 8.0).clamp(4.0, 25.0);
    let temperature = equilibrium_temperature(star, orbit_au, planet_type);

    let in_habitable_zone =
        orbit_au >= star.habitable_zone_inner && orbit_au <= star.habitable_zone_outer;
    let beyond_frost_line = orbit_au > star.frost_line;

    let surface = generate_surface(rng, planet_type, temperature, &atmosphere, profile.has_bands);

    let mut planet = Planet {
        id,
        name,
        planet_type,
        color,
        radius,
        mass: Mass::from_earth_masses(mass),
        orbit_radius: Length::from_au(orbit_au),
        eccentricity,
        orbital_period,
        orbital_velocity,
        hill_sphere: Length::from_au(hill_sphere),
        angle,
        rotation_speed,
        atmosphere,
        composition: profile.composition,
        moons: Vec::new(),
        trojans: Vec::new(),
        has_rings,
        prominent_rings: false,
        has_bands: profile.has_bands,
        ring_color,
        temperature,
        in_habitable_zone,
        beyond_frost_line,
        visual_radius,
        surface,
        trail: Vec::new(),
        selected: false,
    };

    // Moon formation is easier beyond the frost line
    let moon_chance_multiplier = if beyond_frost_line { 1.5 } else { 1.0 };
    if rng.next() < profile.moon_chance * moon_chance_multiplier {
        let max_moons = profile.max_moons.min(ctx.max_moons);
        let moon_count = rng.int_range(1, max_moons);
        let moons = (0..moon_count.max(0) as usize)
            .map(|index| generate_moon(rng, &planet, index))
            .collect();
        planet.moons = moons;
    }

    // Trojan swarms need a massive co-orbital anchor
    if planet_type.is_giant() && mass > 30.0 && rng.next() < 0.6 {
        let trojan_count = rng.int_range(15, 40);
        let trojans = (0..trojan_count)
            .map(|_| Trojan {
                lagrange_point: if rng.next() < 0.5 {
                    LagrangePoint::L4
                } else {
                    LagrangePoint::L5
                },
                offset_angle: rng.range(-0.12, 0.12),
                offset_radius: rng.range(-10.0, 10.0),
                size: rng.range(0.5, 1.5),
                color: rng.choice(&["#666", "#777", "#888"]).to_string(),
            })
            .collect();
        planet.trojans = trojans;
    }

    planet
}

/// Generates one moon for a parent planet.
pub fn generate_moon(rng: &mut SeededRandom, planet: &Planet, index: usize) -> Moon {
    let moon_type = select_moon_type(rng, planet);

    // Moon to Ganymede mass range
    let mass = rng.range(0.0001, 0.01);

    // Stable satellite orbits live well inside the Hill sphere
    let hill_au = planet.hill_sphere.to_au();
    let min_orbit_au = hill_au * 0.02;
    let max_orbit_au = hill_au * 0.4;
    let orbit_au = min_orbit_au + (max_orbit_au - min_orbit_au) * ((index as f64 + 1.0) / 8.0);

    let orbit_radius = planet.visual_radius + 15.0 + index as f64 * 12.0;

    // Simplified Kepler around the planet, scaled for visibility
    let planet_mass_solar = planet.mass.to_earth_masses() / EARTH_MASSES_PER_SOLAR;
    let orbital_period = ((orbit_au.powi(3) / planet_mass_solar).sqrt() * 10.0).max(5.0);

    Moon {
        id: index,
        name: moon_name(&planet.name, index),
        moon_type,
        color: rng.choice(moon_type.colors()).to_string(),
        mass,
        radius: rng.range(0.1, 0.4),
        visual_radius: rng.range(2.0, 5.0),
        orbit_radius,
        orbit_radius_au: Length::from_au(orbit_au),
        orbital_period,
        angle: rng.range(0.0, std::f64::consts::TAU),
        eccentricity: rng.range(0.0, 0.1),
    }
}

/// Moon type affinity: icy parents and the outer system favor icy moons,
/// lava worlds keep volcanic or rocky companions.
fn select_moon_type(rng: &mut SeededRandom, planet: &Planet) -> MoonType {
    match planet.planet_type {
        PlanetType::IceGiant | PlanetType::IceWorld => {
            if rng.next() < 0.7 {
                MoonType::Icy
            } else {
                *rng.choice(&MoonType::ALL)
            }
        }
        PlanetType::LavaWorld => {
            if rng.next() < 0.5 {
                MoonType::Volcanic
            } else {
                MoonType::Rocky
            }
        }
        _ if planet.beyond_frost_line => {
            if rng.next() < 0.5 {
                MoonType::Icy
            } else {
                *rng.choice(&MoonType::ALL)
            }
        }
        _ => *rng.choice(&MoonType::ALL),
    }
}

/// Stefan-Boltzmann equilibrium temperature with per-type albedo, rounded to
/// whole Kelvin.
pub fn equilibrium_temperature(star: &Star, orbit_au: f64, planet_type: PlanetType) -> f64 {
    let albedo = planet_type.albedo();
    (star.temperature * (star.radius / (2.0 * orbit_au * SOLAR_RADII_PER_AU)).sqrt()
        * (1.0 - albedo).powf(0.25))
    .round()
}
