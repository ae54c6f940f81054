//! System aggregate and generation orchestrator

use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orbital::kepler;
use planetary::{
    generate_planet, Archetype, Moon, Planet, PlanetContext, PlanetType, SurfaceDetails, Trojan,
};
use seedrand::SeededRandom;
use stellar::{generate_companion, generate_star, CompanionStar, Star};
use units::Length;

use crate::belts::{generate_asteroid_belt, generate_kuiper_belt, AsteroidBelt, KuiperBelt};
use crate::comets::{generate_comet, Comet, CometType};
use crate::config::GenerationConfig;
use crate::presets::{preset_for_seed, Preset};

/// Everything the generation pass needs: the seeded stream plus the
/// configuration record. No global state.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub rng: SeededRandom,
    pub config: GenerationConfig,
}

impl GenerationContext {
    /// Context seeded from a string (hashed deterministically).
    pub fn new(seed: &str, config: GenerationConfig) -> Self {
        Self {
            rng: SeededRandom::from_seed_str(seed),
            config,
        }
    }

    /// Context seeded from an integer directly.
    pub fn with_numeric_seed(seed: u32, config: GenerationConfig) -> Self {
        Self {
            rng: SeededRandom::new(seed),
            config,
        }
    }
}

/// The aggregate root: one star system, fully replaced on regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    /// Deterministic id derived from the seed string.
    pub id: Uuid,
    pub star: Star,
    pub secondary_star: Option<CompanionStar>,
    /// Planets ordered by strictly increasing orbit radius.
    pub planets: Vec<Planet>,
    pub asteroid_belt: Option<AsteroidBelt>,
    pub kuiper_belt: Option<KuiperBelt>,
    pub comets: Vec<Comet>,
    /// The formation pattern used; `None` for hydrated presets.
    pub archetype: Option<Archetype>,
    pub archetype_name: String,
    pub is_preset: bool,
}

/// Generates a complete system from a seed string.
///
/// A seed matching a preset name or alias hydrates that preset's literal
/// data; any other seed drives the full procedural path. Two calls with the
/// same seed and config produce identical systems.
pub fn generate_solar_system(ctx: &mut GenerationContext, seed: &str) -> SolarSystem {
    if let Some(preset) = preset_for_seed(seed) {
        info!("hydrating preset \"{}\" for seed \"{seed}\"", preset.name);
        return hydrate_preset(ctx, seed, preset);
    }

    let archetype = Archetype::select(&mut ctx.rng);
    generate_procedural(ctx, seed, archetype)
}

/// Generates a procedural system with a forced archetype.
///
/// Used by callers that want a specific formation pattern regardless of the
/// weighted draw.
pub fn generate_with_archetype(
    ctx: &mut GenerationContext,
    seed: &str,
    archetype: Archetype,
) -> SolarSystem {
    generate_procedural(ctx, seed, archetype)
}

fn generate_procedural(
    ctx: &mut GenerationContext,
    seed: &str,
    archetype: Archetype,
) -> SolarSystem {
    let config = ctx.config;
    let rng = &mut ctx.rng;

    let star = generate_star(rng);
    info!(
        "generating {} system around {} ({})",
        archetype,
        star.name,
        star.full_name
    );

    let secondary_star = if rng.next() < config.binary_star_chance {
        Some(generate_companion(rng, &star))
    } else {
        None
    };

    let profile = archetype.profile();
    let planet_count = rng.int_range(profile.planet_count.0, profile.planet_count.1);

    let planet_ctx = PlanetContext {
        star: &star,
        archetype,
        ring_chance: config.ring_chance,
        max_moons: config.max_moons,
    };

    let mut planets: Vec<Planet> = Vec::with_capacity(planet_count.max(0) as usize);
    let mut current_orbit_au = star.inner_limit * 2.0;

    // Circumbinary planets start beyond the companion's orbit
    if let Some(companion) = &secondary_star {
        let binary_clearance = Length::from_display(companion.orbit_radius).to_au() + 0.5;
        current_orbit_au = current_orbit_au.max(binary_clearance);
    }

    // Hot Jupiter archetypes place the migrated giant first, very close in
    let mut first_index = 0;
    if profile.features.has_hot_jupiter && planet_count > 0 {
        let hot_jupiter_orbit = rng.range(0.03, 0.08);
        let hot_jupiter = generate_planet(
            rng,
            &planet_ctx,
            0,
            hot_jupiter_orbit,
            Some(PlanetType::GasGiant),
        );
        current_orbit_au = hot_jupiter_orbit + hot_jupiter.hill_sphere.to_au() * 15.0;
        planets.push(hot_jupiter);
        first_index = 1;
    }

    for index in first_index..planet_count.max(0) as usize {
        // Spacing factor depends on position relative to the frost line
        let mut spacing_factor = if current_orbit_au < star.frost_line * 0.5 {
            rng.range(1.4, 1.8)
        } else if current_orbit_au < star.frost_line * 2.0 {
            rng.range(1.6, 2.2)
        } else {
            rng.range(1.8, 2.5)
        };

        if archetype == Archetype::Compact {
            spacing_factor = rng.range(1.2, 1.5);
        }
        if archetype == Archetype::Sparse {
            spacing_factor = rng.range(2.5, 4.0);
        }

        current_orbit_au *= spacing_factor;

        let mut planet = generate_planet(rng, &planet_ctx, index, current_orbit_au, None);

        if let Some(previous) = planets.last() {
            planet = repair_separation(&star, previous, planet);
            current_orbit_au = planet.orbit_radius.to_au();
        }

        planets.push(planet);
    }

    let asteroid_belt = if profile.features.asteroid_belt && planets.len() >= 3 {
        generate_asteroid_belt(rng, &star, &planets)
    } else {
        None
    };

    let kuiper_belt = if profile.features.kuiper_belt && !planets.is_empty() {
        let last_orbit_au = planets[planets.len() - 1].orbit_radius.to_au();
        Some(generate_kuiper_belt(rng, &star, last_orbit_au))
    } else {
        None
    };

    let comet_count = rng.int_range(config.comet_count.min, config.comet_count.max);
    let comets = (0..comet_count.max(0))
        .map(|_| generate_comet(rng, &star))
        .collect();

    debug!(
        "generated {} planets, belt: {}, kuiper: {}",
        planets.len(),
        asteroid_belt.is_some(),
        kuiper_belt.is_some()
    );

    SolarSystem {
        id: system_id(seed),
        star,
        secondary_star,
        planets,
        asteroid_belt,
        kuiper_belt,
        comets,
        archetype: Some(archetype),
        archetype_name: profile.name.to_string(),
        is_preset: false,
    }
}

/// Enforces the mutual-Hill-sphere separation invariant between a placed
/// planet and the next candidate.
///
/// Pure repair step: when the candidate sits closer than the minimum stable
/// separation, it comes back pushed outward with every orbit-derived
/// quantity recomputed, so the invariant check and the physics update stay
/// atomic.
fn repair_separation(star: &Star, previous: &Planet, candidate: Planet) -> Planet {
    let previous_orbit_au = previous.orbit_radius.to_au();
    let previous_mass = previous.mass.to_earth_masses();
    let mass_earth = candidate.mass.to_earth_masses();

    // Pushing outward also enlarges the candidate's Hill sphere, so iterate
    // until the separation holds against the repaired orbit itself
    let mut orbit_au = candidate.orbit_radius.to_au();
    let mut repaired = false;
    for _ in 0..50 {
        let min_separation = kepler::min_planet_separation(
            previous_orbit_au,
            previous_mass,
            orbit_au,
            mass_earth,
            star.mass,
        );
        if orbit_au - previous_orbit_au >= min_separation {
            break;
        }
        orbit_au = previous_orbit_au + min_separation * 1.2;
        repaired = true;
    }

    if !repaired {
        return candidate;
    }

    debug!(
        "pushed planet {} outward to {orbit_au:.3} AU for Hill-sphere stability",
        candidate.id
    );

    Planet {
        orbit_radius: Length::from_au(orbit_au),
        orbital_period: kepler::orbital_period(orbit_au, star.mass),
        orbital_velocity: kepler::orbital_velocity(orbit_au, star.mass),
        hill_sphere: Length::from_au(kepler::hill_sphere(orbit_au, mass_earth, star.mass)),
        ..candidate
    }
}

/// Deterministic system id from the seed string.
fn system_id(seed: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
}

// =============================================================================
// Preset hydration
// =============================================================================

/// Builds a system from a preset's literal data.
///
/// Existence and placement take no randomness; cosmetic fields (phase
/// angles, ring tints, surface scatter) still draw from the stream so the
/// hydrated system animates like a generated one.
fn hydrate_preset(ctx: &mut GenerationContext, seed: &str, preset: &Preset) -> SolarSystem {
    let rng = &mut ctx.rng;

    let star = Star {
        class: preset.star.class,
        name: preset.star.name.to_string(),
        full_name: preset.star.full_name.to_string(),
        color: preset.star.color.to_string(),
        temperature: preset.star.temperature,
        radius: preset.star.radius,
        mass: preset.star.mass,
        luminosity: preset.star.luminosity,
        habitable_zone_inner: preset.star.habitable_zone_inner,
        habitable_zone_outer: preset.star.habitable_zone_outer,
        frost_line: preset.star.frost_line,
        inner_limit: preset.star.inner_limit,
        visual_radius: 30.0 + preset.star.radius * 3.0,
    };

    let planets = preset
        .planets
        .iter()
        .enumerate()
        .map(|(index, data)| hydrate_planet(rng, &star, index, data))
        .collect();

    let asteroid_belt = preset.asteroid_belt.map(|belt| {
        let mut asteroids = Vec::with_capacity(belt.count as usize);
        for _ in 0..belt.count {
            let radius_au = belt.inner_au + rng.next() * (belt.outer_au - belt.inner_au);
            asteroids.push(crate::belts::Asteroid {
                angle: rng.range(0.0, std::f64::consts::TAU),
                radius: Length::from_au(radius_au),
                eccentricity: 0.0,
                size: rng.range(0.5, 2.0),
                orbital_period: kepler::orbital_period(radius_au, star.mass),
                color: rng.choice(&["#888", "#999", "#777", "#aaa"]).to_string(),
            });
        }
        AsteroidBelt {
            inner_radius: Length::from_au(belt.inner_au),
            outer_radius: Length::from_au(belt.outer_au),
            asteroids,
        }
    });

    let kuiper_belt = preset.kuiper_belt.map(|belt| {
        let mut objects = Vec::with_capacity(belt.count as usize);
        for _ in 0..belt.count {
            let radius_au = belt.inner_au + rng.next() * (belt.outer_au - belt.inner_au);
            objects.push(crate::belts::KuiperObject {
                angle: rng.range(0.0, std::f64::consts::TAU),
                radius: Length::from_au(radius_au),
                eccentricity: 0.0,
                inclination: 0.0,
                size: rng.range(0.5, 2.5),
                orbital_period: kepler::orbital_period(radius_au, star.mass),
                color: rng.choice(&["#aaa", "#bbb", "#999", "#ccc"]).to_string(),
            });
        }
        KuiperBelt {
            inner_radius: Length::from_au(belt.inner_au),
            outer_radius: Length::from_au(belt.outer_au),
            objects,
        }
    });

    let comets = preset
        .comets
        .iter()
        .map(|data| {
            let profile = CometType::WaterIce.profile();
            Comet {
                name: Some(data.name.to_string()),
                comet_type: CometType::WaterIce,
                perihelion: Length::from_au(data.perihelion_au),
                aphelion: Length::from_au(data.aphelion_au),
                semi_major_axis: Length::from_au((data.perihelion_au + data.aphelion_au) / 2.0),
                eccentricity: data.eccentricity,
                angle: rng.range(0.0, std::f64::consts::TAU),
                orbital_period: rng.range(100.0, 500.0),
                inclination: 0.0,
                size: rng.range(1.0, 3.0),
                color: "#88ccff".to_string(),
                tail_color: profile.tail_color,
                dust_color: profile.dust_color,
                volatility: profile.volatility,
                tail_brightness: profile.tail_brightness,
                tail_activation_radius: Length::from_au(
                    2.5 * star.luminosity.sqrt() * profile.volatility,
                ),
            }
        })
        .collect();

    SolarSystem {
        id: system_id(seed),
        star,
        secondary_star: None,
        planets,
        asteroid_belt,
        kuiper_belt,
        comets,
        archetype: None,
        archetype_name: preset.name.to_string(),
        is_preset: true,
    }
}

fn hydrate_planet(
    rng: &mut SeededRandom,
    star: &Star,
    index: usize,
    data: &crate::presets::PresetPlanet,
) -> Planet {
    let orbit_au = data.orbit_radius_au;
    let orbital_period = kepler::orbital_period(orbit_au, star.mass);
    let orbital_velocity = kepler::orbital_velocity(orbit_au, star.mass);
    let hill_sphere = kepler::hill_sphere(orbit_au, data.mass, star.mass);

    let temperature =
        planetary::generation::equilibrium_temperature(star, orbit_au, data.planet_type);

    let angle = rng.range(0.0, std::f64::consts::TAU);
    let rotation_speed = rng.range(0.001, 0.01);
    let ring_color = format!(
        "rgba({}, {}, {}, 0.5)",
        rng.int_range(150, 200),
        rng.int_range(150, 180),
        rng.int_range(130, 160)
    );
    let visual_radius = (4.0 + (data.radius + 1.0).ln() * 8.0).clamp(4.0, 25.0);

    let surface = hydrate_surface(rng, data, temperature);

    let moons = data
        .moons
        .iter()
        .enumerate()
        .map(|(moon_index, moon)| hydrate_moon(rng, moon, moon_index))
        .collect();

    let mut planet = Planet {
        id: index,
        name: data.name.to_string(),
        planet_type: data.planet_type,
        color: data.color.to_string(),
        radius: data.radius,
        mass: units::Mass::from_earth_masses(data.mass),
        orbit_radius: Length::from_au(orbit_au),
        eccentricity: data.eccentricity,
        orbital_period,
        orbital_velocity,
        hill_sphere: Length::from_au(hill_sphere),
        angle,
        rotation_speed,
        atmosphere: data.atmosphere.to_string(),
        composition: data.composition,
        moons,
        trojans: Vec::new(),
        has_rings: data.has_rings,
        prominent_rings: data.prominent_rings,
        has_bands: data.has_bands,
        ring_color,
        temperature,
        in_habitable_zone: orbit_au >= star.habitable_zone_inner
            && orbit_au <= star.habitable_zone_outer,
        beyond_frost_line: orbit_au > star.frost_line,
        visual_radius,
        surface,
        trail: Vec::new(),
        selected: false,
    };

    // Known giants get their trojan swarms without the probability gate
    if data.planet_type.is_giant() && data.mass > 30.0 {
        let trojan_count = rng.int_range(15, 40);
        let trojans = (0..trojan_count)
            .map(|_| Trojan {
                lagrange_point: if rng.next() < 0.5 {
                    planetary::LagrangePoint::L4
                } else {
                    planetary::LagrangePoint::L5
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

fn hydrate_surface(
    rng: &mut SeededRandom,
    data: &crate::presets::PresetPlanet,
    temperature: f64,
) -> SurfaceDetails {
    let mut surface = SurfaceDetails::default();

    surface.has_ice_caps = matches!(
        data.planet_type,
        PlanetType::Terrestrial | PlanetType::Rocky | PlanetType::IceWorld
    ) && temperature < 300.0;
    surface.ice_caps_size = rng.range(0.1, 0.3);
    surface.has_storm = data.has_storm;
    surface.storm_angle = rng.range(0.0, std::f64::consts::TAU);
    surface.storm_size = data.storm_size;

    if matches!(data.planet_type, PlanetType::Rocky | PlanetType::Dwarf) {
        let crater_count = rng.int_range(3, 8);
        for _ in 0..crater_count {
            surface.craters.push(planetary::surface::Crater {
                angle: rng.range(0.0, std::f64::consts::TAU),
                distance: rng.range(0.2, 0.7),
                size: rng.range(0.05, 0.15),
            });
        }
    }

    if data.has_bands {
        surface.band_count = rng.int_range(4, 12);
    }

    if matches!(
        data.planet_type,
        PlanetType::Terrestrial | PlanetType::OceanWorld
    ) {
        surface.cloud_coverage = rng.range(0.1, 0.5);
    }

    surface
}

fn hydrate_moon(
    rng: &mut SeededRandom,
    data: &crate::presets::PresetMoon,
    index: usize,
) -> Moon {
    // Match the display dynamics of generated moons: period derived from the
    // 0.02 / sqrt(r / 30) angular-speed law
    let orbit_speed = 0.02 / (data.orbit_radius / 30.0).sqrt();
    let orbital_period = (0.003 * std::f64::consts::TAU / orbit_speed).max(5.0);

    Moon {
        id: index,
        name: data.name.to_string(),
        moon_type: data.moon_type,
        color: data.color.to_string(),
        mass: rng.range(0.0001, 0.01),
        radius: data.size,
        visual_radius: rng.range(2.0, 5.0),
        orbit_radius: data.orbit_radius,
        orbit_radius_au: Length::from_display(data.orbit_radius),
        orbital_period,
        angle: rng.range(0.0, std::f64::consts::TAU),
        eccentricity: 0.0,
    }
}
