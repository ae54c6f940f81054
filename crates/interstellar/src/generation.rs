//! Visitor generation
//!
//! Every visitor follows the same recipe: draw a spawn distance and a
//! perihelion, derive an eccentricity above 1 from the kind's velocity
//! factor, then back-solve the anomaly chain so the object's first position
//! query lands exactly at the spawn distance on the inbound leg.

use naming::generate_name;
use orbital::hyperbolic;
use seedrand::SeededRandom;
use stellar::{SpectralClass, Star};
use units::{Length, DISPLAY_UNITS_PER_AU};

use crate::catalog::{
    black_hole_visual_radius, InterstellarClass, RogueSubtype, BLACK_HOLE_MASS, COMET_COLORS,
    COMET_DUST_COLOR, COMET_SIZE, COMET_TAIL_COLOR, DISK_COLORS, MAX_PERIHELION, MIN_PERIHELION,
    ROGUE_SIZE, SPAWN_DISTANCE,
};
use crate::object::{InterstellarKind, InterstellarObject, MiniPlanet, MiniStar, Trajectory};

/// Mean-motion scale: hyperbolic passages play out over visible timescales.
const MOTION_SCALE: f64 = 0.00002;
/// Passing systems drift slightly slower.
const SYSTEM_MOTION_SCALE: f64 = 0.000015;

/// Generates a visitor of the given class, seeded at its spawn distance.
///
/// `time` is the simulation time of the spawn; the trajectory's mean anomaly
/// is referenced back to time zero so position queries use absolute time.
pub fn generate_visitor(
    rng: &mut SeededRandom,
    star: &Star,
    class: InterstellarClass,
    id: u64,
    time: f64,
) -> InterstellarObject {
    match class {
        InterstellarClass::Comet => generate_comet(rng, star, id, time),
        InterstellarClass::RoguePlanet => generate_rogue_planet(rng, star, id, time),
        InterstellarClass::BlackHole => generate_black_hole(rng, star, id, time),
        InterstellarClass::PassingSystem => generate_passing_system(rng, star, id, time),
    }
}

/// Builds the hyperbolic trajectory for a visitor.
///
/// Semi-major axis follows from the perihelion (a = −q / (e − 1)); the
/// starting true anomaly solves the conic equation at the spawn distance
/// (cosine clamped against drift), negated so the object approaches; the
/// mean anomaly is back-derived through the eccentric-anomaly identity and
/// shifted by the spawn time so absolute-time queries start at the spawn
/// point.
fn seed_trajectory(
    spawn_distance_au: f64,
    perihelion_au: f64,
    eccentricity: f64,
    perihelion_angle: f64,
    inclination: f64,
    star_mass: f64,
    motion_scale: f64,
    time: f64,
) -> Trajectory {
    let semi_major_axis_au = -perihelion_au / (eccentricity - 1.0);

    let semi_latus = semi_major_axis_au.abs() * (eccentricity * eccentricity - 1.0);
    let cos_theta = ((semi_latus / spawn_distance_au - 1.0) / eccentricity).clamp(-1.0, 1.0);
    let starting_anomaly = -cos_theta.acos();

    let eccentric = hyperbolic::eccentric_anomaly_from_true(starting_anomaly, eccentricity);
    let mean_at_spawn = hyperbolic::mean_anomaly_from_eccentric(eccentric, eccentricity);

    let mean_motion = hyperbolic::mean_motion(semi_major_axis_au, star_mass) * motion_scale;

    Trajectory {
        semi_major_axis: Length::from_au(semi_major_axis_au),
        eccentricity,
        perihelion: Length::from_au(perihelion_au),
        perihelion_angle,
        inclination,
        mean_anomaly: mean_at_spawn - mean_motion * time,
        mean_motion,
    }
}

fn generate_comet(rng: &mut SeededRandom, star: &Star, id: u64, time: f64) -> InterstellarObject {
    let (min_velocity, max_velocity) = InterstellarClass::Comet.velocity_range();

    let spawn_distance = rng.range(SPAWN_DISTANCE.0, SPAWN_DISTANCE.1);
    let perihelion = rng.range(MIN_PERIHELION, MAX_PERIHELION);
    let velocity_factor = rng.range(min_velocity, max_velocity);
    let eccentricity = 1.0 + velocity_factor * 0.5 + rng.range(0.1, 0.5);
    let perihelion_angle = rng.range(0.0, std::f64::consts::TAU);
    let inclination = rng.range(-0.4, 0.4);

    let trajectory = seed_trajectory(
        spawn_distance,
        perihelion,
        eccentricity,
        perihelion_angle,
        inclination,
        star.mass,
        MOTION_SCALE,
        time,
    );

    InterstellarObject {
        id,
        name: format!("I/{}", generate_name(rng)),
        kind: InterstellarKind::Comet {
            size: rng.range(COMET_SIZE.0, COMET_SIZE.1),
            color: rng.choice(&COMET_COLORS).to_string(),
            tail_color: COMET_TAIL_COLOR,
            dust_color: COMET_DUST_COLOR,
            tail_activation_radius: Length::from_au(3.0 * star.luminosity.sqrt()),
            volatility: rng.range(0.8, 1.2),
            tail_brightness: rng.range(0.7, 1.3),
        },
        trajectory,
        spawned: true,
        reached_perihelion: false,
        despawned: false,
    }
}

fn generate_rogue_planet(
    rng: &mut SeededRandom,
    star: &Star,
    id: u64,
    time: f64,
) -> InterstellarObject {
    let (min_velocity, max_velocity) = InterstellarClass::RoguePlanet.velocity_range();
    let subtype = RogueSubtype::select(rng);

    let spawn_distance = rng.range(SPAWN_DISTANCE.0, SPAWN_DISTANCE.1);
    let perihelion = rng.range(MIN_PERIHELION * 2.0, MAX_PERIHELION);
    let velocity_factor = rng.range(min_velocity, max_velocity);
    let eccentricity = 1.0 + velocity_factor * 0.3 + rng.range(0.05, 0.3);
    let perihelion_angle = rng.range(0.0, std::f64::consts::TAU);
    let inclination = rng.range(-0.3, 0.3);

    let trajectory = seed_trajectory(
        spawn_distance,
        perihelion,
        eccentricity,
        perihelion_angle,
        inclination,
        star.mass,
        MOTION_SCALE,
        time,
    );

    let size = rng.range(ROGUE_SIZE.0, ROGUE_SIZE.1);
    let has_bands = matches!(subtype, RogueSubtype::GasGiant | RogueSubtype::IceGiant);
    let band_count = if subtype == RogueSubtype::GasGiant {
        rng.int_range(4, 8)
    } else {
        rng.int_range(2, 4)
    };

    InterstellarObject {
        id,
        name: format!("Rogue-{}", generate_name(rng)),
        kind: InterstellarKind::RoguePlanet {
            subtype,
            size,
            visual_radius: (size.sqrt() * 3.0).max(4.0),
            color: rng.choice(subtype.colors()).to_string(),
            mass: size * subtype.mass_factor(),
            has_bands,
            band_count,
        },
        trajectory,
        spawned: true,
        reached_perihelion: false,
        despawned: false,
    }
}

fn generate_black_hole(
    rng: &mut SeededRandom,
    star: &Star,
    id: u64,
    time: f64,
) -> InterstellarObject {
    let (min_velocity, max_velocity) = InterstellarClass::BlackHole.velocity_range();

    let spawn_distance = rng.range(SPAWN_DISTANCE.0, SPAWN_DISTANCE.1);
    let perihelion = rng.range(MIN_PERIHELION * 3.0, MAX_PERIHELION * 2.0);
    let velocity_factor = rng.range(min_velocity, max_velocity);
    let eccentricity = 1.0 + velocity_factor * 0.2 + rng.range(0.05, 0.2);
    let perihelion_angle = rng.range(0.0, std::f64::consts::TAU);
    let inclination = rng.range(-0.2, 0.2);

    let trajectory = seed_trajectory(
        spawn_distance,
        perihelion,
        eccentricity,
        perihelion_angle,
        inclination,
        star.mass,
        MOTION_SCALE,
        time,
    );

    let mass = rng.range(BLACK_HOLE_MASS.0, BLACK_HOLE_MASS.1);

    InterstellarObject {
        id,
        name: format!("BH-{}", rng.int_range(1000, 9999)),
        kind: InterstellarKind::BlackHole {
            mass,
            visual_radius: black_hole_visual_radius(mass),
            has_accretion_disk: rng.next() < 0.3,
            disk_color: rng.choice(&DISK_COLORS).to_string(),
        },
        trajectory,
        spawned: true,
        reached_perihelion: false,
        despawned: false,
    }
}

/// Fixed parameter tables for the miniature star of a passing system.
const MINI_STAR_CLASSES: [SpectralClass; 4] = [
    SpectralClass::M,
    SpectralClass::K,
    SpectralClass::G,
    SpectralClass::F,
];

fn mini_star_parameters(class: SpectralClass) -> (&'static str, f64, f64, f64) {
    match class {
        SpectralClass::M => ("#ffaa77", 3200.0, 0.4, 0.5),
        SpectralClass::K => ("#ffcc88", 4500.0, 0.7, 0.8),
        SpectralClass::G => ("#ffff99", 5500.0, 1.0, 1.0),
        _ => ("#ffffcc", 6500.0, 1.3, 1.2),
    }
}

fn generate_passing_system(
    rng: &mut SeededRandom,
    primary: &Star,
    id: u64,
    time: f64,
) -> InterstellarObject {
    let (min_velocity, max_velocity) = InterstellarClass::PassingSystem.velocity_range();

    // A whole system passes at a greater distance than a lone body
    let spawn_distance = rng.range(120.0, 180.0);
    let perihelion = rng.range(40.0, 80.0);
    let velocity_factor = rng.range(min_velocity, max_velocity);
    let eccentricity = 1.0 + velocity_factor * 0.15 + rng.range(0.02, 0.1);
    let perihelion_angle = rng.range(0.0, std::f64::consts::TAU);
    let inclination = rng.range(-0.15, 0.15);

    let trajectory = seed_trajectory(
        spawn_distance,
        perihelion,
        eccentricity,
        perihelion_angle,
        inclination,
        primary.mass,
        SYSTEM_MOTION_SCALE,
        time,
    );

    let class = *rng.choice(&MINI_STAR_CLASSES);
    let (color, temperature, mass, radius) = mini_star_parameters(class);

    let planet_count = rng.int_range(1, 5);
    let mut planets = Vec::with_capacity(planet_count as usize);
    let mut orbit_au = 0.3;
    for i in 0..planet_count as usize {
        orbit_au *= rng.range(1.5, 2.5);
        planets.push(MiniPlanet {
            id: i,
            // Scaled down so the whole system fits its marker
            orbit_radius_local: orbit_au * DISPLAY_UNITS_PER_AU * 0.15,
            angle: rng.range(0.0, std::f64::consts::TAU),
            orbit_speed: 0.01 / orbit_au.sqrt(),
            size: rng.range(2.0, 6.0),
            color: rng
                .choice(&["#aa8866", "#6688aa", "#88aa66", "#cc9966", "#667788"])
                .to_string(),
        });
    }

    InterstellarObject {
        id,
        name: format!("{} System", generate_name(rng)),
        kind: InterstellarKind::PassingSystem {
            star: MiniStar {
                name: generate_name(rng),
                class,
                color: color.to_string(),
                temperature,
                mass,
                radius,
                visual_radius: 8.0 + radius * 6.0,
            },
            planets,
        },
        trajectory,
        spawned: true,
        reached_perihelion: false,
        despawned: false,
    }
}
