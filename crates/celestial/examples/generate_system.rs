//! Generate a system from a seed and print a summary
//!
//! Usage: cargo run -p celestial --example generate_system [seed] [config.toml]
//!
//! The seed may be a preset name ("sol", "trappist-1", "kepler-90"), an
//! alias, or any other string. Pass a TOML file to override generation
//! settings; unspecified keys keep their defaults.

use celestial::{generate_solar_system, GenerationConfig, GenerationContext};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().unwrap_or_else(|| "42".to_string());
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("reading {path}: {e}"));
            toml::from_str(&text).unwrap_or_else(|e| panic!("parsing {path}: {e}"))
        }
        None => GenerationConfig::default(),
    };

    let mut ctx = GenerationContext::new(&seed, config);
    let system = generate_solar_system(&mut ctx, &seed);

    println!(
        "seed: {seed}\nsystem: {} ({})\nstar: {} [{}] {:.2} Msun, L = {:.4}",
        system.id,
        system.archetype_name,
        system.star.name,
        system.star.class,
        system.star.mass,
        system.star.luminosity,
    );
    if let Some(companion) = &system.secondary_star {
        println!("companion: {} [{}]", companion.name, companion.class);
    }

    println!("idx  name                 type          a_au      mass_e   moons  temp_k");
    for planet in &system.planets {
        println!(
            "{:<4} {:<20} {:<13} {:<9.4} {:<8.3} {:<6} {:.0}",
            planet.id,
            planet.name,
            planet.planet_type.to_string(),
            planet.orbit_radius.to_au(),
            planet.mass.to_earth_masses(),
            planet.moons.len(),
            planet.temperature,
        );
    }

    if let Some(belt) = &system.asteroid_belt {
        println!(
            "asteroid belt: {:.2}-{:.2} AU ({} bodies)",
            belt.inner_radius.to_au(),
            belt.outer_radius.to_au(),
            belt.asteroids.len()
        );
    }
    if let Some(belt) = &system.kuiper_belt {
        println!(
            "kuiper belt: {:.1}-{:.1} AU ({} bodies)",
            belt.inner_radius.to_au(),
            belt.outer_radius.to_au(),
            belt.objects.len()
        );
    }
    println!("comets: {}", system.comets.len());

    eprintln!(
        "{}",
        serde_json::to_string_pretty(&system).expect("system serializes")
    );
}
