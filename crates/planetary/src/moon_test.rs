use crate::archetype::Archetype;
use crate::generation::{generate_moon, generate_planet, PlanetContext};
use crate::moon::MoonType;
use crate::planet_type::PlanetType;
use seedrand::SeededRandom;
use stellar::generate_star;

fn test_planet(rng: &mut SeededRandom, orbit_au: f64) -> crate::Planet {
    let mut star = generate_star(rng);
    star.mass = 1.0;
    star.frost_line = 2.7;
    let ctx = PlanetContext {
        star: &star,
        archetype: Archetype::SolarLike,
        ring_chance: 0.4,
        max_moons: 8,
    };
    generate_planet(rng, &ctx, 0, orbit_au, Some(PlanetType::GasGiant))
}

#[test]
fn test_moon_orbit_inside_hill_fraction() {
    let mut rng = SeededRandom::new(42);
    let planet = test_planet(&mut rng, 5.2);
    let hill_au = planet.hill_sphere.to_au();
    for index in 0..8 {
        let moon = generate_moon(&mut rng, &planet, index);
        let orbit = moon.orbit_radius_au.to_au();
        assert!(orbit >= hill_au * 0.02 - 1e-12);
        assert!(orbit <= hill_au * 0.4 + 1e-12);
    }
}

#[test]
fn test_moon_orbits_grow_with_index() {
    let mut rng = SeededRandom::new(7);
    let planet = test_planet(&mut rng, 5.2);
    let inner = generate_moon(&mut rng, &planet, 0);
    let outer = generate_moon(&mut rng, &planet, 5);
    assert!(outer.orbit_radius_au > inner.orbit_radius_au);
    assert!(outer.orbit_radius > inner.orbit_radius);
}

#[test]
fn test_moon_period_floor() {
    let mut rng = SeededRandom::new(3);
    let planet = test_planet(&mut rng, 5.2);
    for index in 0..8 {
        let moon = generate_moon(&mut rng, &planet, index);
        assert!(moon.orbital_period >= 5.0);
    }
}

#[test]
fn test_lava_world_moons_are_volcanic_or_rocky() {
    let mut rng = SeededRandom::new(42);
    let mut star = generate_star(&mut rng);
    star.mass = 1.0;
    star.frost_line = 2.7;
    let ctx = PlanetContext {
        star: &star,
        archetype: Archetype::SolarLike,
        ring_chance: 0.4,
        max_moons: 8,
    };
    let planet = generate_planet(&mut rng, &ctx, 0, 0.1, Some(PlanetType::LavaWorld));
    for index in 0..20 {
        let moon = generate_moon(&mut rng, &planet, index % 8);
        assert!(matches!(moon.moon_type, MoonType::Volcanic | MoonType::Rocky));
    }
}

#[test]
fn test_moon_names_use_parent_and_numeral() {
    let mut rng = SeededRandom::new(9);
    let planet = test_planet(&mut rng, 5.2);
    let moon = generate_moon(&mut rng, &planet, 2);
    assert_eq!(moon.name, format!("{} III", planet.name));
}
