use crate::generation::{generate_companion, generate_star};
use crate::spectral::SpectralClass;
use seedrand::SeededRandom;

#[test]
fn test_star_fields_within_class_ranges() {
    let mut rng = SeededRandom::new(42);
    for _ in 0..200 {
        let star = generate_star(&mut rng);
        let profile = star.class.profile();
        assert!(star.radius >= profile.radius.0 && star.radius <= profile.radius.1);
        assert!(star.mass >= profile.mass.0 && star.mass <= profile.mass.1);
        assert!(star.luminosity >= profile.luminosity.0 && star.luminosity <= profile.luminosity.1);
    }
}

#[test]
fn test_zone_geometry_is_consistent() {
    let mut rng = SeededRandom::new(7);
    for _ in 0..100 {
        let star = generate_star(&mut rng);
        assert!(star.habitable_zone_inner < star.habitable_zone_outer);
        assert!(star.frost_line > 0.0);
        assert!(star.inner_limit >= 0.02);
    }
}

#[test]
fn test_star_generation_is_deterministic() {
    let star_a = generate_star(&mut SeededRandom::new(1234));
    let star_b = generate_star(&mut SeededRandom::new(1234));
    assert_eq!(star_a, star_b);
}

#[test]
fn test_companion_mass_below_primary() {
    let mut rng = SeededRandom::new(42);
    for _ in 0..100 {
        let primary = generate_star(&mut rng);
        let companion = generate_companion(&mut rng, &primary);
        assert!(companion.mass <= primary.mass * 0.8 + 1e-9);
        assert!(companion.orbit_radius >= 30.0 && companion.orbit_radius <= 60.0);
    }
}

#[test]
fn test_companion_falls_back_to_m_class() {
    // A primary lighter than every candidate class ceiling empties the filter
    let mut rng = SeededRandom::new(9);
    let mut primary = generate_star(&mut rng);
    primary.mass = 0.05;
    let companion = generate_companion(&mut rng, &primary);
    assert_eq!(companion.class, SpectralClass::M);
}
