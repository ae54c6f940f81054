//! Star sampling
//!
//! A star is one weighted class draw followed by uniform draws within the
//! class ranges. The zone geometry every later generator consumes (habitable
//! band, frost line, inner limit) is derived here, once.

use naming::generate_name;
use orbital::kepler;
use seedrand::SeededRandom;

use crate::spectral::SpectralClass;
use crate::star::{CompanionStar, Star};

/// Habitable-zone flux bounds in solar units: inner edge at 1.1 F⊕,
/// outer edge at 0.53 F⊕.
const HZ_INNER_FLUX: f64 = 1.1;
const HZ_OUTER_FLUX: f64 = 0.53;

/// Generates the primary star of a system.
pub fn generate_star(rng: &mut SeededRandom) -> Star {
    let class = SpectralClass::select(rng);
    let profile = class.profile();

    let temperature = rng.range(profile.temperature.0, profile.temperature.1);
    let radius = rng.range(profile.radius.0, profile.radius.1);
    let mass = rng.range(profile.mass.0, profile.mass.1);
    let luminosity = rng.range(profile.luminosity.0, profile.luminosity.1);

    let habitable_zone_inner = (luminosity / HZ_INNER_FLUX).sqrt();
    let habitable_zone_outer = (luminosity / HZ_OUTER_FLUX).sqrt();

    Star {
        class,
        name: format!("{} Star", generate_name(rng)),
        full_name: profile.name.to_string(),
        color: profile.color.to_string(),
        temperature: temperature.round(),
        radius,
        mass,
        luminosity,
        habitable_zone_inner,
        habitable_zone_outer,
        frost_line: kepler::frost_line(luminosity),
        inner_limit: kepler::inner_limit(mass, radius),
        visual_radius: 20.0 + radius * 2.0,
    }
}

/// Generates a binary companion for an existing primary.
///
/// Candidate classes are filtered by class mass ceiling against the primary's
/// sampled mass; an empty filter falls back to M. Only the ceiling is
/// checked; the sampled mass is clamped to 0.8× the primary separately.
pub fn generate_companion(rng: &mut SeededRandom, primary: &Star) -> CompanionStar {
    let candidates: Vec<SpectralClass> = [
        SpectralClass::K,
        SpectralClass::M,
        SpectralClass::G,
        SpectralClass::F,
    ]
    .into_iter()
    .filter(|c| c.profile().mass.1 < primary.mass)
    .collect();

    let class = if candidates.is_empty() {
        SpectralClass::M
    } else {
        *rng.choice(&candidates)
    };
    let profile = class.profile();

    let temperature = rng.range(profile.temperature.0, profile.temperature.1);
    let radius = rng.range(profile.radius.0, profile.radius.1);
    let mass = rng.range(profile.mass.0, profile.mass.1.min(primary.mass * 0.8));
    let luminosity = rng.range(profile.luminosity.0, profile.luminosity.1);

    CompanionStar {
        class,
        name: format!("{} B", generate_name(rng)),
        full_name: profile.name.to_string(),
        color: profile.color.to_string(),
        temperature: temperature.round(),
        radius,
        mass,
        luminosity,
        visual_radius: 20.0 + radius * 2.0,
        orbit_radius: rng.range(30.0, 60.0),
        orbital_period: rng.range(50.0, 200.0),
        angle: rng.range(0.0, std::f64::consts::TAU),
    }
}
