//! Closed-orbit relations
//!
//! Units are normalized: distances in AU, stellar masses in solar masses,
//! planet masses in Earth masses, periods in days (Earth year = 365).

use units::EARTH_MASSES_PER_SOLAR;

/// Mutual-Hill-radii separation required between adjacent planets.
pub const STABLE_SEPARATION_HILL_RADII: f64 = 10.0;

/// Orbital period from Kepler's third law, in days.
///
/// T = sqrt(a³ / M) × 365 for a in AU and M in solar masses.
pub fn orbital_period(a_au: f64, star_mass_solar: f64) -> f64 {
    (a_au.powi(3) / star_mass_solar).sqrt() * 365.0
}

/// Circular orbital velocity factor at distance r: v = sqrt(M / r).
pub fn orbital_velocity(r_au: f64, star_mass_solar: f64) -> f64 {
    (star_mass_solar / r_au).sqrt()
}

/// Hill sphere radius in AU: the region where the planet's gravity dominates.
///
/// r_H = a × (m / (3 M))^(1/3), with the planet mass converted to solar units.
pub fn hill_sphere(a_au: f64, planet_mass_earth: f64, star_mass_solar: f64) -> f64 {
    let planet_mass_solar = planet_mass_earth / EARTH_MASSES_PER_SOLAR;
    a_au * (planet_mass_solar / (3.0 * star_mass_solar)).powf(1.0 / 3.0)
}

/// Minimum stable separation between two planets in AU.
///
/// Averages the two Hill spheres and requires
/// [`STABLE_SEPARATION_HILL_RADII`] mutual radii between the orbits.
pub fn min_planet_separation(
    a1_au: f64,
    mass1_earth: f64,
    a2_au: f64,
    mass2_earth: f64,
    star_mass_solar: f64,
) -> f64 {
    let hill1 = hill_sphere(a1_au, mass1_earth, star_mass_solar);
    let hill2 = hill_sphere(a2_au, mass2_earth, star_mass_solar);
    (hill1 + hill2) / 2.0 * STABLE_SEPARATION_HILL_RADII
}

/// Frost line in AU: where water ice condenses, ~2.7 AU × sqrt(L).
pub fn frost_line(luminosity_solar: f64) -> f64 {
    2.7 * luminosity_solar.sqrt()
}

/// Innermost orbit where planets survive tidal destruction, in AU.
pub fn inner_limit(_star_mass_solar: f64, star_radius_solar: f64) -> f64 {
    (star_radius_solar * 0.01).max(0.02)
}

/// Escape velocity relative to Earth: v = sqrt(m / r).
pub fn escape_velocity(mass_earth: f64, radius_earth: f64) -> f64 {
    (mass_earth / radius_earth).sqrt()
}

/// Surface gravity relative to Earth: g = m / r².
pub fn surface_gravity(mass_earth: f64, radius_earth: f64) -> f64 {
    mass_earth / (radius_earth * radius_earth)
}

/// A forbidden band carved by a mean-motion resonance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonanceGap {
    /// Center of the band in AU.
    pub distance: f64,
    /// Half-band tolerance in AU.
    pub width: f64,
}

/// Period ratio and fractional width for the five major resonances.
const RESONANCES: [(f64, f64); 5] = [
    (4.0, 0.02),        // 4:1
    (3.0, 0.03),        // 3:1 (strong)
    (5.0 / 2.0, 0.02),  // 5:2
    (7.0 / 3.0, 0.015), // 7:3
    (2.0, 0.04),        // 2:1 (strong)
];

/// Resonance gaps carved by a perturbing planet (Kirkwood gaps analog).
///
/// Kepler's third law maps each period ratio to a distance:
/// a_body / a_planet = ratio^(2/3).
pub fn resonance_gaps(planet_orbit_au: f64) -> Vec<ResonanceGap> {
    RESONANCES
        .iter()
        .map(|&(ratio, width)| ResonanceGap {
            distance: planet_orbit_au * ratio.powf(2.0 / 3.0),
            width: planet_orbit_au * width,
        })
        .collect()
}
