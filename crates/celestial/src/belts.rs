//! Asteroid and Kuiper belt generation
//!
//! The asteroid belt claims the highest-scoring stable gap between adjacent
//! planets; scoring prefers wide gaps near the frost line with a rocky inner
//! neighbor and a giant outer neighbor. The Kuiper belt always sits beyond
//! the outermost planet. Both return point-mass populations the renderer
//! animates with plain Kepler periods.

use serde::{Deserialize, Serialize};

use orbital::kepler;
use planetary::Planet;
use seedrand::SeededRandom;
use stellar::Star;
use units::Length;

/// Usable gap width floor in AU.
const MIN_GAP_WIDTH: f64 = 0.3;

/// Hill-sphere margins clipped off each side of a candidate gap.
const GAP_HILL_MARGIN: f64 = 3.0;

/// One asteroid-belt member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    pub angle: f64,
    pub radius: Length,
    pub eccentricity: f64,
    pub size: f64,
    /// Kepler period in days.
    pub orbital_period: f64,
    pub color: String,
}

/// An asteroid belt occupying a scored inter-planet gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidBelt {
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub asteroids: Vec<Asteroid>,
}

/// One Kuiper-belt member; KBOs carry inclination spread the asteroid belt
/// lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuiperObject {
    pub angle: f64,
    pub radius: Length,
    pub eccentricity: f64,
    pub inclination: f64,
    pub size: f64,
    pub orbital_period: f64,
    pub color: String,
}

/// The trans-planetary belt beyond the outermost planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuiperBelt {
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub objects: Vec<KuiperObject>,
}

/// Generates an asteroid belt in the best inter-planet gap, or `None` when
/// fewer than two planets exist or no gap passes the width floor.
pub fn generate_asteroid_belt(
    rng: &mut SeededRandom,
    star: &Star,
    planets: &[Planet],
) -> Option<AsteroidBelt> {
    if planets.len() < 2 {
        return None;
    }

    let mut best_gap: Option<(f64, f64)> = None;
    let mut best_score = 0.0;

    for pair in planets.windows(2) {
        let inner = &pair[0];
        let outer = &pair[1];

        let gap_inner = inner.orbit_radius.to_au() + inner.hill_sphere.to_au() * GAP_HILL_MARGIN;
        let gap_outer = outer.orbit_radius.to_au() - outer.hill_sphere.to_au() * GAP_HILL_MARGIN;

        let gap_width = gap_outer - gap_inner;
        if gap_width < MIN_GAP_WIDTH {
            continue;
        }

        let mut score = gap_width;

        // Our own belt sits near the frost line; prefer gaps that do too
        let mid_gap = (gap_inner + gap_outer) / 2.0;
        score += (2.0 - (mid_gap - star.frost_line).abs()).max(0.0);

        if inner.planet_type.is_rocky_family() && outer.planet_type.is_giant() {
            score += 2.0;
        }

        if score > best_score {
            best_score = score;
            best_gap = Some((gap_inner, gap_outer));
        }
    }

    let (gap_inner, gap_outer) = best_gap?;

    // Kirkwood-gap analog carved by the first planet beyond the belt
    let resonance_gaps = planets
        .iter()
        .find(|p| p.orbit_radius.to_au() > gap_outer)
        .map(|p| kepler::resonance_gaps(p.orbit_radius.to_au()))
        .unwrap_or_default();

    let count = rng.int_range(150, 400);
    let mut asteroids = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut radius_au = rng.range(gap_inner, gap_outer);

        // Nudge out of any resonance band, then clamp back into the belt
        for gap in &resonance_gaps {
            if (radius_au - gap.distance).abs() < gap.width {
                let direction = if rng.next() < 0.5 { -1.0 } else { 1.0 };
                radius_au += direction * gap.width * 1.5;
                break;
            }
        }
        radius_au = radius_au.clamp(gap_inner, gap_outer);

        asteroids.push(Asteroid {
            angle: rng.range(0.0, std::f64::consts::TAU),
            radius: Length::from_au(radius_au),
            eccentricity: rng.range(0.0, 0.15),
            size: rng.range(0.5, 2.0),
            orbital_period: kepler::orbital_period(radius_au, star.mass),
            color: rng
                .choice(&["#666", "#777", "#888", "#999", "#aaa"])
                .to_string(),
        });
    }

    Some(AsteroidBelt {
        inner_radius: Length::from_au(gap_inner),
        outer_radius: Length::from_au(gap_outer),
        asteroids,
    })
}

/// Generates the Kuiper belt beyond the outermost planet.
pub fn generate_kuiper_belt(
    rng: &mut SeededRandom,
    star: &Star,
    last_planet_orbit_au: f64,
) -> KuiperBelt {
    let inner_au = last_planet_orbit_au * 1.3 + rng.range(2.0, 5.0);
    let outer_au = inner_au + rng.range(10.0, 20.0);

    let count = rng.int_range(200, 500);
    let mut objects = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let radius_au = rng.range(inner_au, outer_au);

        objects.push(KuiperObject {
            angle: rng.range(0.0, std::f64::consts::TAU),
            radius: Length::from_au(radius_au),
            eccentricity: rng.range(0.0, 0.25),
            inclination: rng.range(0.0, 0.3),
            size: rng.range(0.3, 1.5),
            orbital_period: kepler::orbital_period(radius_au, star.mass),
            color: rng.choice(&["#556", "#667", "#778", "#889"]).to_string(),
        });
    }

    KuiperBelt {
        inner_radius: Length::from_au(inner_au),
        outer_radius: Length::from_au(outer_au),
        objects,
    }
}
