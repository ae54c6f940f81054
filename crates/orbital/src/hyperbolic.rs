//! Unbound-trajectory kinematics
//!
//! Interstellar visitors travel hyperbolic conics: eccentricity above 1,
//! negative semi-major axis. Time evolution runs mean anomaly → hyperbolic
//! eccentric anomaly (Newton iteration on Kepler's hyperbolic equation) →
//! true anomaly → polar position, and the inverse chain seeds a visitor so
//! its first position query lands exactly at the configured spawn distance.

use nalgebra::Vector2;

/// Newton steps used to invert M = e·sinh(H) − H.
const NEWTON_ITERATIONS: usize = 10;

/// Evaluated position on a hyperbolic trajectory, in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicPosition {
    /// Cartesian position relative to the focus.
    pub position: Vector2<f64>,
    /// Distance from the focus.
    pub radius: f64,
    /// Polar angle (true anomaly plus perihelion angle).
    pub angle: f64,
}

/// Perihelion distance: r_p = |a|(e − 1).
pub fn perihelion(semi_major_axis_au: f64, eccentricity: f64) -> f64 {
    semi_major_axis_au.abs() * (eccentricity - 1.0)
}

/// Hyperbolic excess velocity: v_inf = sqrt(M / |a|).
pub fn velocity_at_infinity(semi_major_axis_au: f64, star_mass_solar: f64) -> f64 {
    (star_mass_solar / semi_major_axis_au.abs()).sqrt()
}

/// True-anomaly limit of the hyperbola: cos(θ_inf) = −1/e.
pub fn asymptote_angle(eccentricity: f64) -> f64 {
    (-1.0 / eccentricity).clamp(-1.0, 1.0).acos()
}

/// Mean motion for time progression: n = sqrt(M / |a|³).
pub fn mean_motion(semi_major_axis_au: f64, star_mass_solar: f64) -> f64 {
    let a = semi_major_axis_au.abs();
    (star_mass_solar / (a * a * a)).sqrt()
}

/// Position on the trajectory at a given true anomaly.
///
/// r = |a|(e² − 1) / (1 + e·cos θ), rotated by the perihelion angle.
pub fn position(
    semi_major_axis_au: f64,
    eccentricity: f64,
    true_anomaly: f64,
    perihelion_angle: f64,
) -> HyperbolicPosition {
    let a = semi_major_axis_au.abs();
    let radius =
        a * (eccentricity * eccentricity - 1.0) / (1.0 + eccentricity * true_anomaly.cos());
    let angle = true_anomaly + perihelion_angle;

    HyperbolicPosition {
        position: Vector2::new(radius * angle.cos(), radius * angle.sin()),
        radius,
        angle,
    }
}

/// Solves M = e·sinh(H) − H for H with a fixed Newton iteration count.
///
/// The initial guess asinh(M/e) keeps sinh in range for arbitrarily large
/// mean anomalies.
pub fn eccentric_anomaly_from_mean(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut h = (mean_anomaly / eccentricity).asinh();
    for _ in 0..NEWTON_ITERATIONS {
        let f = eccentricity * h.sinh() - h - mean_anomaly;
        let fp = eccentricity * h.cosh() - 1.0;
        h -= f / fp;
    }
    h
}

/// Half-angle identity: tan(θ/2) = sqrt((e+1)/(e−1)) · tanh(H/2).
pub fn true_anomaly_from_eccentric(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let tan_half =
        ((eccentricity + 1.0) / (eccentricity - 1.0)).sqrt() * (eccentric_anomaly / 2.0).tanh();
    2.0 * tan_half.atan()
}

/// Inverse half-angle identity, used when seeding a spawn state.
pub fn eccentric_anomaly_from_true(true_anomaly: f64, eccentricity: f64) -> f64 {
    let tanh_half =
        ((eccentricity - 1.0) / (eccentricity + 1.0)).sqrt() * (true_anomaly / 2.0).tan();
    2.0 * tanh_half.atanh()
}

/// Kepler's hyperbolic equation: M = e·sinh(H) − H.
pub fn mean_anomaly_from_eccentric(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    eccentricity * eccentric_anomaly.sinh() - eccentric_anomaly
}
