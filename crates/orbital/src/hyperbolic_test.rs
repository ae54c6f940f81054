use crate::hyperbolic::*;
use approx::assert_relative_eq;

#[test]
fn test_perihelion_from_elements() {
    // a = -10, e = 1.5 -> r_p = 10 * 0.5 = 5
    assert_relative_eq!(perihelion(-10.0, 1.5), 5.0);
}

#[test]
fn test_asymptote_angle() {
    // e = 2 -> cos(theta_inf) = -1/2 -> 120 degrees
    assert_relative_eq!(
        asymptote_angle(2.0),
        2.0 * std::f64::consts::PI / 3.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_position_at_perihelion() {
    let a = -8.0;
    let e = 1.4;
    let pos = position(a, e, 0.0, 0.0);
    assert_relative_eq!(pos.radius, perihelion(a, e), epsilon = 1e-12);
    assert_relative_eq!(pos.position.x, pos.radius, epsilon = 1e-12);
    assert_relative_eq!(pos.position.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_perihelion_angle_rotates_position() {
    let pos = position(-8.0, 1.4, 0.0, std::f64::consts::FRAC_PI_2);
    assert_relative_eq!(pos.position.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(pos.position.y, pos.radius, epsilon = 1e-9);
}

#[test]
fn test_anomaly_round_trip() {
    // theta -> H -> M -> H -> theta must close to numerical tolerance
    for &e in &[1.2, 1.6, 2.5, 4.0] {
        for &theta in &[-1.8, -0.9, -0.1, 0.0, 0.4, 1.3] {
            let h = eccentric_anomaly_from_true(theta, e);
            let m = mean_anomaly_from_eccentric(h, e);
            let h_back = eccentric_anomaly_from_mean(m, e);
            let theta_back = true_anomaly_from_eccentric(h_back, e);
            assert_relative_eq!(theta_back, theta, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_radius_grows_after_perihelion() {
    let a = -12.0;
    let e = 1.8;
    let n = mean_motion(a, 1.0);
    let mut last_radius = position(a, e, 0.0, 0.0).radius;
    // Walk forward in mean anomaly; distance must be non-decreasing outbound
    for step in 1..50 {
        let m = n * step as f64 * 10.0;
        let h = eccentric_anomaly_from_mean(m, e);
        let theta = true_anomaly_from_eccentric(h, e);
        let radius = position(a, e, theta, 0.0).radius;
        assert!(radius >= last_radius - 1e-9);
        last_radius = radius;
    }
}

#[test]
fn test_velocity_at_infinity() {
    assert_relative_eq!(velocity_at_infinity(-4.0, 1.0), 0.5);
}
