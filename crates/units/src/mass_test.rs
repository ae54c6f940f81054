use crate::Mass;
use approx::assert_relative_eq;

#[test]
fn test_solar_conversion() {
    let sun = Mass::from_solar_masses(1.0);
    assert_relative_eq!(sun.to_earth_masses(), 333_000.0);
    assert_relative_eq!(sun.to_solar_masses(), 1.0);
}

#[test]
fn test_earth_masses() {
    let jupiter = Mass::from_earth_masses(317.8);
    assert!(jupiter.to_solar_masses() < 0.001);
    assert_relative_eq!((jupiter * 2.0).to_earth_masses(), 635.6);
}
