use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Earth masses per solar mass.
pub const EARTH_MASSES_PER_SOLAR: f64 = 333_000.0;

/// A physical mass quantity using f64 precision.
///
/// Planet and moon masses are expressed in Earth masses, stellar masses in
/// solar masses; the Hill-sphere math converts between the two.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Earth masses

impl Mass {
    /// Creates a zero mass value.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * EARTH_MASSES_PER_SOLAR)
    }

    /// Returns the mass in Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0 / EARTH_MASSES_PER_SOLAR
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}
