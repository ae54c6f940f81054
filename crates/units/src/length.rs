use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Display units per astronomical unit (presentation scale).
pub const DISPLAY_UNITS_PER_AU: f64 = 200.0;

/// Solar radii per astronomical unit.
pub const SOLAR_RADII_PER_AU: f64 = 215.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents distances with astronomical units (AU) as
/// the base unit. Orbit radii, Hill spheres, and belt bounds are all `Length`
/// values; the presentation layer reads them back in display units.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// assert_eq!(earth_orbit.to_display(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in display units.
    pub fn from_display(value: f64) -> Self {
        Self(value / DISPLAY_UNITS_PER_AU)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value / SOLAR_RADII_PER_AU)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Returns the length in display units.
    pub fn to_display(&self) -> f64 {
        self.0 * DISPLAY_UNITS_PER_AU
    }

    /// Returns the length in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 * SOLAR_RADII_PER_AU
    }

    /// Returns the larger of two lengths.
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Returns the smaller of two lengths.
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}
