//! Physical quantities for system generation
//!
//! Two base units cover everything this workspace computes: distances are
//! stored in astronomical units, masses in Earth masses. Display units are
//! the scale the presentation layer draws in (1 AU = 200 units).

pub mod length;
pub mod mass;

pub use length::{Length, DISPLAY_UNITS_PER_AU, SOLAR_RADII_PER_AU};
pub use mass::{Mass, EARTH_MASSES_PER_SOLAR};

#[cfg(test)]
mod mass_test;
