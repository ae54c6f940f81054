//! Stellar classification and generation
//!
//! Morgan-Keenan spectral classes drive everything downstream: the class
//! probability table decides what kind of star anchors a system, and the
//! sampled luminosity fixes the frost line and habitable zone that planet
//! generation builds around.

pub mod generation;
pub mod spectral;
pub mod star;

pub use generation::{generate_companion, generate_star};
pub use spectral::{ClassProfile, SpectralClass};
pub use star::{CompanionStar, Star};

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod spectral_test;
