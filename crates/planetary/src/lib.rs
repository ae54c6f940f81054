//! Planetary bodies: types, catalogs, and generation
//!
//! A planet's type is decided by where it sits relative to the star's frost
//! line and habitable zone (plus the system archetype), and the type profile
//! then bounds every sampled property. Moons and trojans hang off their
//! parent planet and are destroyed with it.

pub mod archetype;
pub mod composition;
pub mod generation;
pub mod moon;
pub mod planet;
pub mod planet_type;
pub mod surface;
pub mod trojan;

pub use archetype::{Archetype, ArchetypeFeatures, ArchetypeProfile};
pub use composition::Composition;
pub use generation::{generate_moon, generate_planet, type_for_distance, PlanetContext};
pub use moon::{Moon, MoonType};
pub use planet::Planet;
pub use planet_type::{PlanetType, TypeProfile};
pub use surface::SurfaceDetails;
pub use trojan::{LagrangePoint, Trojan};

#[cfg(test)]
mod composition_test;
#[cfg(test)]
mod moon_test;
