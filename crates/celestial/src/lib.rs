//! System assembly and simulation driving
//!
//! The orchestrator either hydrates a named preset (seed `"sol"`,
//! `"trappist-1"`, `"kepler-90"`, or an alias) or runs the full procedural
//! path: star, optional binary companion, archetype, Hill-spaced planets,
//! belts, and comets. The result is a [`SolarSystem`] aggregate that is
//! internally consistent by construction and fully reproducible from its
//! seed.

pub mod belts;
pub mod comets;
pub mod config;
pub mod presets;
pub mod simulation;
pub mod system;

pub use belts::{Asteroid, AsteroidBelt, KuiperBelt, KuiperObject};
pub use comets::{Comet, CometType};
pub use config::{CometCount, GenerationConfig};
pub use presets::{preset_for_seed, Preset};
pub use simulation::SimulationState;
pub use system::{generate_solar_system, generate_with_archetype, GenerationContext, SolarSystem};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod simulation_test;
#[cfg(test)]
mod system_test;
