//! Frame-driven simulation state
//!
//! One tick advances simulated time, runs the event-engine check, and
//! records trail history. Every position is a pure function of
//! `(orbital elements, time)`; re-rendering at any time value is
//! idempotent; the trails and the event engine are the only state a tick
//! accumulates.

use interstellar::EventEngine;

use crate::config::GenerationConfig;
use crate::system::{generate_solar_system, GenerationContext, SolarSystem};

/// A running simulation of one generated system.
#[derive(Debug)]
pub struct SimulationState {
    pub system: SolarSystem,
    pub time: f64,
    pub events: EventEngine,
}

impl SimulationState {
    /// Starts a simulation at time zero.
    pub fn new(system: SolarSystem) -> Self {
        Self {
            system,
            time: 0.0,
            events: EventEngine::new(),
        }
    }

    /// Generates a system from a seed and wraps it in a fresh simulation.
    pub fn from_seed(seed: &str, config: GenerationConfig) -> (Self, GenerationContext) {
        let mut ctx = GenerationContext::new(seed, config);
        let system = generate_solar_system(&mut ctx, seed);
        (Self::new(system), ctx)
    }

    /// Advances one frame: time, then events, then trail history.
    pub fn tick(&mut self, ctx: &mut GenerationContext) {
        let time_scale = ctx.config.time_scale;
        self.time += time_scale;

        self.events
            .check(&mut ctx.rng, &self.system.star, self.time, time_scale);

        let trail_length = ctx.config.trail_length;
        for planet in &mut self.system.planets {
            planet.record_trail(self.time, time_scale, trail_length);
        }
    }

    /// Replaces the simulated system, clearing time and transient objects.
    ///
    /// The old aggregate is simply dropped; entities hold no external
    /// resources, so there is no partial-state cleanup.
    pub fn replace_system(&mut self, system: SolarSystem) {
        self.system = system;
        self.time = 0.0;
        self.events.clear();
    }
}
