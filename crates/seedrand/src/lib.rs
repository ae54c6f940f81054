//! Deterministic seeded randomness
//!
//! Everything the generators draw comes from one [`SeededRandom`] stream: a
//! 31-bit linear-congruential generator chosen for exact reproducibility
//! across runs and platforms. Identical seed, identical sequence, identical
//! generated system; that is the whole contract.
//!
//! The generator also implements [`rand_core::RngCore`] and
//! [`rand_core::SeedableRng`], so it can stand in anywhere the `rand`
//! ecosystem expects a generator.

pub mod rng;

pub use rng::{hash_seed, SeededRandom};

#[cfg(test)]
mod rng_test;
