use rand_core::{impls, RngCore, SeedableRng};

const LCG_MULTIPLIER: i64 = 1_103_515_245;
const LCG_INCREMENT: i64 = 12_345;
const LCG_MASK: i64 = 0x7fff_ffff;

/// Deterministic pseudo-random stream seeded from an integer.
///
/// State advances through a fixed 31-bit linear-congruential recurrence;
/// every derived draw ([`range`](Self::range), [`int_range`](Self::int_range),
/// [`choice`](Self::choice), [`weighted_pick`](Self::weighted_pick)) consumes
/// exactly one step of the stream. Two generators constructed from the same
/// seed produce identical infinite sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Creates a generator from an integer seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed as i64 }
    }

    /// Creates a generator from a string seed via [`hash_seed`].
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Advances the stream once and returns a float in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) & LCG_MASK;
        self.state as f64 / LCG_MASK as f64
    }

    /// Uniform draw in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Uniform integer draw in `[min, max]`, inclusive on both ends.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        (self.range(min as f64, max as f64 + 1.0).floor() as i64).min(max)
    }

    /// Uniform pick from a non-empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = ((self.next() * items.len() as f64) as usize).min(items.len() - 1);
        &items[index]
    }

    /// Cumulative weighted pick over a weight table.
    ///
    /// Returns the selected index, or `None` when floating accumulation
    /// exhausts the table without selecting; callers fall back to a fixed
    /// default in that case.
    pub fn weighted_pick(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next() * total;
        for (index, weight) in weights.iter().enumerate() {
            roll -= weight;
            if roll <= 0.0 {
                return Some(index);
            }
        }
        None
    }
}

/// Hashes a string seed into the integer seed space.
///
/// The classic `hash = (hash << 5) - hash + byte` loop on a wrapping 32-bit
/// signed accumulator, absolute value taken. Numeric strings and named
/// presets alike pass through here, so the mapping must never change.
pub fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for byte in seed.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(byte as i32);
    }
    hash.unsigned_abs()
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        // One stream step yields 31 state bits.
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) & LCG_MASK;
        self.state as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for SeededRandom {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
