//! Deterministic sequence generator driving every shuffle in the engine.
//!
//! A linear congruential generator `state = (A * state + C) mod M`. Outputs
//! are reproducible for a given seed and sequence of queries, which is what
//! the simulator's exact-result tests rely on. It is not suitable for anything
//! that needs unpredictability.

use rand::{RngCore, SeedableRng};

use crate::errors::EngineError;

pub const MULTIPLIER: u64 = 1_103_515_245;
pub const INCREMENT: u64 = 12_345;
pub const MODULUS: u64 = 2_147_483_648;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 5_674_832;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    // state < 2^31, so the product stays well inside u64
    fn step(&mut self) -> u64 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state
    }

    /// Returns a value in `[low, high]`, advancing the state once.
    pub fn next_in_range(&mut self, low: i64, high: i64) -> Result<i64, EngineError> {
        if low > high {
            return Err(EngineError::InvalidRange { low, high });
        }
        let span = (high as i128 - low as i128 + 1) as u128;
        let offset = (self.step() as u128 % span) as i128;
        Ok((low as i128 + offset) as i64)
    }

    fn index_up_to(&mut self, max: usize) -> usize {
        (self.step() % (max as u64 + 1)) as usize
    }

    /// In-place Fisher–Yates: for `i` from the last index down to 1, swap `i`
    /// with a draw from `[0, i]`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_up_to(i);
            items.swap(i, j);
        }
    }

    /// Draws a seed for an independent worker generator from this sequence.
    pub fn derive_seed(&mut self) -> u64 {
        self.step()
    }
}

impl RngCore for Lcg {
    /// One recurrence step; the top bit is always zero since `M = 2^31`.
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step();
        let lo = self.step();
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    // the raw state is the seed; no expansion
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
