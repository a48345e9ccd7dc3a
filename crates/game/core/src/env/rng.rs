//! RNG oracle for reproducible dice rolls and card draws.
//!
//! All RNG implementations must be deterministic: given the same seed they
//! produce the same value. The umpire feeds one seed per draw from a
//! [`crate::mechanics::SeedSequence`], so a whole game replays identically
//! from its configured base seed.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// Returns `min` when the range is empty or inverted.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }

    /// Pick an index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on empty collection");
        (self.next_u32(seed) as usize) % len.max(1)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Stateless: each call advances the supplied seed by one LCG step and
/// permutes it, so the caller owns the stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}
