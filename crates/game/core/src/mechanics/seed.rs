/// Derives a fresh seed for every random draw from a fixed base seed.
///
/// The nonce advances once per draw so two dice in the same roll, or two
/// cards in the same draw, never share a seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSequence {
    base: u64,
    nonce: u64,
}

impl SeedSequence {
    pub const fn new(base: u64) -> Self {
        Self { base, nonce: 0 }
    }

    /// Number of seeds handed out so far.
    pub const fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.base, self.nonce);
        self.nonce += 1;
        seed
    }
}

/// Mixes the base seed with a draw nonce (SplitMix64-style avalanche).
pub fn compute_seed(base: u64, nonce: u64) -> u64 {
    let mut hash = base ^ nonce.wrapping_mul(0x9e3779b97f4a7c15);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}
