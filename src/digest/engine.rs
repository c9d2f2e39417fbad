//! Round-parameterized mixing digest
//!
//! This is the deliberately weak digest at the heart of the system: a 64-bit
//! state absorbed byte-by-byte, then stirred for a configurable number of
//! rounds. It is deterministic, defined for every string including the empty
//! one, and its fixed-width hex output depends on the whole input. It is NOT
//! a cryptographic hash; the collision harness exists to demonstrate exactly
//! that.

/// Default mixing rounds
pub const DEFAULT_ROUNDS: u32 = 10;

/// Default output width in bytes (16 hex characters)
pub const DEFAULT_WIDTH: usize = 8;

const ABSORB_SEED: u64 = 0xcbf2_9ce4_8422_2325;
const ABSORB_PRIME: u64 = 0x0000_0100_0000_01b3;
const STIR_MUL_A: u64 = 0xff51_afd7_ed55_8ccd;
const STIR_MUL_B: u64 = 0xc4ce_b9fe_1a85_ec53;
const ROUND_STEP: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stateless digest function over strings
///
/// Cheap to copy; safe to share across any number of concurrent build
/// pipelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestEngine {
    rounds: u32,
    width: usize,
}

impl DigestEngine {
    /// Engine with the default rounds and output width
    pub fn new() -> Self {
        DigestEngine {
            rounds: DEFAULT_ROUNDS,
            width: DEFAULT_WIDTH,
        }
    }

    /// Engine with a specific round count
    pub fn with_rounds(rounds: u32) -> Self {
        DigestEngine {
            rounds,
            width: DEFAULT_WIDTH,
        }
    }

    /// Shrink or widen the output, in bytes (clamped to 1..=8)
    ///
    /// Narrow widths shrink the effective output space so the collision
    /// probe can be exercised within a small attempt budget.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, 8);
        self
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Output length in hex characters
    pub fn output_len(&self) -> usize {
        self.width * 2
    }

    /// Digest a string into fixed-width lowercase hex
    pub fn digest(&self, data: &str) -> String {
        let mut state = ABSORB_SEED ^ (data.len() as u64).wrapping_mul(ROUND_STEP);

        for (i, byte) in data.bytes().enumerate() {
            state ^= u64::from(byte) << ((i % 8) * 8);
            state = state.wrapping_mul(ABSORB_PRIME);
            state = state.rotate_left(29);
        }

        for round in 0..self.rounds {
            state = state.wrapping_add(ROUND_STEP.wrapping_mul(u64::from(round) + 1));
            state ^= state >> 33;
            state = state.wrapping_mul(STIR_MUL_A);
            state ^= state >> 29;
            state = state.wrapping_mul(STIR_MUL_B);
            state ^= state >> 32;
        }

        hex::encode(&state.to_be_bytes()[8 - self.width..])
    }
}

impl Default for DigestEngine {
    fn default() -> Self {
        DigestEngine::new()
    }
}
