//! Proof-of-work verification for incoming blocks.
//!
//! Every unit of network data carries a PoW token: its SHA3-256 hash must
//! start with a number of zero hex characters. The required count comes
//! from a dynamic estimator supplied by the network layer, floored by the
//! configured network-wide minimum. Rejection is a routine classification
//! outcome, so verification returns a boolean rather than an error.

use crate::config::CoreConfig;
use crate::hashing::sha3_256_hex;

/// Upper bound on difficulty: a SHA3-256 hex digest has 64 characters.
pub const MAX_DIFFICULTY: u32 = 64;

/// Reference target; the puzzle is its first `difficulty` characters.
const ZERO_TARGET: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Dynamic difficulty estimation, supplied by the surrounding network
/// layer (typically a function of block size and per-peer state).
pub trait DifficultyEstimator {
    /// Estimate the required difficulty for a block.
    fn estimate(&self, content: &[u8], own_block: bool) -> u32;
}

/// Estimator that always returns the same difficulty.
///
/// For tests and callers without dynamic estimation.
#[derive(Clone, Copy, Debug)]
pub struct FixedEstimator(pub u32);

impl DifficultyEstimator for FixedEstimator {
    fn estimate(&self, _content: &[u8], _own_block: bool) -> u32 {
        self.0
    }
}

/// Verifies block proof-of-work against the estimated difficulty,
/// floored by the configured minimum.
pub struct PowVerifier<E> {
    estimator: E,
    minimum: u32,
}

impl<E: DifficultyEstimator> PowVerifier<E> {
    /// Create a verifier from an estimator and the configured floor.
    pub fn new(estimator: E, config: &CoreConfig) -> Self {
        Self {
            estimator,
            minimum: config.minimum_block_pow,
        }
    }

    /// The difficulty that would be required for `content`.
    ///
    /// The floor always wins over the estimate; the result is clamped to
    /// [`MAX_DIFFICULTY`] since a digest cannot have more leading zeros
    /// than characters.
    pub fn required_difficulty(&self, content: &[u8]) -> u32 {
        self.estimator
            .estimate(content, false)
            .max(self.minimum)
            .min(MAX_DIFFICULTY)
    }

    /// Verify the proof of work attached to a block.
    ///
    /// Returns `true` iff the block's SHA3-256 hex digest starts with the
    /// required number of zero characters. A difficulty of 0 accepts any
    /// hash.
    pub fn verify(&self, content: &[u8]) -> bool {
        let block_hash = sha3_256_hex(content);
        let difficulty = self.required_difficulty(content) as usize;
        let puzzle = &ZERO_TARGET[..difficulty];

        if block_hash[..difficulty] == *puzzle {
            true
        } else {
            tracing::debug!(difficulty, "block hash does not meet proof of work");
            false
        }
    }
}
