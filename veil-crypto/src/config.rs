//! Core configuration.

/// Settings consumed by the crypto core.
///
/// Built once by the surrounding node from its settings source and passed
/// in explicitly; the core never reads configuration ambiently.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    /// Which public key to load as the node identity. When unset, the
    /// first key known to the keystore is used.
    pub public_key: Option<String>,

    /// Network-wide floor on block proof-of-work difficulty. A block is
    /// never accepted below this many leading zero hex characters,
    /// regardless of the dynamic estimate.
    pub minimum_block_pow: u32,
}

impl CoreConfig {
    /// Default difficulty floor.
    pub const DEFAULT_MINIMUM_BLOCK_POW: u32 = 5;
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            minimum_block_pow: Self::DEFAULT_MINIMUM_BLOCK_POW,
        }
    }
}
