//! Passphrase-derived (deterministic) keypairs.
//!
//! A keypair is derived solely from a passphrase: Argon2id stretches the
//! passphrase into a 32-byte seed, which is expanded into an Ed25519 pair
//! by the usual seed-to-keypair expansion. The same passphrase always
//! yields the same pair, so an identity can be re-derived from memory on
//! any machine.
//!
//! The salt is a fixed protocol-wide constant. Changing it would silently
//! fork every re-derivable identity on the network, so it must be
//! preserved byte-for-byte.

use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::CryptoError;
use crate::keys::KeyPair;

/// Minimum passphrase length in bytes.
pub const MIN_PASSPHRASE_LENGTH: usize = 25;

/// Fixed Argon2id salt. Not secret, not unique, but load-bearing:
/// every node must use this exact value for derived identities to agree.
pub const KDF_SALT: &[u8; 16] = b"U81Q7llrQcdTP0Ux";

/// Argon2id pass count (libsodium "sensitive" preset).
const ARGON2_T_COST: u32 = 4;

/// Argon2id memory in KiB, 1 GiB (libsodium "sensitive" preset).
const ARGON2_M_COST: u32 = 1024 * 1024;

/// Argon2id lane count.
const ARGON2_P_COST: u32 = 1;

/// Whether to enforce the minimum passphrase length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthCheck {
    /// Reject passphrases shorter than [`MIN_PASSPHRASE_LENGTH`].
    Enforce,
    /// Accept any passphrase. For callers that have already validated
    /// strength some other way.
    Bypass,
}

/// Derive an Ed25519 keypair from a passphrase.
///
/// Passphrases shorter than [`MIN_PASSPHRASE_LENGTH`] bytes are rejected
/// with [`CryptoError::PasswordStrength`] unless `check` is
/// [`LengthCheck::Bypass`]. The passphrase is never truncated or padded.
///
/// The derivation uses the Argon2id "sensitive" cost preset (4 passes,
/// 1 GiB memory) and takes several seconds by design.
pub fn generate(passphrase: &str, check: LengthCheck) -> Result<KeyPair, CryptoError> {
    if check == LengthCheck::Enforce && passphrase.len() < MIN_PASSPHRASE_LENGTH {
        return Err(CryptoError::PasswordStrength {
            minimum: MIN_PASSPHRASE_LENGTH,
            actual: passphrase.len(),
        });
    }

    let params = Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, Some(32))
        .map_err(|_| CryptoError::KeyDerivation)?;
    let seed = derive_seed(passphrase.as_bytes(), params)?;
    Ok(KeyPair::from_seed_bytes(&seed))
}

/// Stretch a passphrase into a 32-byte Ed25519 seed with Argon2id.
fn derive_seed(passphrase: &[u8], params: Params) -> Result<[u8; 32], CryptoError> {
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut seed = [0u8; 32];
    argon2
        .hash_password_into(passphrase, KDF_SALT, &mut seed)
        .map_err(|_| CryptoError::KeyDerivation)?;

    Ok(seed)
}
