//! SHA3-256 and BLAKE2b hashing utilities.
//!
//! SHA3-256 is the protocol's content hash: block hashes, proof-of-work
//! targets, and identifier derivation all use it. BLAKE2b-256 is the
//! faster alternate hash, with a keyed variant for MAC-style uses.

use blake2::digest::consts::U32;
use blake2::digest::Mac;
use blake2::{Blake2b, Blake2bMac};
use sha3::{Digest, Sha3_256};

type Blake2b256 = Blake2b<U32>;
type Blake2bMac256 = Blake2bMac<U32>;

/// Compute the SHA3-256 hash of the input data.
#[inline]
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA3-256 hash and return it as a lowercase hex digest.
pub fn sha3_256_hex(data: &[u8]) -> String {
    hex::encode(sha3_256(data))
}

/// Compute the BLAKE2b-256 hash of the input data.
#[inline]
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the BLAKE2b-256 hash and return it as a lowercase hex digest.
pub fn blake2b_256_hex(data: &[u8]) -> String {
    hex::encode(blake2b_256(data))
}

/// Compute a keyed BLAKE2b-256 MAC over the input data.
///
/// The key may be 1 to 64 bytes long.
pub fn blake2b_256_keyed(key: &[u8], data: &[u8]) -> Result<[u8; 32], crate::error::CryptoError> {
    let mut mac = Blake2bMac256::new_from_slice(key)
        .map_err(|_| crate::error::CryptoError::KeyDerivation)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}
