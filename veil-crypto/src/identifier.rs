//! Iterated-hash pseudonymous identifiers.
//!
//! A peer's identifier is derived from its encoded public key by chaining
//! SHA3-256: each round hashes the key text followed by the previous
//! round's hex digest. The chain length makes bulk identifier enumeration
//! (sybil mining) proportionally more expensive than a single hash, while
//! staying cheap enough to compute once per peer.
//!
//! The derivation is deterministic and unsalted: the same public key
//! yields the same identifier on every node and across restarts.

use sha3::{Digest, Sha3_256};

/// Number of chained hash rounds per identifier.
pub const HASH_ID_ROUNDS: usize = 2000;

/// Derive the pseudonymous identifier for an encoded public key.
///
/// The base-32 key text itself is hashed, not the decoded key bytes;
/// every node must agree on this for identifiers to match. Returns the
/// final round's lowercase hex digest.
pub fn derive_identifier(encoded_public_key: &str) -> String {
    let key = encoded_public_key.as_bytes();

    let mut prev = [0u8; 64];
    let mut prev_len = 0usize;
    for _ in 0..HASH_ID_ROUNDS {
        let mut hasher = Sha3_256::new();
        hasher.update(key);
        hasher.update(&prev[..prev_len]);
        let digest = hasher.finalize();

        hex::encode_to_slice(digest, &mut prev).expect("hex of 32 bytes fills 64 bytes");
        prev_len = prev.len();
    }

    String::from_utf8(prev.to_vec()).expect("hex digest is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;

    #[test]
    fn test_identifier_is_stable() {
        let key = KeyPair::generate().encoded_public();
        assert_eq!(derive_identifier(&key), derive_identifier(&key));
    }

    #[test]
    fn test_identifier_shape() {
        let id = derive_identifier(&KeyPair::generate().encoded_public());
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_distinct_keys_distinct_identifiers() {
        let ids: Vec<String> = (0..8)
            .map(|_| derive_identifier(&KeyPair::generate().encoded_public()))
            .collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_chain_actually_iterates() {
        // One round would be SHA3(key); the chained result must differ
        let key = KeyPair::generate().encoded_public();
        let single = crate::hashing::sha3_256_hex(key.as_bytes());
        assert_ne!(derive_identifier(&key), single);
    }

    #[test]
    fn test_matches_naive_chain() {
        // Differential check against a straightforward reimplementation.
        // Guards the concatenation order: key bytes first, then the
        // previous round's hex digest.
        let key = "TESTKEY";

        let mut prev = String::new();
        for _ in 0..HASH_ID_ROUNDS {
            let mut data = Vec::with_capacity(key.len() + prev.len());
            data.extend_from_slice(key.as_bytes());
            data.extend_from_slice(prev.as_bytes());
            prev = crate::hashing::sha3_256_hex(&data);
        }

        assert_eq!(derive_identifier(key), prev);
    }
}
