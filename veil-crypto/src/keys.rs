//! Ed25519 identity keypairs and their text encoding.
//!
//! Keys travel between nodes as unpadded base-32 text: the public key is
//! the encoded 32-byte verifying key, the private key is the encoded
//! 32-byte seed. The public key is always derivable from the private key,
//! and a pair is immutable once created.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::encoding::{decode_key, encode_key};
use crate::error::CryptoError;

/// Size of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 private key seed in bytes.
pub const SEED_SIZE: usize = 32;

/// Ed25519 public key wrapper with base-32 text encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Create a PublicKey from raw bytes.
    pub fn from_bytes(bytes: &[u8; PUBLIC_KEY_SIZE]) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(bytes)
            .map(PublicKey)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Decode a PublicKey from unpadded base-32 text.
    pub fn from_encoded(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = decode_key(encoded)?;
        let bytes: [u8; PUBLIC_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(&bytes)
    }

    /// Encode the key as unpadded base-32 text.
    pub fn encode(&self) -> String {
        encode_key(self.0.as_bytes())
    }

    /// Get the raw bytes of the public key.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.0.as_bytes()
    }

    /// Get the inner VerifyingKey.
    #[inline]
    pub(crate) fn inner(&self) -> &VerifyingKey {
        &self.0
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(key: VerifyingKey) -> Self {
        PublicKey(key)
    }
}

/// Ed25519 key pair holding a node or peer identity.
///
/// The seed should be kept secure and never transmitted; only the
/// encoded public key is safe to share.
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair using the OS random number generator.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        KeyPair { signing_key }
    }

    /// Create a key pair from a 32-byte seed.
    pub fn from_seed_bytes(bytes: &[u8; SEED_SIZE]) -> Self {
        KeyPair {
            signing_key: SigningKey::from_bytes(bytes),
        }
    }

    /// Decode a key pair from its unpadded base-32 seed encoding.
    pub fn from_encoded(encoded_private: &str) -> Result<Self, CryptoError> {
        let bytes = decode_key(encoded_private)?;
        let bytes: [u8; SEED_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSecretKey)?;
        Ok(Self::from_seed_bytes(&bytes))
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing_key.verifying_key())
    }

    /// Encode the public key as unpadded base-32 text.
    pub fn encoded_public(&self) -> String {
        self.public_key().encode()
    }

    /// Encode the private key seed as unpadded base-32 text.
    ///
    /// Use with caution - the encoding is reversible and carries the full
    /// identity.
    pub fn encoded_private(&self) -> String {
        encode_key(self.signing_key.as_bytes())
    }

    /// Get the raw bytes of the seed.
    pub fn seed_bytes(&self) -> &[u8; SEED_SIZE] {
        self.signing_key.as_bytes()
    }

    /// Get the signing key.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl Clone for KeyPair {
    fn clone(&self) -> Self {
        KeyPair {
            signing_key: SigningKey::from_bytes(self.signing_key.as_bytes()),
        }
    }
}
