//! Error types for the Veil crypto core.

use std::fmt;

use veil_keystore::KeyStoreError;

/// Errors from cryptographic operations.
///
/// Failures are never downgraded to default or empty values; every decode
/// or authentication failure must reach the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// Deterministic-key passphrase shorter than the required minimum.
    PasswordStrength {
        /// Required minimum passphrase length in bytes.
        minimum: usize,
        /// Length of the passphrase that was supplied.
        actual: usize,
    },
    /// Ciphertext failed authentication or is structurally invalid.
    ///
    /// Plaintext is never returned when this is raised.
    AuthenticationFailure,
    /// Encryption failed in the underlying primitive.
    Encryption,
    /// Malformed base-32/base-64/hex input to a decode step.
    Decoding(String),
    /// The public key bytes do not describe a valid Ed25519 point.
    InvalidPublicKey,
    /// The private key is not a valid 32-byte seed.
    InvalidSecretKey,
    /// The key-derivation function rejected its parameters or input.
    KeyDerivation,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::PasswordStrength { minimum, actual } => write!(
                f,
                "passphrase must be at least {} characters, got {}",
                minimum, actual
            ),
            CryptoError::AuthenticationFailure => write!(f, "ciphertext authentication failed"),
            CryptoError::Encryption => write!(f, "encryption failed"),
            CryptoError::Decoding(msg) => write!(f, "decode failed: {}", msg),
            CryptoError::InvalidPublicKey => write!(f, "invalid public key"),
            CryptoError::InvalidSecretKey => write!(f, "invalid secret key"),
            CryptoError::KeyDerivation => write!(f, "key derivation failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Errors from identity initialization.
#[derive(Debug)]
pub enum IdentityError {
    /// The identity marker exists but the keystore holds no matching
    /// private key. The node cannot safely continue and must abort
    /// startup.
    Corrupted(String),
    /// Keystore read or write failed.
    Store(KeyStoreError),
    /// Stored key material could not be decoded.
    Crypto(CryptoError),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Corrupted(detail) => {
                write!(f, "identity state corrupted: {}", detail)
            }
            IdentityError::Store(e) => write!(f, "keystore error: {}", e),
            IdentityError::Crypto(e) => write!(f, "crypto error: {}", e),
        }
    }
}

impl std::error::Error for IdentityError {}

impl From<KeyStoreError> for IdentityError {
    fn from(e: KeyStoreError) -> Self {
        IdentityError::Store(e)
    }
}

impl From<CryptoError> for IdentityError {
    fn from(e: CryptoError) -> Self {
        IdentityError::Crypto(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CryptoError::PasswordStrength {
            minimum: 25,
            actual: 5,
        };
        assert!(e.to_string().contains("at least 25"));

        let e = CryptoError::Decoding("bad symbol".into());
        assert!(e.to_string().contains("decode failed"));

        let e = IdentityError::Corrupted("no private key for ABC".into());
        assert!(e.to_string().contains("corrupted"));
    }

    #[test]
    fn test_error_conversion() {
        let crypto_err = CryptoError::InvalidPublicKey;
        let id_err: IdentityError = crypto_err.into();
        assert!(matches!(id_err, IdentityError::Crypto(CryptoError::InvalidPublicKey)));
    }
}
