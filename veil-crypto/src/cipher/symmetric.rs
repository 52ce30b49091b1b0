//! Symmetric authenticated encryption (XSalsa20-Poly1305).
//!
//! Ciphertexts are self-contained: a fresh random 24-byte nonce is
//! generated per message and prepended to the authenticated payload, so
//! decryption needs only the ciphertext and the key.

use crypto_secretbox::aead::{Aead, AeadCore, KeyInit};
use crypto_secretbox::{Key, Nonce, XSalsa20Poly1305};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::encoding::{decode_payload, encode_payload, Encoding};
use crate::error::CryptoError;

/// Size of a symmetric key in bytes.
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// Size of the nonce prepended to every ciphertext.
pub const NONCE_SIZE: usize = 24;

/// A 32-byte symmetric secret.
///
/// Either generated fresh (ephemeral, caller-owned) or supplied by the
/// caller. No rotation or expiry logic lives here.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey([u8; SYMMETRIC_KEY_SIZE]);

impl SymmetricKey {
    /// Generate a fresh random key from the OS random number generator.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SYMMETRIC_KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create a key from raw bytes.
    pub fn from_bytes(bytes: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Decode a key from its hex export.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(encoded)
            .map_err(|e| CryptoError::Decoding(format!("hex: {}", e)))?;
        let bytes: [u8; SYMMETRIC_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::Decoding("symmetric key must be 32 bytes".into()))?;
        Ok(Self(bytes))
    }

    /// Decode a key from base-64 text.
    pub fn from_base64(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = decode_payload(encoded.as_bytes(), Encoding::Base64)?;
        let bytes: [u8; SYMMETRIC_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::Decoding("symmetric key must be 32 bytes".into()))?;
        Ok(Self(bytes))
    }

    /// Export the key as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        write!(f, "SymmetricKey([redacted])")
    }
}

/// Encrypt and authenticate plaintext under `key`.
///
/// The returned payload is `nonce || ciphertext`, framed per `output`.
pub fn encrypt(
    plaintext: &[u8],
    key: &SymmetricKey,
    output: Encoding,
) -> Result<Vec<u8>, CryptoError> {
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key.as_bytes()));
    let nonce = XSalsa20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::Encryption)?;

    let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);
    Ok(encode_payload(payload, output))
}

/// Decrypt a payload produced by [`encrypt`].
///
/// Fails with [`CryptoError::AuthenticationFailure`] when the MAC does
/// not verify or the payload is too short to carry a nonce. Corrupted
/// plaintext is never returned.
pub fn decrypt(
    ciphertext: &[u8],
    key: &SymmetricKey,
    input: Encoding,
) -> Result<Vec<u8>, CryptoError> {
    let payload = decode_payload(ciphertext, input)?;
    if payload.len() < NONCE_SIZE {
        return Err(CryptoError::AuthenticationFailure);
    }

    let (nonce, boxed) = payload.split_at(NONCE_SIZE);
    let cipher = XSalsa20Poly1305::new(Key::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(nonce), boxed)
        .map_err(|_| CryptoError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_raw() {
        let key = SymmetricKey::generate();
        let plaintext = b"the quick brown fox";

        let ciphertext = encrypt(plaintext, &key, Encoding::Raw).unwrap();
        let decrypted = decrypt(&ciphertext, &key, Encoding::Raw).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_roundtrip_base64() {
        let key = SymmetricKey::generate();
        let plaintext = b"the quick brown fox";

        let ciphertext = encrypt(plaintext, &key, Encoding::Base64).unwrap();
        assert!(ciphertext.iter().all(u8::is_ascii));

        let decrypted = decrypt(&ciphertext, &key, Encoding::Base64).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_wrong_key_fails() {
        let key = SymmetricKey::generate();
        let other = SymmetricKey::generate();

        let ciphertext = encrypt(b"secret", &key, Encoding::Raw).unwrap();
        let result = decrypt(&ciphertext, &other, Encoding::Raw);

        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_any_flipped_byte_fails() {
        let key = SymmetricKey::generate();
        let ciphertext = encrypt(b"secret", &key, Encoding::Raw).unwrap();

        for i in 0..ciphertext.len() {
            let mut tampered = ciphertext.clone();
            tampered[i] ^= 0x01;
            let result = decrypt(&tampered, &key, Encoding::Raw);
            assert!(
                matches!(result, Err(CryptoError::AuthenticationFailure)),
                "flipping byte {} was not detected",
                i
            );
        }
    }

    #[test]
    fn test_truncated_payload_fails() {
        let key = SymmetricKey::generate();
        let result = decrypt(&[0u8; NONCE_SIZE - 1], &key, Encoding::Raw);
        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_nonces_are_fresh() {
        let key = SymmetricKey::generate();
        let c1 = encrypt(b"same message", &key, Encoding::Raw).unwrap();
        let c2 = encrypt(b"same message", &key, Encoding::Raw).unwrap();
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_key_hex_roundtrip() {
        let key = SymmetricKey::generate();
        let restored = SymmetricKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, restored);
    }

    #[test]
    fn test_key_decode_rejects_wrong_length() {
        assert!(matches!(
            SymmetricKey::from_hex("abcdef"),
            Err(CryptoError::Decoding(_))
        ));
        assert!(matches!(
            SymmetricKey::from_base64("AAAA"),
            Err(CryptoError::Decoding(_))
        ));
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key = SymmetricKey::generate();
        assert_eq!(format!("{:?}", key), "SymmetricKey([redacted])");
    }
}
