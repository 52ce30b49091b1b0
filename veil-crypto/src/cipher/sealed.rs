//! Sealed asymmetric encryption (anonymous sender).
//!
//! A sealed payload is encrypted to a peer's Ed25519 identity key: the
//! verifying key is mapped to its birationally equivalent Curve25519
//! point, then the libsodium sealed-box construction (ephemeral X25519
//! exchange + XSalsa20-Poly1305) encrypts to it. The sender's identity is
//! not bound to the payload at the cryptographic layer; only the
//! recipient's private key can open it.

use rand::rngs::OsRng;

use crate::encoding::{decode_payload, encode_payload, Encoding};
use crate::error::CryptoError;
use crate::keys::{KeyPair, PublicKey};

/// Map an Ed25519 verifying key to its Curve25519 exchange key.
fn exchange_public(recipient: &PublicKey) -> crypto_box::PublicKey {
    crypto_box::PublicKey::from(recipient.inner().to_montgomery().to_bytes())
}

/// Map an Ed25519 signing key to its Curve25519 exchange scalar.
fn exchange_secret(recipient: &KeyPair) -> crypto_box::SecretKey {
    crypto_box::SecretKey::from(recipient.signing_key().to_scalar_bytes())
}

/// Seal plaintext to a recipient's public key.
///
/// Output is the sealed payload framed per `output`. Nothing about the
/// sender is recoverable from the result.
pub fn encrypt(
    plaintext: &[u8],
    recipient: &PublicKey,
    output: Encoding,
) -> Result<Vec<u8>, CryptoError> {
    let sealed = exchange_public(recipient)
        .seal(&mut OsRng, plaintext)
        .map_err(|_| CryptoError::Encryption)?;
    Ok(encode_payload(sealed, output))
}

/// Open a sealed payload with the recipient's keypair.
///
/// Fails with [`CryptoError::AuthenticationFailure`] when the payload was
/// sealed to a different key, is malformed, or has been tampered with.
pub fn decrypt(
    ciphertext: &[u8],
    recipient: &KeyPair,
    input: Encoding,
) -> Result<Vec<u8>, CryptoError> {
    let payload = decode_payload(ciphertext, input)?;
    exchange_secret(recipient)
        .unseal(&payload)
        .map_err(|_| CryptoError::AuthenticationFailure)
}
