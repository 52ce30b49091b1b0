//! # Veil Crypto
//!
//! Cryptographic identity and trust core for a Veil network node.
//!
//! This crate provides:
//! - Ed25519 identity keypairs with unpadded base-32 text encoding
//! - One-time identity load-or-generate against a durable keystore
//! - Passphrase-derived (deterministic) keypairs via Argon2id
//! - Sealed asymmetric encryption (anonymous sender, Curve25519)
//! - Symmetric authenticated encryption (XSalsa20-Poly1305)
//! - Iterated-hash pseudonymous identifiers
//! - Proof-of-work verification for incoming blocks
//!
//! Peer discovery, transport, and block propagation live elsewhere; this
//! crate only supplies the primitives those layers call.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cipher;
pub mod config;
pub mod deterministic;
pub mod encoding;
pub mod error;
pub mod hashing;
pub mod identifier;
pub mod identity;
pub mod keys;
pub mod pow;

// Re-export commonly used types at crate root
pub use cipher::{sealed, symmetric, SymmetricKey};
pub use config::CoreConfig;
pub use deterministic::LengthCheck;
pub use encoding::Encoding;
pub use error::{CryptoError, IdentityError};
pub use identifier::derive_identifier;
pub use identity::Identity;
pub use keys::{KeyPair, PublicKey};
pub use pow::{DifficultyEstimator, FixedEstimator, PowVerifier};
