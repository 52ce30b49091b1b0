//! # Veil Keystore
//!
//! Durable storage for a node's signing keys, plus the identity-presence
//! marker consulted during startup.
//!
//! This crate provides an abstraction over key storage with two
//! implementations:
//! - `MemoryKeyStore` / `MemoryMarker`: in-memory state for testing
//! - `FileKeyStore` / `FileMarker`: line-oriented file storage for
//!   production nodes
//!
//! Keys are stored as encoded text (unpadded base-32 by convention of the
//! callers); this crate treats them as opaque strings and never inspects
//! key material.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::KeyStoreError;
pub use file::{FileKeyStore, FileMarker};
pub use memory::{MemoryKeyStore, MemoryMarker};
pub use store::{IdentityMarker, KeyStore};
