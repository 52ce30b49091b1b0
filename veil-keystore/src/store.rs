//! Keystore and identity-marker traits.

use crate::error::KeyStoreError;

/// Durable mapping from encoded public key to encoded private key.
///
/// Implementations must preserve insertion order: `first_public_key`
/// returns the oldest key, which is the one a node falls back to when no
/// explicit public key is configured.
pub trait KeyStore: Send + Sync {
    /// Return the first (oldest) public key known to the store, if any.
    fn first_public_key(&self) -> Result<Option<String>, KeyStoreError>;

    /// Look up the private key stored for a public key.
    fn private_key(&self, public_key: &str) -> Result<Option<String>, KeyStoreError>;

    /// Add a keypair to the store.
    ///
    /// Adding a public key that is already present replaces its private
    /// key; the key keeps its original position in the ordering.
    fn add_key(&self, public_key: &str, private_key: &str) -> Result<(), KeyStoreError>;

    /// Remove a keypair from the store. Removing an absent key is a no-op.
    fn remove_key(&self, public_key: &str) -> Result<(), KeyStoreError>;

    /// List all public keys in insertion order.
    fn public_keys(&self) -> Result<Vec<String>, KeyStoreError>;
}

/// Durable boolean marker recording that a node identity has been created.
///
/// Consulted exactly once per process start to decide between loading an
/// existing identity and generating a new one.
pub trait IdentityMarker: Send + Sync {
    /// Check whether the marker is set.
    fn exists(&self) -> Result<bool, KeyStoreError>;

    /// Set the marker. Setting an already-set marker is a no-op.
    fn set(&self) -> Result<(), KeyStoreError>;
}
