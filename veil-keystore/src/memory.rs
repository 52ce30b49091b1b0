//! In-memory keystore for testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::KeyStoreError;
use crate::store::{IdentityMarker, KeyStore};

/// In-memory keystore backed by an insertion-ordered vector.
///
/// Thread-safe. Useful for testing and ephemeral nodes that never persist
/// their identity.
pub struct MemoryKeyStore {
    keys: RwLock<Vec<(String, String)>>,
}

impl MemoryKeyStore {
    /// Create a new empty in-memory keystore.
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of keypairs in the store.
    pub fn len(&self) -> usize {
        self.keys.read().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.read().unwrap().is_empty()
    }
}

impl Default for MemoryKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for MemoryKeyStore {
    fn first_public_key(&self) -> Result<Option<String>, KeyStoreError> {
        Ok(self.keys.read().unwrap().first().map(|(public, _)| public.clone()))
    }

    fn private_key(&self, public_key: &str) -> Result<Option<String>, KeyStoreError> {
        Ok(self
            .keys
            .read()
            .unwrap()
            .iter()
            .find(|(public, _)| public == public_key)
            .map(|(_, private)| private.clone()))
    }

    fn add_key(&self, public_key: &str, private_key: &str) -> Result<(), KeyStoreError> {
        let mut keys = self.keys.write().unwrap();
        match keys.iter_mut().find(|(public, _)| public == public_key) {
            Some((_, private)) => *private = private_key.to_string(),
            None => keys.push((public_key.to_string(), private_key.to_string())),
        }
        Ok(())
    }

    fn remove_key(&self, public_key: &str) -> Result<(), KeyStoreError> {
        self.keys
            .write()
            .unwrap()
            .retain(|(public, _)| public != public_key);
        Ok(())
    }

    fn public_keys(&self) -> Result<Vec<String>, KeyStoreError> {
        Ok(self
            .keys
            .read()
            .unwrap()
            .iter()
            .map(|(public, _)| public.clone())
            .collect())
    }
}

/// In-memory identity marker.
pub struct MemoryMarker {
    set: AtomicBool,
}

impl MemoryMarker {
    /// Create a new unset marker.
    pub fn new() -> Self {
        Self {
            set: AtomicBool::new(false),
        }
    }
}

impl Default for MemoryMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityMarker for MemoryMarker {
    fn exists(&self) -> Result<bool, KeyStoreError> {
        Ok(self.set.load(Ordering::SeqCst))
    }

    fn set(&self) -> Result<(), KeyStoreError> {
        self.set.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let store = MemoryKeyStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.first_public_key().unwrap().is_none());
    }

    #[test]
    fn test_add_and_lookup() {
        let store = MemoryKeyStore::new();
        store.add_key("pub1", "priv1").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.private_key("pub1").unwrap(), Some("priv1".to_string()));
        assert!(store.private_key("pub2").unwrap().is_none());
    }

    #[test]
    fn test_first_public_key_is_insertion_order() {
        let store = MemoryKeyStore::new();
        store.add_key("pub1", "priv1").unwrap();
        store.add_key("pub2", "priv2").unwrap();

        assert_eq!(store.first_public_key().unwrap(), Some("pub1".to_string()));
    }

    #[test]
    fn test_add_existing_replaces_private_key() {
        let store = MemoryKeyStore::new();
        store.add_key("pub1", "priv1").unwrap();
        store.add_key("pub2", "priv2").unwrap();
        store.add_key("pub1", "priv1b").unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.private_key("pub1").unwrap(), Some("priv1b".to_string()));
        // Position is preserved
        assert_eq!(store.first_public_key().unwrap(), Some("pub1".to_string()));
    }

    #[test]
    fn test_remove_key() {
        let store = MemoryKeyStore::new();
        store.add_key("pub1", "priv1").unwrap();
        store.add_key("pub2", "priv2").unwrap();

        store.remove_key("pub1").unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.private_key("pub1").unwrap().is_none());
        assert_eq!(store.first_public_key().unwrap(), Some("pub2".to_string()));

        // Removing an absent key is a no-op
        store.remove_key("pub1").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_public_keys_listing() {
        let store = MemoryKeyStore::new();
        store.add_key("pub1", "priv1").unwrap();
        store.add_key("pub2", "priv2").unwrap();

        assert_eq!(store.public_keys().unwrap(), vec!["pub1", "pub2"]);
    }

    #[test]
    fn test_marker_set_and_exists() {
        let marker = MemoryMarker::new();
        assert!(!marker.exists().unwrap());

        marker.set().unwrap();
        assert!(marker.exists().unwrap());

        // Setting again is a no-op
        marker.set().unwrap();
        assert!(marker.exists().unwrap());
    }
}
