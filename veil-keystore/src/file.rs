//! File-backed keystore for production nodes.
//!
//! Keys are stored one pair per line as `public,private` in a plain text
//! file. The format is append-friendly: `add_key` for a new public key is
//! a single append, while replacement and removal rewrite the file.
//!
//! The identity marker is a separate empty file whose existence is the
//! marker state.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::KeyStoreError;
use crate::store::{IdentityMarker, KeyStore};

/// File-backed keystore with one `public,private` record per line.
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    /// Create a keystore backed by the given file path.
    ///
    /// The file is created lazily on the first `add_key`; a missing file
    /// reads as an empty store.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<(String, String)>, KeyStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let mut keys = Vec::new();
        for line in contents.lines() {
            if line.is_empty() {
                continue;
            }
            let (public, private) = line
                .split_once(',')
                .ok_or_else(|| KeyStoreError::Malformed(line.to_string()))?;
            keys.push((public.to_string(), private.to_string()));
        }
        Ok(keys)
    }

    fn rewrite(&self, keys: &[(String, String)]) -> Result<(), KeyStoreError> {
        let mut file = File::create(&self.path)?;
        for (public, private) in keys {
            writeln!(file, "{},{}", public, private)?;
        }
        file.sync_all()?;
        Ok(())
    }
}

impl KeyStore for FileKeyStore {
    fn first_public_key(&self) -> Result<Option<String>, KeyStoreError> {
        Ok(self.load()?.first().map(|(public, _)| public.clone()))
    }

    fn private_key(&self, public_key: &str) -> Result<Option<String>, KeyStoreError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|(public, _)| public == public_key)
            .map(|(_, private)| private))
    }

    fn add_key(&self, public_key: &str, private_key: &str) -> Result<(), KeyStoreError> {
        let mut keys = self.load()?;
        match keys.iter_mut().find(|(public, _)| public == public_key) {
            Some((_, private)) => {
                *private = private_key.to_string();
                self.rewrite(&keys)
            }
            None => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?;
                writeln!(file, "{},{}", public_key, private_key)?;
                file.sync_all()?;
                Ok(())
            }
        }
    }

    fn remove_key(&self, public_key: &str) -> Result<(), KeyStoreError> {
        let mut keys = self.load()?;
        let before = keys.len();
        keys.retain(|(public, _)| public != public_key);
        if keys.len() != before {
            self.rewrite(&keys)?;
        }
        Ok(())
    }

    fn public_keys(&self) -> Result<Vec<String>, KeyStoreError> {
        Ok(self
            .load()?
            .into_iter()
            .map(|(public, _)| public)
            .collect())
    }
}

/// Identity marker backed by the existence of a file.
pub struct FileMarker {
    path: PathBuf,
}

impl FileMarker {
    /// Create a marker backed by the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the marker file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityMarker for FileMarker {
    fn exists(&self) -> Result<bool, KeyStoreError> {
        Ok(self.path.exists())
    }

    fn set(&self) -> Result<(), KeyStoreError> {
        File::create(&self.path)?;
        Ok(())
    }
}
