//! Keystore error types.

use thiserror::Error;

/// Errors that can occur during keystore operations.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// I/O error reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be parsed.
    #[error("Malformed key record: {0}")]
    Malformed(String),
}
