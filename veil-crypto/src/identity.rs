//! Node identity lifecycle.
//!
//! A node has exactly one active identity per process. On startup it
//! either loads the persisted keypair from the keystore or, on first run,
//! generates and persists a fresh one. After construction nothing can
//! replace the active identity; rotation means restarting with a
//! different configuration.

use veil_keystore::{IdentityMarker, KeyStore};

use crate::config::CoreConfig;
use crate::error::IdentityError;
use crate::keys::KeyPair;

/// The node's active identity keypair.
///
/// Constructed exactly once during startup via [`Identity::load_or_generate`]
/// and passed by reference to the components that need it. The struct
/// offers no mutation: a process observes one identity for its lifetime.
pub struct Identity {
    keypair: KeyPair,
}

impl Identity {
    /// Load the persisted identity, or generate and persist a new one.
    ///
    /// When the marker reports an existing identity, the configured
    /// public key (or the keystore's first key, when none is configured)
    /// selects the pair to load. A marker without a matching private key
    /// is [`IdentityError::Corrupted`]: the node cannot safely continue
    /// and must abort startup.
    ///
    /// The exists-check, generation, and persistence form one sequence
    /// with observable side effects; concurrent initializations against
    /// the same store must be serialized by the caller, or two processes
    /// may persist divergent identities.
    pub fn load_or_generate(
        store: &dyn KeyStore,
        marker: &dyn IdentityMarker,
        config: &CoreConfig,
    ) -> Result<Self, IdentityError> {
        if marker.exists()? {
            let public = match config.public_key.as_deref() {
                Some(configured) if !configured.is_empty() => configured.to_string(),
                _ => store.first_public_key()?.ok_or_else(|| {
                    IdentityError::Corrupted("identity marker set but keystore is empty".into())
                })?,
            };

            let private = store.private_key(&public)?.ok_or_else(|| {
                IdentityError::Corrupted(format!("no private key stored for {}", public))
            })?;

            let keypair = KeyPair::from_encoded(&private)?;
            if keypair.encoded_public() != public {
                return Err(IdentityError::Corrupted(format!(
                    "stored private key does not derive {}",
                    public
                )));
            }

            tracing::info!(public_key = %public, "loaded node identity");
            Ok(Self { keypair })
        } else {
            let keypair = KeyPair::generate();
            store.add_key(&keypair.encoded_public(), &keypair.encoded_private())?;
            marker.set()?;

            tracing::info!(public_key = %keypair.encoded_public(), "generated new node identity");
            Ok(Self { keypair })
        }
    }

    /// The active keypair.
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    /// The active public key as unpadded base-32 text.
    pub fn encoded_public(&self) -> String {
        self.keypair.encoded_public()
    }
}
