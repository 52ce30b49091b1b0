//! Message encryption.
//!
//! Two modes, chosen by the caller per message:
//! - [`sealed`]: encrypt-to-public-key with an anonymous sender. Only the
//!   holder of the matching private key can open the payload, and the
//!   recipient learns nothing about who sealed it.
//! - [`symmetric`]: authenticated encryption under a shared 32-byte key.
//!
//! Neither mode embeds which mode or output framing was used; the caller
//! must remember both to decrypt.

pub mod sealed;
pub mod symmetric;

pub use symmetric::SymmetricKey;
