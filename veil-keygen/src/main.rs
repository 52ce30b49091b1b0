//! Veil key generation tool.
//!
//! Generates Ed25519 identity keypairs for Veil nodes, either fresh from
//! OS randomness or re-derived from a passphrase.
//!
//! # Usage
//!
//! ```bash
//! # Generate a fresh keypair (human-readable output)
//! veil-keygen
//!
//! # Re-derive a keypair from a passphrase (slow by design)
//! veil-keygen --passphrase "a memorable passphrase of sufficient length"
//!
//! # Generate a keypair (JSON output)
//! veil-keygen --json
//! ```

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use veil_crypto::{derive_identifier, deterministic, KeyPair, LengthCheck};

/// Veil identity key generation tool.
#[derive(Parser, Debug)]
#[command(name = "veil-keygen")]
#[command(about = "Generate Ed25519 identity keypairs for Veil nodes")]
#[command(version)]
struct Cli {
    /// Derive the keypair from a passphrase instead of OS randomness.
    /// The same passphrase always yields the same keypair.
    #[arg(long)]
    passphrase: Option<String>,

    /// Skip the minimum passphrase length check. Short passphrases make
    /// the derived identity guessable; use only for testing.
    #[arg(long, requires = "passphrase")]
    bypass_length_check: bool,

    /// Output in JSON format for machine parsing.
    #[arg(long)]
    json: bool,
}

/// JSON output format.
#[derive(Serialize)]
struct KeypairJson {
    /// Public key, unpadded base-32 (52 characters).
    public_key: String,
    /// Private key seed, unpadded base-32 (52 characters).
    private_key: String,
    /// Iterated-hash identifier derived from the public key (64 hex
    /// characters).
    identifier: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let keypair = match &cli.passphrase {
        Some(passphrase) => {
            let check = if cli.bypass_length_check {
                LengthCheck::Bypass
            } else {
                LengthCheck::Enforce
            };
            deterministic::generate(passphrase, check)
                .context("passphrase derivation failed")?
        }
        None => KeyPair::generate(),
    };

    let public_key = keypair.encoded_public();
    let private_key = keypair.encoded_private();
    let identifier = derive_identifier(&public_key);

    if cli.json {
        let output = KeypairJson {
            public_key,
            private_key,
            identifier,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("=== Veil Identity Keypair ===");
        println!();
        println!("Public Key:  {}", public_key);
        println!("Private Key: {}", private_key);
        println!("Identifier:  {}", identifier);
        println!();
        println!("IMPORTANT: Store your private key securely!");
        println!("           Never share it with anyone.");
        println!("           Anyone with this key can impersonate your node.");
    }

    Ok(())
}
