//! Key & Identity Commands
//!
//! Seed derivation and the base-26 identity codec. Elliptic-curve key
//! generation is out of scope here: `encode` expects the 32-byte public
//! key produced by the external signature module.

use anyhow::{Context, Result};
use kangaroo_identity as identity;

// =============================================================================
// DERIVATION
// =============================================================================

/// Print the subseed and private key derived from a 55-letter seed.
pub fn derive_keys(seed: &str) -> Result<()> {
    let subseed = identity::subseed(seed)?;
    let private_key = identity::private_key(&subseed);

    println!("subseed      {}", hex::encode(subseed));
    println!("private-key  {}", hex::encode(private_key));
    Ok(())
}

// =============================================================================
// IDENTITY CODEC
// =============================================================================

/// Encode a hex public key as a 60-character identity.
pub fn encode_identity(public_key_hex: &str) -> Result<()> {
    let bytes = hex::decode(public_key_hex).context("public key is not valid hex")?;
    let public_key: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow::anyhow!("public key must be exactly 32 bytes"))?;

    println!("{}", identity::encode(&public_key));
    Ok(())
}

/// Decode a 60-character identity and print the public key as hex.
pub fn decode_identity(identity_str: &str) -> Result<()> {
    let public_key = identity::decode(identity_str)?;
    println!("{}", hex::encode(public_key));
    Ok(())
}
