//! # Kangaroo Identity
//!
//! Seed handling, hash-based key derivation and the base-26 identity
//! codec built on the `kangaroo` engine. Elliptic-curve arithmetic is
//! deliberately absent: public keys arrive as opaque 32-byte values and
//! the signature scheme itself lives in an external module that consumes
//! the derivation helpers exported here.

// =============================================================================
// MODULES
// =============================================================================

mod codec;
mod derive;

// =============================================================================
// EXPORTS
// =============================================================================

pub use codec::{decode, encode, DecodeError, IDENTITY_LEN, PUBLIC_KEY_LEN};
pub use derive::{expand_key, message_digest, private_key, subseed, SeedError, SEED_LEN};
