#![cfg_attr(not(feature = "std"), no_std)]

//! # Kangaroo
//!
//! KangarooTwelve extendable-output hash: a Keccak-p[1600,12] sponge
//! (rate 168, capacity 32) with 8192-byte tree chunking and an AVX-512
//! fast path for the fixed 64-byte compression.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = kangaroo::hash(b"inputText");
//!
//! // 2. Extendable output
//! let mut long = [0u8; 64];
//! kangaroo::hash_into(b"inputText", &mut long);
//!
//! // 3. Streaming (big data / files)
//! use kangaroo::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"input");
//! hasher.update(b"Text");
//! assert_eq!(hasher.finalize(), digest);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/example use only
mod oneshot;
#[doc(hidden)]
pub mod sponge; // Public for test/example use only
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use oneshot::{hash, hash64, hash_custom, hash_into, verify};
pub use sponge::Squeezer;
pub use streaming::KangarooHasher as Hasher;
pub use types::DIGEST_SIZE;

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
