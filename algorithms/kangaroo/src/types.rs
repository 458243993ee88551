//! Shared types used across the library.

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Fixed-size compression kernel signature: 64 input bytes in, 32 digest
/// bytes out.
///
/// The AVX-512 backend and the portable fallback implement this same
/// signature so the dispatcher can swap them at startup.
pub type Compress64Fn = fn(&[u8; 64]) -> [u8; 32];

/// Default digest size in bytes (the sponge capacity).
pub const DIGEST_SIZE: usize = crate::kernels::constants::CAPACITY;
