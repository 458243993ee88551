//! Public API Layer

use crate::engine::{dispatcher, tree::TreeHasher};
use crate::types::DIGEST_SIZE;
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the 32-byte digest of `input`.
///
/// # Example
/// ```rust
/// let digest = kangaroo::hash(b"inputText");
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut out = [0u8; DIGEST_SIZE];
    hash_into(input, &mut out);
    out
}

/// Fill `output` with digest bytes of `input`; the output length is the
/// caller's choice (extendable-output function).
#[inline]
pub fn hash_into(input: &[u8], output: &mut [u8]) {
    hash_custom(input, &[], output);
}

/// Extendable-output hash with a customization string.
///
/// Distinct customizations yield independent functions over the same
/// input: `hash_custom(m, b"a", ..) != hash_custom(m, b"b", ..)`.
pub fn hash_custom(input: &[u8], customization: &[u8], output: &mut [u8]) {
    let mut machine = TreeHasher::new();
    machine.update(input);
    machine.finalize_into(customization, output);
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time (timing attack resistant).
///
/// # Example
/// ```rust
/// let digest = kangaroo::hash(b"data");
/// assert!(kangaroo::verify(b"data", &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; DIGEST_SIZE]) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}

// =============================================================================
// FIXED-SIZE FAST PATH
// =============================================================================

/// Compress exactly 64 bytes to 32 bytes through the dispatched kernel.
///
/// Bit-identical to `hash` over the same bytes; used for seed and key
/// derivation chains where both widths are fixed.
#[must_use]
#[inline]
pub fn hash64(input: &[u8; 64]) -> [u8; DIGEST_SIZE] {
    dispatcher::compress64_kernel()(input)
}
