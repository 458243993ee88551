//! Streaming Hasher
//!
//! Incremental front end over the tree-hashing state machine. Memory use
//! is two sponge nodes regardless of input size; large updates feed the
//! parallel leaf path when the `multithread` feature is enabled.

use crate::engine::tree::TreeHasher;
use crate::sponge::Squeezer;
use crate::types::DIGEST_SIZE;

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::{ExtendableOutput, FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming hasher over the chunked tree construction.
///
/// ```rust
/// let mut hasher = kangaroo::Hasher::new();
/// hasher.update(b"input");
/// hasher.update(b"Text");
/// assert_eq!(hasher.finalize(), kangaroo::hash(b"inputText"));
/// ```
#[derive(Clone)]
pub struct KangarooHasher {
    tree: TreeHasher,
    customization: Vec<u8>,
}

impl KangarooHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a new streaming hasher with an empty customization string.
    #[must_use]
    pub fn new() -> Self {
        Self::with_customization(&[])
    }

    /// Create a hasher whose output is domain-separated by
    /// `customization`.
    #[must_use]
    pub fn with_customization(customization: &[u8]) -> Self {
        Self {
            tree: TreeHasher::new(),
            customization: customization.to_vec(),
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add message bytes to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.tree.update(data);
    }

    /// Finalize and return the default 32-byte digest.
    #[must_use]
    pub fn finalize(self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        self.finalize_into(&mut out);
        out
    }

    /// Finalize into a caller-sized output buffer (extendable output).
    pub fn finalize_into(self, output: &mut [u8]) {
        self.tree.finalize_into(&self.customization, output);
    }

    /// Finalize into an incremental output reader.
    #[must_use]
    pub fn finalize_xof(self) -> Squeezer {
        self.tree.into_squeezer(&self.customization)
    }

    /// Reset for reuse, keeping the customization string.
    pub fn reset(&mut self) {
        self.tree.reset();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for KangarooHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for KangarooHasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for KangarooHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for KangarooHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl ExtendableOutput for KangarooHasher {
    type Reader = Squeezer;

    fn finalize_xof(self) -> Self::Reader {
        self.finalize_xof()
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for KangarooHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for KangarooHasher {}
