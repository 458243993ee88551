//! Tree-Hashing State Machine
//!
//! Splits the padded input stream into 8192-byte chunks. The first chunk
//! is absorbed straight into the final node; every later chunk fills a
//! fresh queue node that is compressed to a 32-byte chaining value and
//! folded back into the final node. Compression is lazy (a full queue
//! node is only compressed once a further stream byte arrives), so the
//! pending node at finalization always holds between 1 and 8192 bytes.

use crate::kernels::constants::{
    CHUNK_SIZE, SUFFIX_LEAF, SUFFIX_ROOT, SUFFIX_SINGLE, TREE_END, TREE_START,
};
use crate::sponge::{Sponge, Squeezer};

// the multithread feature implies std
#[cfg(feature = "multithread")]
use std::vec::Vec;

// =============================================================================
// TREE HASHER
// =============================================================================

/// Incremental tree constructor over the raw byte stream.
///
/// Callers feed message bytes through [`TreeHasher::update`]; the
/// customization trailer is appended by the finalization wrappers before
/// the machine is consumed.
#[derive(Clone)]
pub struct TreeHasher {
    root: Sponge,
    leaf: Sponge,
    filled: usize,
    leaves: u64,
    tree: bool,
}

impl TreeHasher {
    /// Create an empty machine (direct mode, nothing absorbed).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Sponge::new(),
            leaf: Sponge::new(),
            filled: 0,
            leaves: 0,
            tree: false,
        }
    }

    /// Absorb stream bytes, entering tree mode and compressing completed
    /// leaves as the chunk grid fills.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if !self.tree {
                let take = (CHUNK_SIZE - self.filled).min(data.len());
                self.root.absorb(&data[..take]);
                self.filled += take;
                data = &data[take..];
                if !data.is_empty() && self.filled == CHUNK_SIZE {
                    self.root.absorb(&TREE_START);
                    self.tree = true;
                    self.filled = 0;
                }
                continue;
            }

            if self.filled == CHUNK_SIZE {
                // lazy compression: a further byte exists, so the pending
                // leaf is complete
                let full = core::mem::replace(&mut self.leaf, Sponge::new());
                self.fold_chaining_value(full.finalize_cv(SUFFIX_LEAF));
                self.filled = 0;
            }

            #[cfg(feature = "multithread")]
            if self.filled == 0 && data.len() > CHUNK_SIZE {
                data = self.compress_run(data);
                continue;
            }

            let take = (CHUNK_SIZE - self.filled).min(data.len());
            self.leaf.absorb(&data[..take]);
            self.filled += take;
            data = &data[take..];
        }
    }

    /// Finalize into `output`, any length. The customization string and
    /// its length encoding are appended to the stream before the machine
    /// is consumed.
    pub fn finalize_into(self, customization: &[u8], output: &mut [u8]) {
        self.into_squeezer(customization).squeeze(output);
    }

    /// Finalize into an incremental squeezer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn into_squeezer(mut self, customization: &[u8]) -> Squeezer {
        self.update(customization);
        let (trailer, trailer_len) = length_encode(customization.len() as u64);
        self.update(&trailer[..trailer_len]);
        if self.tree {
            let Self {
                mut root,
                leaf,
                leaves,
                ..
            } = self;
            root.absorb(&leaf.finalize_cv(SUFFIX_LEAF));
            let (encoding, len) = length_encode(leaves + 1);
            root.absorb(&encoding[..len]);
            root.absorb(&TREE_END);
            root.into_squeezer(SUFFIX_ROOT)
        } else {
            self.root.into_squeezer(SUFFIX_SINGLE)
        }
    }

    /// Drop all absorbed state, returning to the fresh direct mode.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn fold_chaining_value(&mut self, cv: [u8; 32]) {
        self.root.absorb(&cv);
        self.leaves += 1;
    }

    /// Compress a run of complete chunks in one go, leaving at least one
    /// byte for the next pending leaf so lazy semantics are preserved.
    /// Leaves are independent, so Rayon fans them out; chaining values
    /// are folded in order, keeping the output bit-identical to the
    /// serial path.
    #[cfg(feature = "multithread")]
    fn compress_run<'a>(&mut self, data: &'a [u8]) -> &'a [u8] {
        use rayon::prelude::*;

        let complete = (data.len() - 1) / CHUNK_SIZE;
        let body = &data[..complete * CHUNK_SIZE];
        let cvs: Vec<[u8; 32]> = body
            .par_chunks(CHUNK_SIZE)
            .map(|chunk| {
                let mut node = Sponge::new();
                node.absorb(chunk);
                node.finalize_cv(SUFFIX_LEAF)
            })
            .collect();
        for cv in cvs {
            self.fold_chaining_value(cv);
        }
        &data[complete * CHUNK_SIZE..]
    }
}

impl Default for TreeHasher {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// LENGTH ENCODING
// =============================================================================

/// Minimal big-endian encoding of `n` followed by one byte giving the
/// encoded width (zero encodes as the single width byte `0x00`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn length_encode(n: u64) -> ([u8; 9], usize) {
    let width = 8 - n.leading_zeros() as usize / 8;
    let mut out = [0u8; 9];
    for (i, slot) in out.iter_mut().take(width).enumerate() {
        *slot = (n >> ((width - 1 - i) * 8)) as u8;
    }
    out[width] = width as u8;
    (out, width + 1)
}

// =============================================================================
// TESTS
// =============================================================================
