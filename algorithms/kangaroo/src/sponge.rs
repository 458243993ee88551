//! Absorption Engine
//!
//! An owned sponge node: 200-byte state as 25 little-endian lanes plus a
//! byte cursor into the 168-byte rate window. Nodes are created zeroed,
//! mutated only by absorption, and consumed exactly once by
//! finalize/squeeze; reuse after squeezing is ruled out by move
//! semantics.

use crate::kernels::constants::{CAPACITY, LANES, PAD_END, RATE};
use crate::kernels::portable;

// =============================================================================
// SPONGE NODE
// =============================================================================

/// A single sponge node: permutation state plus rate cursor.
#[derive(Clone)]
pub struct Sponge {
    lanes: [u64; LANES],
    cursor: usize,
}

impl Sponge {
    /// Create a zeroed node with the cursor at the start of the rate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lanes: [0; LANES],
            cursor: 0,
        }
    }

    /// XOR `data` into the state at the cursor, permuting at every rate
    /// boundary. Unaligned cursors are handled byte-by-byte; whole lanes
    /// are folded in one XOR once the cursor is lane-aligned.
    pub fn absorb(&mut self, mut data: &[u8]) {
        while self.cursor % 8 != 0 && !data.is_empty() {
            self.xor_byte(self.cursor, data[0]);
            self.cursor += 1;
            data = &data[1..];
            if self.cursor == RATE {
                self.run_permutation();
            }
        }
        while data.len() >= 8 {
            let mut word = [0u8; 8];
            word.copy_from_slice(&data[..8]);
            self.lanes[self.cursor / 8] ^= u64::from_le_bytes(word);
            self.cursor += 8;
            data = &data[8..];
            if self.cursor == RATE {
                self.run_permutation();
            }
        }
        for &byte in data {
            self.xor_byte(self.cursor, byte);
            self.cursor += 1;
            if self.cursor == RATE {
                self.run_permutation();
            }
        }
    }

    /// Append the domain suffix and padding bit, permute once, and copy
    /// the requested number of output bytes (any length; outputs beyond
    /// the rate squeeze additional permutation cycles).
    pub fn finalize_into(self, suffix: u8, output: &mut [u8]) {
        self.into_squeezer(suffix).squeeze(output);
    }

    /// Finalize to a chaining value: the capacity-sized state prefix.
    #[must_use]
    pub fn finalize_cv(self, suffix: u8) -> [u8; CAPACITY] {
        let mut cv = [0u8; CAPACITY];
        self.finalize_into(suffix, &mut cv);
        cv
    }

    /// Consume the node into an incremental squeezer.
    #[must_use]
    pub fn into_squeezer(mut self, suffix: u8) -> Squeezer {
        self.xor_byte(self.cursor, suffix);
        self.xor_byte(RATE - 1, PAD_END);
        portable::permute(&mut self.lanes);
        Squeezer {
            lanes: self.lanes,
            offset: 0,
        }
    }

    fn xor_byte(&mut self, position: usize, byte: u8) {
        self.lanes[position / 8] ^= u64::from(byte) << ((position % 8) * 8);
    }

    fn run_permutation(&mut self) {
        portable::permute(&mut self.lanes);
        self.cursor = 0;
    }
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SQUEEZER
// =============================================================================

/// Incremental output reader over a finalized node.
///
/// Reads are little-endian lane bytes; a fresh permutation cycle runs
/// each time the rate window is exhausted.
#[derive(Clone)]
pub struct Squeezer {
    lanes: [u64; LANES],
    offset: usize,
}

impl Squeezer {
    /// Fill `output` with the next output bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn squeeze(&mut self, output: &mut [u8]) {
        let mut written = 0;
        while written < output.len() {
            if self.offset == RATE {
                portable::permute(&mut self.lanes);
                self.offset = 0;
            }
            let take = (output.len() - written).min(RATE - self.offset);
            for slot in &mut output[written..written + take] {
                *slot = (self.lanes[self.offset / 8] >> ((self.offset % 8) * 8)) as u8;
                self.offset += 1;
            }
            written += take;
        }
    }
}

#[cfg(feature = "digest-trait")]
impl digest::XofReader for Squeezer {
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeeze(buffer);
    }
}

// =============================================================================
// TESTS
// =============================================================================
