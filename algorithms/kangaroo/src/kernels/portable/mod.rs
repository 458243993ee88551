//! Portable implementation of the Keccak-p[1600,12] permutation.
//!
//! Fully self-contained and endianness-independent: the state is an array
//! of 25 lanes and every byte-level boundary goes through explicit
//! little-endian conversion. Produces byte-identical results to the
//! AVX-512 fast path.

use crate::kernels::constants::{LANES, PI, RHO, ROUND_CONSTANTS, SUFFIX_SINGLE};

// =============================================================================
// PERMUTATION
// =============================================================================

/// Apply the 12-round Keccak-p[1600,12] permutation in place.
///
/// Lane `i` holds bits `64*i .. 64*(i+1)` of the 1600-bit state in
/// little-endian order, addressed as `x + 5*y` on the 5x5 lane grid.
#[allow(clippy::needless_range_loop)]
pub fn permute(lanes: &mut [u64; LANES]) {
    for &rc in &ROUND_CONSTANTS {
        // theta: column parity folded back with a single-bit rotation
        let mut parity = [0u64; 5];
        for x in 0..5 {
            parity[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                lanes[x + 5 * y] ^= d;
            }
        }

        // rho + pi: rotate each lane, then move it to its destination
        let mut moved = [0u64; LANES];
        for i in 0..LANES {
            moved[PI[i]] = lanes[i].rotate_left(RHO[i]);
        }

        // chi: the only nonlinear step, row by row
        for y in 0..5 {
            let row = y * 5;
            for x in 0..5 {
                lanes[row + x] =
                    moved[row + x] ^ (!moved[row + (x + 1) % 5] & moved[row + (x + 2) % 5]);
            }
        }

        // iota
        lanes[0] ^= rc;
    }
}

// =============================================================================
// FIXED-SIZE FAST PATH
// =============================================================================

/// Compress exactly 64 input bytes to 32 output bytes.
///
/// Specialized single-node hash of a 64-byte message with empty
/// customization: the one-byte length trailer lands at state byte 64, the
/// single-node suffix follows at byte 65, the terminal padding bit sits at
/// rate byte 167, and one permutation produces the digest. Bit-identical
/// to the general absorb/permute/squeeze sequence over the same message.
pub fn compress64(input: &[u8; 64]) -> [u8; 32] {
    let mut lanes = [0u64; LANES];
    for (i, lane) in lanes.iter_mut().take(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(&input[i * 8..i * 8 + 8]);
        *lane = u64::from_le_bytes(word);
    }
    // byte 64 is the zero length trailer, byte 65 the suffix
    lanes[8] ^= u64::from(SUFFIX_SINGLE) << 8;
    // padding bit at byte 167, the top byte of lane 20
    lanes[20] ^= 1u64 << 63;

    permute(&mut lanes);

    let mut out = [0u8; 32];
    for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&lanes[i].to_le_bytes());
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
