//! KangarooTwelve Kernel Constants
//!
//! The permutation tables (rotation offsets, lane destinations, round
//! constants) are the published Keccak-p[1600,12] values; the round
//! constants are those of rounds 12..24 of Keccak-f[1600]. Every constant
//! here is pinned by the reference test vectors; none may change without
//! breaking interoperability.

// =============================================================================
// SPONGE GEOMETRY
// =============================================================================

/// Reduced round count of the Keccak-p[1600,12] permutation.
pub const ROUNDS: usize = 12;

/// Number of 64-bit lanes in the 1600-bit state.
pub const LANES: usize = 25;

/// Sponge rate in bytes (1344 bits).
pub const RATE: usize = 168;

/// Sponge capacity in bytes (256 bits); also the chaining-value size.
pub const CAPACITY: usize = 32;

/// Tree chunk size: each leaf absorbs up to this many stream bytes.
pub const CHUNK_SIZE: usize = 8192;

// =============================================================================
// DOMAIN SEPARATION
// =============================================================================

/// Suffix for a message that fits a single node (no tree encoding).
pub const SUFFIX_SINGLE: u8 = 0x07;

/// Suffix for each compressed leaf node.
pub const SUFFIX_LEAF: u8 = 0x0B;

/// Suffix for the final node once tree mode was entered.
pub const SUFFIX_ROOT: u8 = 0x06;

/// Marker absorbed into the final node when entering tree mode,
/// padded to the next 8-byte lane boundary.
pub const TREE_START: [u8; 8] = [0x03, 0, 0, 0, 0, 0, 0, 0];

/// Trailer absorbed after the leaf-count encoding in tree mode.
pub const TREE_END: [u8; 2] = [0xFF, 0xFF];

/// Terminal sponge padding bit, XORed into the last byte of the rate.
pub const PAD_END: u8 = 0x80;

// =============================================================================
// PERMUTATION TABLES
// =============================================================================

/// Rotation offset of each lane in the rho step, indexed `x + 5*y`.
pub const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Destination index of each lane in the pi step: lane `i` moves to
/// `PI[i]` (the map `(x, y) -> (y, 2x + 3y)` flattened as `x + 5*y`).
pub const PI: [usize; LANES] = [
    0, 10, 20, 5, 15, //
    16, 1, 11, 21, 6, //
    7, 17, 2, 12, 22, //
    23, 8, 18, 3, 13, //
    14, 24, 9, 19, 4,
];

/// Round constants XORed into lane 0, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];
