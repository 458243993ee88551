//! Identity Codec
//!
//! A 32-byte public key renders as 60 uppercase letters: four 64-bit
//! little-endian fragments of 14 base-26 digits each (least significant
//! digit first), followed by four checksum digits taken from the low 18
//! bits of the key's 3-byte digest.

use core::fmt;
use std::error;

/// Public key size in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Identity length in characters, checksum included.
pub const IDENTITY_LEN: usize = 60;

/// Characters covered by the key fragments (the rest is checksum).
const KEY_CHARS: usize = 56;

/// Base-26 digits per 64-bit key fragment.
const DIGITS_PER_FRAGMENT: usize = 14;

/// The checksum keeps the low 18 bits of the key digest.
const CHECKSUM_MASK: u32 = 0x3_FFFF;

// =============================================================================
// ERRORS
// =============================================================================

/// Error for a rejected identity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The identity is not exactly [`IDENTITY_LEN`] characters long.
    Length(usize),
    /// A character outside `'A'..='Z'` in the key region.
    InvalidChar(usize),
    /// The trailing checksum characters do not match the key digest.
    ChecksumMismatch,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(got) => {
                write!(f, "identity must be {IDENTITY_LEN} characters, got {got}")
            }
            Self::InvalidChar(pos) => {
                write!(f, "identity character at position {pos} is not in 'A'..='Z'")
            }
            Self::ChecksumMismatch => write!(f, "identity checksum mismatch"),
        }
    }
}

impl error::Error for DecodeError {}

// =============================================================================
// ENCODING
// =============================================================================

/// Encode a public key as a 60-character identity.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(public_key: &[u8; PUBLIC_KEY_LEN]) -> String {
    let mut identity = [0u8; IDENTITY_LEN];
    for (i, chunk) in public_key.chunks_exact(8).enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        let mut fragment = u64::from_le_bytes(word);
        for slot in &mut identity[i * DIGITS_PER_FRAGMENT..(i + 1) * DIGITS_PER_FRAGMENT] {
            *slot = (fragment % 26) as u8 + b'A';
            fragment /= 26;
        }
    }

    let mut checksum = checksum(public_key);
    for slot in &mut identity[KEY_CHARS..] {
        *slot = (checksum % 26) as u8 + b'A';
        checksum /= 26;
    }

    // all characters are ASCII uppercase by construction
    String::from_utf8_lossy(&identity).into_owned()
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode an identity back to its public key.
///
/// Fragment accumulation wraps modulo 2^64; strings that are not a
/// canonical encoding of any key are caught by the checksum comparison.
///
/// # Errors
/// [`DecodeError::Length`] for a wrong-sized string,
/// [`DecodeError::InvalidChar`] for anything outside `'A'..='Z'` in the
/// key region, [`DecodeError::ChecksumMismatch`] when the trailing four
/// characters disagree with the recomputed key digest.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(identity: &str) -> Result<[u8; PUBLIC_KEY_LEN], DecodeError> {
    let raw = identity.as_bytes();
    if raw.len() != IDENTITY_LEN {
        return Err(DecodeError::Length(raw.len()));
    }

    let mut public_key = [0u8; PUBLIC_KEY_LEN];
    for (i, chunk) in public_key.chunks_exact_mut(8).enumerate() {
        let mut fragment = 0u64;
        for j in (0..DIGITS_PER_FRAGMENT).rev() {
            let pos = i * DIGITS_PER_FRAGMENT + j;
            if !raw[pos].is_ascii_uppercase() {
                return Err(DecodeError::InvalidChar(pos));
            }
            fragment = fragment
                .wrapping_mul(26)
                .wrapping_add(u64::from(raw[pos] - b'A'));
        }
        chunk.copy_from_slice(&fragment.to_le_bytes());
    }

    let mut expected = checksum(&public_key);
    for &given in &raw[KEY_CHARS..] {
        if (expected % 26) as u8 + b'A' != given {
            return Err(DecodeError::ChecksumMismatch);
        }
        expected /= 26;
    }

    Ok(public_key)
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Low 18 bits of the 3-byte key digest, little-endian.
fn checksum(public_key: &[u8; PUBLIC_KEY_LEN]) -> u32 {
    let mut digest = [0u8; 3];
    kangaroo::hash_into(public_key, &mut digest);
    let bits =
        u32::from(digest[0]) | u32::from(digest[1]) << 8 | u32::from(digest[2]) << 16;
    bits & CHECKSUM_MASK
}

// =============================================================================
// TESTS
// =============================================================================
