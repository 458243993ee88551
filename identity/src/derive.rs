//! Key Derivation
//!
//! The derivation chain of the identity scheme: a 55-letter seed hashes
//! to a 32-byte subseed, the subseed hashes to the private key, and the
//! external signature scheme consumes a 64-byte expansion of the
//! subseed. Every step is a plain hash invocation: deterministic, no
//! secret-dependent branching beyond input validation.

use core::fmt;
use std::error;

/// Seed length in characters.
pub const SEED_LEN: usize = 55;

// =============================================================================
// ERRORS
// =============================================================================

/// Error for a rejected seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// The seed is not exactly [`SEED_LEN`] characters long.
    Length(usize),
    /// A character outside `'a'..='z'` at the given position.
    InvalidChar(usize),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(got) => {
                write!(f, "seed must be {SEED_LEN} characters, got {got}")
            }
            Self::InvalidChar(pos) => {
                write!(f, "seed character at position {pos} is not in 'a'..='z'")
            }
        }
    }
}

impl error::Error for SeedError {}

// =============================================================================
// DERIVATION CHAIN
// =============================================================================

/// Derive the 32-byte subseed from a 55-letter seed.
///
/// Each character must lie in `'a'..='z'` and maps to its alphabet index
/// (0..=25); the resulting 55-byte buffer is hashed.
///
/// # Errors
/// [`SeedError::Length`] for a wrong-sized seed, [`SeedError::InvalidChar`]
/// for any character outside the lowercase alphabet.
pub fn subseed(seed: &str) -> Result<[u8; 32], SeedError> {
    let raw = seed.as_bytes();
    if raw.len() != SEED_LEN {
        return Err(SeedError::Length(raw.len()));
    }
    let mut digits = [0u8; SEED_LEN];
    for (pos, &letter) in raw.iter().enumerate() {
        if !letter.is_ascii_lowercase() {
            return Err(SeedError::InvalidChar(pos));
        }
        digits[pos] = letter - b'a';
    }
    Ok(kangaroo::hash(&digits))
}

/// Derive the private key from a subseed.
#[must_use]
pub fn private_key(subseed: &[u8; 32]) -> [u8; 32] {
    kangaroo::hash(subseed)
}

/// Expand a subseed to the 64 bytes the signature scheme consumes.
#[must_use]
pub fn expand_key(subseed: &[u8; 32]) -> [u8; 64] {
    let mut out = [0u8; 64];
    kangaroo::hash_into(subseed, &mut out);
    out
}

/// Pre-digest a message for signing.
#[must_use]
pub fn message_digest(message: &[u8]) -> [u8; 32] {
    kangaroo::hash(message)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::pedantic)]
mod tests {
    use super::{subseed, SeedError, SEED_LEN};

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(subseed("short"), Err(SeedError::Length(5)));
        let long = "a".repeat(SEED_LEN + 1);
        assert_eq!(subseed(&long), Err(SeedError::Length(SEED_LEN + 1)));
    }

    #[test]
    fn rejects_non_lowercase() {
        let mut seed = "a".repeat(SEED_LEN);
        seed.replace_range(10..11, "A");
        assert_eq!(subseed(&seed), Err(SeedError::InvalidChar(10)));

        let mut seed = "a".repeat(SEED_LEN);
        seed.replace_range(54..55, "7");
        assert_eq!(subseed(&seed), Err(SeedError::InvalidChar(54)));
    }

    #[test]
    fn accepts_full_alphabet() {
        let seed: String = ('a'..='z').cycle().take(SEED_LEN).collect();
        assert!(subseed(&seed).is_ok());
    }
}
