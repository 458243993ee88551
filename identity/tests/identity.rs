//! Identity & Derivation Tests
//!
//! Pins the full derivation chain against the digests the replaced
//! system produces for its reference seed, and exercises the codec's
//! round-trip and rejection behavior.

#![allow(missing_docs)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use kangaroo_identity::{decode, encode, message_digest, private_key, subseed, DecodeError};

const REFERENCE_SEED: &str = "lcehvbvddggkjfnokduyjuiyvkklrvrmsaozwbvjlzvgvfipqpnkkuf";

const REFERENCE_PUBLIC_KEY: &str =
    "aa873e4cfd37e4bf528a2aa01eecef36547c99caaabd1bbdf7253a65b041771a";

const REFERENCE_IDENTITY: &str =
    "EPYWDREDNLHXOFYVGQUKPHJGOMPBSLDDGZDPKVQUMFXAIQYMZGEHPZTAAWON";

fn reference_public_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    key.copy_from_slice(&hex::decode(REFERENCE_PUBLIC_KEY).unwrap());
    key
}

/// Small deterministic generator so the tests need no RNG dependency.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        self.0
    }

    fn key(&mut self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for chunk in out.chunks_exact_mut(8) {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        out
    }
}

// =============================================================================
// DERIVATION CHAIN
// =============================================================================

#[test]
fn test_reference_subseed() {
    let subseed = subseed(REFERENCE_SEED).unwrap();
    assert_eq!(
        hex::encode(subseed),
        "d3420abb5f3e0527b588b361fa0a513335833af8b4a4aae23a2958195c3209dc"
    );
}

#[test]
fn test_reference_private_key() {
    let subseed = subseed(REFERENCE_SEED).unwrap();
    assert_eq!(
        hex::encode(private_key(&subseed)),
        "11531fcea5e11a4a384e211165ff8bcf458595b32c5374ec76cfa1b1da102238"
    );
}

#[test]
fn test_subseed_is_deterministic() {
    assert_eq!(subseed(REFERENCE_SEED), subseed(REFERENCE_SEED));
}

#[test]
fn test_differing_seeds_differ() {
    let mut other = String::from(REFERENCE_SEED);
    other.replace_range(0..1, "m");
    assert_ne!(subseed(REFERENCE_SEED), subseed(&other));
}

#[test]
fn test_message_digest_matches_hash() {
    assert_eq!(message_digest(&[1u8; 32]), kangaroo::hash(&[1u8; 32]));
}

// =============================================================================
// IDENTITY CODEC
// =============================================================================

#[test]
fn test_reference_identity() {
    assert_eq!(encode(&reference_public_key()), REFERENCE_IDENTITY);
}

#[test]
fn test_reference_identity_decodes() {
    assert_eq!(decode(REFERENCE_IDENTITY), Ok(reference_public_key()));
}

#[test]
fn test_round_trip_random_keys() {
    let mut rng = Lcg(0x5EED_1DEA_F00D_BABE);
    for _ in 0..100 {
        let key = rng.key();
        let identity = encode(&key);
        assert_eq!(identity.len(), 60);
        assert_eq!(decode(&identity), Ok(key), "round trip failed for {identity}");
    }
}

#[test]
fn test_every_single_character_flip_fails() {
    // Exhaustive over the reference identity: replacing any one character
    // with any other letter must be rejected.
    for pos in 0..REFERENCE_IDENTITY.len() {
        for letter in b'A'..=b'Z' {
            if REFERENCE_IDENTITY.as_bytes()[pos] == letter {
                continue;
            }
            let mut flipped = REFERENCE_IDENTITY.as_bytes().to_vec();
            flipped[pos] = letter;
            let flipped = String::from_utf8(flipped).unwrap();
            assert!(
                decode(&flipped).is_err(),
                "flip at {pos} to '{}' was accepted",
                letter as char
            );
        }
    }
}

#[test]
fn test_decode_rejections() {
    assert_eq!(decode(""), Err(DecodeError::Length(0)));
    assert_eq!(
        decode(&REFERENCE_IDENTITY[..59]),
        Err(DecodeError::Length(59))
    );

    let mut digit = String::from(REFERENCE_IDENTITY);
    digit.replace_range(5..6, "5");
    assert_eq!(decode(&digit), Err(DecodeError::InvalidChar(5)));
}
