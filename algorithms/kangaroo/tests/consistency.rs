//! Consistency & Regression Tests
//!
//! Verifies internal logic consistency and architectural invariants:
//! - Streaming vs one-shot equality across arbitrary update splits
//! - Output length exactness for the extendable-output path
//! - Incremental squeezer vs single-call output
//! - Determinism and reset behavior

#![allow(missing_docs)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use kangaroo::{hash, hash_into, verify, Hasher};

fn ptn(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
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
}

// =============================================================================
// STREAMING CONSISTENCY
// =============================================================================

#[test]
fn test_streaming_consistency() {
    // One-shot and streaming must agree at every structural boundary:
    // rate edges, chunk edges, and deep into tree mode.
    let sizes = [
        0,
        1,
        63,
        64,
        167,   // one byte short of the rate
        168,   // exactly the rate
        169,
        4096,
        8191,  // one byte short of a chunk
        8192,  // exactly one chunk
        8193,
        16384, // two chunks
        100_000,
    ];

    for &size in &sizes {
        let input = ptn(size);
        let h_oneshot = hash(&input);

        let mut hasher = Hasher::new();
        hasher.update(&input);
        assert_eq!(
            h_oneshot,
            hasher.finalize(),
            "one-shot vs single-update mismatch at size {size}"
        );

        let mut hasher = Hasher::new();
        for chunk in input.chunks(257) {
            hasher.update(chunk);
        }
        assert_eq!(
            h_oneshot,
            hasher.finalize(),
            "one-shot vs chunked-update mismatch at size {size}"
        );
    }
}

#[test]
fn test_streaming_random_splits() {
    let input = ptn(50_000);
    let expected = hash(&input);
    let mut rng = Lcg(0xDEAD_BEEF_CAFE_BABE);

    for round in 0..20 {
        let mut hasher = Hasher::new();
        let mut offset = 0;
        while offset < input.len() {
            let take = ((rng.next_u64() % 9000) as usize + 1).min(input.len() - offset);
            hasher.update(&input[offset..offset + take]);
            offset += take;
        }
        assert_eq!(expected, hasher.finalize(), "split round {round}");
    }
}

#[test]
fn test_byte_at_a_time() {
    let input = ptn(600);
    let mut hasher = Hasher::new();
    for &byte in &input {
        hasher.update(&[byte]);
    }
    assert_eq!(hash(&input), hasher.finalize());
}

// =============================================================================
// OUTPUT LENGTH
// =============================================================================

#[test]
fn test_output_length_exactness() {
    // Every requested length is honored exactly, below and beyond the rate.
    for len in [0, 1, 31, 32, 33, 64, 167, 168, 169, 500] {
        let mut out = vec![0u8; len];
        hash_into(b"length probe", &mut out);
        assert_eq!(out.len(), len);
        if len >= 32 {
            // prefix property: shorter outputs are truncations
            assert_eq!(out[..32], hash(b"length probe"));
        }
    }
}

#[test]
fn test_squeezer_matches_hash_into() {
    let mut expected = vec![0u8; 1000];
    hash_into(b"xof stream", &mut expected);

    let mut hasher = Hasher::new();
    hasher.update(b"xof stream");
    let mut reader = hasher.finalize_xof();
    let mut streamed = vec![0u8; 1000];
    for chunk in streamed.chunks_mut(37) {
        reader.squeeze(chunk);
    }
    assert_eq!(expected, streamed);
}

// =============================================================================
// DETERMINISM & VERIFICATION
// =============================================================================

#[test]
fn test_determinism() {
    let input = ptn(10_000);
    assert_eq!(hash(&input), hash(&input));
}

#[test]
fn test_verify() {
    let digest = hash(b"Secure Data");
    assert!(verify(b"Secure Data", &digest));
    assert!(!verify(b"Secure Dat4", &digest));
}

#[test]
fn test_reset_restores_fresh_state() {
    let mut hasher = Hasher::new();
    hasher.update(&ptn(20_000));
    hasher.reset();
    hasher.update(b"inputText");
    assert_eq!(hasher.finalize(), hash(b"inputText"));
}

#[test]
fn test_default_matches_new() {
    let mut a = Hasher::default();
    let mut b = Hasher::new();
    a.update(b"x");
    b.update(b"x");
    assert_eq!(a.finalize(), b.finalize());
}

#[test]
fn test_clone_preserves_state() {
    let mut hasher = Hasher::new();
    hasher.update(&ptn(9000));
    let fork = hasher.clone();
    hasher.update(b"tail");
    let mut forked = fork;
    forked.update(b"tail");
    assert_eq!(hasher.finalize(), forked.finalize());
}
