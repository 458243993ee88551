//! Tests for the `digest` trait integration.
//!
//! Verifies that `Hasher` works in generic contexts over the RustCrypto
//! `Digest` and `ExtendableOutput` traits.

#![cfg(feature = "digest-trait")]
#![allow(missing_docs)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use kangaroo::digest::{Digest, ExtendableOutput, XofReader};
use kangaroo::Hasher;

fn hash_generic<D: Digest>(input: &[u8]) -> Vec<u8> {
    let mut h = D::new();
    h.update(input);
    h.finalize().to_vec()
}

#[test]
fn test_digest_trait_usage() {
    // 1. Standard usage (direct)
    let mut hasher = Hasher::new();
    hasher.update(b"test");
    let res1 = hasher.finalize();

    // 2. Generic usage (via trait)
    let res2 = hash_generic::<Hasher>(b"test");
    assert_eq!(res1, res2.as_slice());

    // 3. Must agree with the one-shot API
    assert_eq!(res1, kangaroo::hash(b"test"));
}

#[test]
fn test_extendable_output_trait() {
    let mut hasher = Hasher::new();
    kangaroo::digest::Update::update(&mut hasher, b"xof");
    let mut reader = ExtendableOutput::finalize_xof(hasher);

    let mut out = [0u8; 96];
    reader.read(&mut out);

    let mut expected = [0u8; 96];
    kangaroo::hash_into(b"xof", &mut expected);
    assert_eq!(out, expected);
}
