//! Permutation Kernels
//!
//! Contains the portable Keccak-p[1600,12] implementation and the
//! hardware-specific fast path for the fixed 64-byte compression.

#[cfg(target_arch = "x86_64")]
pub mod avx512;
pub mod constants;
pub mod portable;
