//! Hardware Dispatcher
//!
//! Selects the fixed-size compression backend (AVX-512 or portable) for
//! the current CPU. The choice is a pure performance decision: both
//! backends are bit-identical, so it never changes observable output.

use crate::kernels;
use crate::types::Compress64Fn;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest fixed 64-to-32 compression kernel for this CPU.
#[must_use]
pub fn compress64_kernel() -> Compress64Fn {
    // 1. Runtime Dispatch (Std-only)
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx512f") {
            return safe_avx512_compress64;
        }
    }

    // 2. Compile-Time Dispatch (no_std)
    #[cfg(all(not(feature = "std"), target_arch = "x86_64", target_feature = "avx512f"))]
    {
        return safe_avx512_compress64;
    }

    // 3. Portable Fallback
    kernels::portable::compress64
}

/// Returns the name of the active hardware backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    #[cfg(all(feature = "std", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx512f") {
            return "AVX-512";
        }
    }
    "Portable"
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AVX-512 wrapper for the fixed 64-byte compression.
#[inline]
#[allow(unsafe_code)]
#[allow(dead_code)]
fn safe_avx512_compress64(input: &[u8; 64]) -> [u8; 32] {
    #[cfg(target_arch = "x86_64")]
    // SAFETY: Only reachable after CPUID validation (AVX-512F), either at
    // runtime via feature detection or at compile time via target_feature.
    unsafe {
        kernels::avx512::compress64(input)
    }
    #[cfg(not(target_arch = "x86_64"))]
    unreachable!("CPUID escape");
}
