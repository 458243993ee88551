//! AVX-512 fast path for the fixed 64-byte compression.
//!
//! The state lives in five ZMM registers, one 5x5 row per register with
//! the three upper lanes unused. Only the 64-byte-input/32-byte-output
//! single-node case is implemented here; the general sponge always runs
//! on the portable kernel. Both paths are bit-identical, verified by the
//! cross-backend tests.

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_wrap)]

use crate::kernels::constants::{RHO, ROUND_CONSTANTS, SUFFIX_SINGLE};

use core::arch::x86_64::{
    _mm512_loadu_si512, _mm512_mask_mov_epi64, _mm512_mask_storeu_epi64, _mm512_maskz_loadu_epi64,
    _mm512_permutexvar_epi64, _mm512_rol_epi64, _mm512_rolv_epi64, _mm512_set1_epi64,
    _mm512_set_epi64, _mm512_setzero_si512, _mm512_ternarylogic_epi64, _mm512_xor_si512, __m512i,
};

// =============================================================================
// FIXED-SIZE FAST PATH
// =============================================================================

/// Compress exactly 64 input bytes to 32 output bytes.
///
/// Builds the single-node state directly in registers (message lanes,
/// length trailer, suffix, terminal padding bit), runs the 12 rounds and
/// stores the first four lanes.
///
/// # Safety
/// Requires AVX-512F, enforced by the dispatcher via CPUID before this
/// function is ever selected. Masked loads/stores touch only the active
/// lanes, so all memory accesses stay inside the 64/32-byte arrays.
#[target_feature(enable = "avx512f")]
pub unsafe fn compress64(input: &[u8; 64]) -> [u8; 32] {
    // Cyclic element shifts over the low five lanes; the upper three
    // elements map onto themselves and never feed back into the grid.
    let left1 = _mm512_set_epi64(7, 6, 5, 3, 2, 1, 0, 4); // x -> (x+4)%5
    let right1 = _mm512_set_epi64(7, 6, 5, 0, 4, 3, 2, 1); // x -> (x+1)%5
    let right2 = _mm512_set_epi64(7, 6, 5, 1, 0, 4, 3, 2); // x -> (x+2)%5

    // Per-row rotation counts for the rho step.
    let mut rho_rows = [[0i64; 8]; 5];
    for (y, row) in rho_rows.iter_mut().enumerate() {
        for (x, slot) in row.iter_mut().take(5).enumerate() {
            *slot = i64::from(RHO[x + 5 * y]);
        }
    }

    // Row y element x = lane x + 5y. Message lanes fill rows 0 and 1;
    // the zero length trailer sits at state byte 64, the single-node
    // suffix at byte 65 (lane 8), the padding bit at byte 167 (lane 20).
    let mut rows: [__m512i; 5] = [
        _mm512_maskz_loadu_epi64(0x1F, input.as_ptr().cast()),
        _mm512_xor_si512(
            _mm512_maskz_loadu_epi64(0x07, input.as_ptr().add(40).cast()),
            _mm512_set_epi64(0, 0, 0, 0, i64::from(SUFFIX_SINGLE) << 8, 0, 0, 0),
        ),
        _mm512_setzero_si512(),
        _mm512_setzero_si512(),
        _mm512_set_epi64(0, 0, 0, 0, 0, 0, 0, i64::MIN),
    ];

    for &rc in &ROUND_CONSTANTS {
        // theta
        let c = _mm512_xor_si512(
            _mm512_xor_si512(
                _mm512_xor_si512(rows[0], rows[1]),
                _mm512_xor_si512(rows[2], rows[3]),
            ),
            rows[4],
        );
        let d = _mm512_xor_si512(
            _mm512_permutexvar_epi64(left1, c),
            _mm512_rol_epi64::<1>(_mm512_permutexvar_epi64(right1, c)),
        );
        for row in &mut rows {
            *row = _mm512_xor_si512(*row, d);
        }

        // rho
        for (y, row) in rows.iter_mut().enumerate() {
            *row = _mm512_rolv_epi64(*row, _mm512_loadu_si512(rho_rows[y].as_ptr().cast()));
        }

        // pi: output row y element x takes input row x element (x+3y)%5
        let src = rows;
        for (y, row) in rows.iter_mut().enumerate() {
            let mut acc = _mm512_setzero_si512();
            for (x, from) in src.iter().enumerate() {
                let elem =
                    _mm512_permutexvar_epi64(_mm512_set1_epi64(((x + 3 * y) % 5) as i64), *from);
                acc = _mm512_mask_mov_epi64(acc, 1 << x, elem);
            }
            *row = acc;
        }

        // chi: a ^ (!b & c) as one ternary-logic op (truth table 0xD2)
        for row in &mut rows {
            let b1 = _mm512_permutexvar_epi64(right1, *row);
            let b2 = _mm512_permutexvar_epi64(right2, *row);
            *row = _mm512_ternarylogic_epi64::<0xD2>(*row, b1, b2);
        }

        // iota
        rows[0] = _mm512_xor_si512(rows[0], _mm512_set_epi64(0, 0, 0, 0, 0, 0, 0, rc as i64));
    }

    let mut out = [0u8; 32];
    _mm512_mask_storeu_epi64(out.as_mut_ptr().cast(), 0x0F, rows[0]);
    out
}
