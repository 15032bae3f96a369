/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::interlaced_yuy2::InterlacedRowPlan;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Writes as many whole blocks of 16 chroma columns as fit into `width`,
/// returns the first unprocessed chroma column.
#[allow(clippy::too_many_arguments)]
pub(crate) fn sse_interlaced_yuv420_to_yuyv422_row(
    y_src: &[u8],
    u_first: &[u8],
    u_second: &[u8],
    v_first: &[u8],
    v_second: &[u8],
    taps: InterlacedRowPlan,
    dst: &mut [u8],
    width: usize,
) -> usize {
    let pairs = width / 2;
    assert!(y_src.len() >= pairs * 2 && dst.len() >= pairs * 4);
    assert!(u_first.len() >= pairs && u_second.len() >= pairs);
    assert!(v_first.len() >= pairs && v_second.len() >= pairs);
    unsafe {
        sse_interlaced_row_impl(
            y_src, u_first, u_second, v_first, v_second, taps, dst, pairs,
        )
    }
}

#[inline]
#[target_feature(enable = "ssse3")]
unsafe fn sse_weighted_rows(first: __m128i, second: __m128i, weights: __m128i) -> __m128i {
    let rounding = _mm_set1_epi16(4);
    let lo = _mm_maddubs_epi16(_mm_unpacklo_epi8(first, second), weights);
    let hi = _mm_maddubs_epi16(_mm_unpackhi_epi8(first, second), weights);
    let lo = _mm_srli_epi16::<3>(_mm_add_epi16(lo, rounding));
    let hi = _mm_srli_epi16::<3>(_mm_add_epi16(hi, rounding));
    _mm_packus_epi16(lo, hi)
}

#[target_feature(enable = "ssse3")]
#[allow(clippy::too_many_arguments)]
unsafe fn sse_interlaced_row_impl(
    y_src: &[u8],
    u_first: &[u8],
    u_second: &[u8],
    v_first: &[u8],
    v_second: &[u8],
    taps: InterlacedRowPlan,
    dst: &mut [u8],
    pairs: usize,
) -> usize {
    // Byte pairs of (first, second) multiply against (first_weight, second_weight)
    let weights = _mm_set1_epi16(
        ((taps.second_weight as i16) << 8) | taps.first_weight as i16,
    );

    let mut cx = 0usize;

    while cx + 16 <= pairs {
        let u = sse_weighted_rows(
            _mm_loadu_si128(u_first.as_ptr().add(cx) as *const __m128i),
            _mm_loadu_si128(u_second.as_ptr().add(cx) as *const __m128i),
            weights,
        );
        let v = sse_weighted_rows(
            _mm_loadu_si128(v_first.as_ptr().add(cx) as *const __m128i),
            _mm_loadu_si128(v_second.as_ptr().add(cx) as *const __m128i),
            weights,
        );

        let y_ptr = y_src.as_ptr().add(cx * 2);
        let y0 = _mm_loadu_si128(y_ptr as *const __m128i);
        let y1 = _mm_loadu_si128(y_ptr.add(16) as *const __m128i);

        let uv_lo = _mm_unpacklo_epi8(u, v);
        let uv_hi = _mm_unpackhi_epi8(u, v);

        let dst_ptr = dst.as_mut_ptr().add(cx * 4);
        _mm_storeu_si128(dst_ptr as *mut __m128i, _mm_unpacklo_epi8(y0, uv_lo));
        _mm_storeu_si128(dst_ptr.add(16) as *mut __m128i, _mm_unpackhi_epi8(y0, uv_lo));
        _mm_storeu_si128(dst_ptr.add(32) as *mut __m128i, _mm_unpacklo_epi8(y1, uv_hi));
        _mm_storeu_si128(dst_ptr.add(48) as *mut __m128i, _mm_unpackhi_epi8(y1, uv_hi));

        cx += 16;
    }

    cx
}
