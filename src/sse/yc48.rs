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

use crate::yc48::{Yc48Coefficients, YC48_Y_BIAS};
use crate::yuv_support::YC48_SIZE;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Packs as many whole blocks of 8 pixels as fit into `width`, returns the first unprocessed pixel.
pub(crate) fn sse_yuv444_p16_to_yc48_row(
    y_src: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    dst: &mut [u8],
    width: usize,
    coeffs: &Yc48Coefficients,
) -> usize {
    assert!(y_src.len() >= width * 2 && u_src.len() >= width * 2 && v_src.len() >= width * 2);
    assert!(dst.len() >= width * YC48_SIZE);
    unsafe { sse_yuv444_p16_to_yc48_impl(y_src, u_src, v_src, dst, width, coeffs) }
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_chroma_to_yc48(v: __m128i, coef: __m128i, offset: __m128i) -> __m128i {
    // x - 32768 as signed 16-bit
    let centered = _mm_xor_si128(v, _mm_set1_epi16(i16::MIN));
    let lo = _mm_mullo_epi16(centered, coef);
    let hi = _mm_mulhi_epi16(centered, coef);
    let p0 = _mm_add_epi32(_mm_unpacklo_epi16(lo, hi), offset);
    let p1 = _mm_add_epi32(_mm_unpackhi_epi16(lo, hi), offset);
    _mm_packs_epi32(_mm_srai_epi32::<16>(p0), _mm_srai_epi32::<16>(p1))
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_yuv444_p16_to_yc48_impl(
    y_src: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    dst: &mut [u8],
    width: usize,
    coeffs: &Yc48Coefficients,
) -> usize {
    let y_mul = _mm_set1_epi16(coeffs.y_mulhi() as i16);
    let y_bias = _mm_set1_epi16(YC48_Y_BIAS as i16);
    let uv_coef = _mm_set1_epi16(coeffs.uv_coef as i16);
    let uv_offset = _mm_set1_epi32(coeffs.uv_offset);

    const Z: i8 = -1;

    #[rustfmt::skip]
    let (y_to_0, cb_to_0, cr_to_0) = (
        _mm_setr_epi8(0, 1, Z, Z, Z, Z, 2, 3, Z, Z, Z, Z, 4, 5, Z, Z),
        _mm_setr_epi8(Z, Z, 0, 1, Z, Z, Z, Z, 2, 3, Z, Z, Z, Z, 4, 5),
        _mm_setr_epi8(Z, Z, Z, Z, 0, 1, Z, Z, Z, Z, 2, 3, Z, Z, Z, Z),
    );
    #[rustfmt::skip]
    let (y_to_1, cb_to_1, cr_to_1) = (
        _mm_setr_epi8(Z, Z, 6, 7, Z, Z, Z, Z, 8, 9, Z, Z, Z, Z, 10, 11),
        _mm_setr_epi8(Z, Z, Z, Z, 6, 7, Z, Z, Z, Z, 8, 9, Z, Z, Z, Z),
        _mm_setr_epi8(4, 5, Z, Z, Z, Z, 6, 7, Z, Z, Z, Z, 8, 9, Z, Z),
    );
    #[rustfmt::skip]
    let (y_to_2, cb_to_2, cr_to_2) = (
        _mm_setr_epi8(Z, Z, Z, Z, 12, 13, Z, Z, Z, Z, 14, 15, Z, Z, Z, Z),
        _mm_setr_epi8(10, 11, Z, Z, Z, Z, 12, 13, Z, Z, Z, Z, 14, 15, Z, Z),
        _mm_setr_epi8(Z, Z, 10, 11, Z, Z, Z, Z, 12, 13, Z, Z, Z, Z, 14, 15),
    );

    let mut cx = 0usize;

    while cx + 8 <= width {
        let y_values = _mm_loadu_si128(y_src.as_ptr().add(cx * 2) as *const __m128i);
        let u_values = _mm_loadu_si128(u_src.as_ptr().add(cx * 2) as *const __m128i);
        let v_values = _mm_loadu_si128(v_src.as_ptr().add(cx * 2) as *const __m128i);

        let y = _mm_sub_epi16(_mm_mulhi_epu16(y_values, y_mul), y_bias);
        let cb = sse_chroma_to_yc48(u_values, uv_coef, uv_offset);
        let cr = sse_chroma_to_yc48(v_values, uv_coef, uv_offset);

        let row0 = _mm_or_si128(
            _mm_or_si128(_mm_shuffle_epi8(y, y_to_0), _mm_shuffle_epi8(cb, cb_to_0)),
            _mm_shuffle_epi8(cr, cr_to_0),
        );
        let row1 = _mm_or_si128(
            _mm_or_si128(_mm_shuffle_epi8(y, y_to_1), _mm_shuffle_epi8(cb, cb_to_1)),
            _mm_shuffle_epi8(cr, cr_to_1),
        );
        let row2 = _mm_or_si128(
            _mm_or_si128(_mm_shuffle_epi8(y, y_to_2), _mm_shuffle_epi8(cb, cb_to_2)),
            _mm_shuffle_epi8(cr, cr_to_2),
        );

        let dst_ptr = dst.as_mut_ptr().add(cx * YC48_SIZE);
        _mm_storeu_si128(dst_ptr as *mut __m128i, row0);
        _mm_storeu_si128(dst_ptr.add(16) as *mut __m128i, row1);
        _mm_storeu_si128(dst_ptr.add(32) as *mut __m128i, row2);

        cx += 8;
    }

    cx
}
