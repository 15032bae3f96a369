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
use std::arch::aarch64::*;

#[inline(always)]
unsafe fn neon_chroma_to_yc48(v: uint16x8_t, coef: int16x8_t, offset: int32x4_t) -> int16x8_t {
    let centered = vreinterpretq_s16_u16(veorq_u16(v, vdupq_n_u16(0x8000)));
    let lo = vmlal_s16(offset, vget_low_s16(centered), vget_low_s16(coef));
    let hi = vmlal_high_s16(offset, centered, coef);
    // Narrowing keeps bits 16..31, identical for arithmetic and logical shifts
    vcombine_s16(vshrn_n_s32::<16>(lo), vshrn_n_s32::<16>(hi))
}

/// Packs as many whole blocks of 8 pixels as fit into `width`, returns the first unprocessed pixel.
pub(crate) fn neon_yuv444_p16_to_yc48_row(
    y_src: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    dst: &mut [u8],
    width: usize,
    coeffs: &Yc48Coefficients,
) -> usize {
    assert!(y_src.len() >= width * 2 && u_src.len() >= width * 2 && v_src.len() >= width * 2);
    assert!(dst.len() >= width * YC48_SIZE);
    unsafe {
        let y_coef = vdupq_n_u16(coeffs.y_coef as u16);
        let y_shift = vdupq_n_s32(-(coeffs.y_shift as i32));
        let y_bias = vdupq_n_s16(YC48_Y_BIAS as i16);
        let uv_coef = vdupq_n_s16(coeffs.uv_coef as i16);
        let uv_offset = vdupq_n_s32(coeffs.uv_offset);

        let mut cx = 0usize;

        while cx + 8 <= width {
            let y_values = vreinterpretq_u16_u8(vld1q_u8(y_src.as_ptr().add(cx * 2)));
            let u_values = vreinterpretq_u16_u8(vld1q_u8(u_src.as_ptr().add(cx * 2)));
            let v_values = vreinterpretq_u16_u8(vld1q_u8(v_src.as_ptr().add(cx * 2)));

            let y_lo = vshlq_u32(vmull_u16(vget_low_u16(y_values), vget_low_u16(y_coef)), y_shift);
            let y_hi = vshlq_u32(vmull_high_u16(y_values, y_coef), y_shift);
            let y = vsubq_s16(
                vreinterpretq_s16_u16(vcombine_u16(vmovn_u32(y_lo), vmovn_u32(y_hi))),
                y_bias,
            );

            let cb = neon_chroma_to_yc48(u_values, uv_coef, uv_offset);
            let cr = neon_chroma_to_yc48(v_values, uv_coef, uv_offset);

            vst3q_s16(
                dst.as_mut_ptr().add(cx * YC48_SIZE) as *mut i16,
                int16x8x3_t(y, cb, cr),
            );

            cx += 8;
        }

        cx
    }
}
