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
use std::arch::aarch64::*;

#[inline(always)]
unsafe fn neon_weighted_rows(
    first: uint8x16_t,
    second: uint8x16_t,
    first_weight: uint8x16_t,
    second_weight: uint8x16_t,
) -> uint8x16_t {
    let lo = vmlal_u8(
        vmull_u8(vget_low_u8(first), vget_low_u8(first_weight)),
        vget_low_u8(second),
        vget_low_u8(second_weight),
    );
    let hi = vmlal_high_u8(vmull_high_u8(first, first_weight), second, second_weight);
    // Rounding narrow adds 4 before shifting by 3
    vcombine_u8(vrshrn_n_u16::<3>(lo), vrshrn_n_u16::<3>(hi))
}

/// Writes as many whole blocks of 16 chroma columns as fit into `width`,
/// returns the first unprocessed chroma column.
#[allow(clippy::too_many_arguments)]
pub(crate) fn neon_interlaced_yuv420_to_yuyv422_row(
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
        let first_weight = vdupq_n_u8(taps.first_weight);
        let second_weight = vdupq_n_u8(taps.second_weight);

        let mut cx = 0usize;

        while cx + 16 <= pairs {
            let u = neon_weighted_rows(
                vld1q_u8(u_first.as_ptr().add(cx)),
                vld1q_u8(u_second.as_ptr().add(cx)),
                first_weight,
                second_weight,
            );
            let v = neon_weighted_rows(
                vld1q_u8(v_first.as_ptr().add(cx)),
                vld1q_u8(v_second.as_ptr().add(cx)),
                first_weight,
                second_weight,
            );

            // Even and odd luma samples
            let y_values = vld2q_u8(y_src.as_ptr().add(cx * 2));

            vst4q_u8(
                dst.as_mut_ptr().add(cx * 4),
                uint8x16x4_t(y_values.0, u, y_values.1, v),
            );

            cx += 16;
        }

        cx
    }
}
