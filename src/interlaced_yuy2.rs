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

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_interlaced_yuv420_to_yuyv422_row;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_interlaced_yuv420_to_yuyv422_row;
use crate::conversion_error::check_destination;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::cpu::CpuCapabilities;
use crate::yc48::Strategy;
use crate::yuv_support::YUY2_SIZE;
use crate::{ConversionError, YuvPlanarImage};
use num_traits::AsPrimitive;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Two chroma rows of the same field and their weights in eighths.
///
/// A plain copy is `first` weighted 8 and `second` weighted 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InterlacedRowPlan {
    pub first: usize,
    pub second: usize,
    pub first_weight: u8,
    pub second_weight: u8,
}

impl InterlacedRowPlan {
    const fn copy(row: usize) -> InterlacedRowPlan {
        InterlacedRowPlan {
            first: row,
            second: row,
            first_weight: 8,
            second_weight: 0,
        }
    }

    const fn blend(first: usize, second: usize, first_weight: u8) -> InterlacedRowPlan {
        InterlacedRowPlan {
            first,
            second,
            first_weight,
            second_weight: 8 - first_weight,
        }
    }

    /// Chroma sources of output row `y` in a frame `height` rows tall.
    ///
    /// Rows are filtered in groups of four starting at row 2, each group reading
    /// chroma rows `k..k + 4`, while the group ends at least two rows before the bottom.
    /// Every other row copies the nearest chroma row of its own field.
    pub fn for_row(y: usize, height: usize) -> InterlacedRowPlan {
        if y >= 2 {
            let group = (y - 2) / 4;
            let group_start = 2 + group * 4;
            if group_start + 4 <= height.saturating_sub(2) {
                let k = group * 2;
                return match (y - 2) % 4 {
                    0 => InterlacedRowPlan::blend(k, k + 2, 5),
                    1 => InterlacedRowPlan::blend(k + 1, k + 3, 7),
                    2 => InterlacedRowPlan::blend(k, k + 2, 1),
                    _ => InterlacedRowPlan::blend(k + 1, k + 3, 3),
                };
            }
        }

        let chroma_rows = height.div_ceil(2);
        let mut row = 2 * (y / 4) + y % 2;
        if row >= chroma_rows {
            // Step back within the field, short frames fall back to the last row
            row = row.saturating_sub(2).min(chroma_rows.saturating_sub(1));
        }
        InterlacedRowPlan::copy(row)
    }
}

#[inline(always)]
fn weighted_tap<T: AsPrimitive<u16>>(first: T, second: T, first_weight: u16, second_weight: u16) -> u8 {
    ((first.as_() * first_weight + second.as_() * second_weight + 4) >> 3) as u8
}

/// Finishes an output row from chroma column `start`.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub(crate) fn interlaced_row_scalar(
    y_src: &[u8],
    u_first: &[u8],
    u_second: &[u8],
    v_first: &[u8],
    v_second: &[u8],
    taps: InterlacedRowPlan,
    dst: &mut [u8],
    start: usize,
    width: usize,
) {
    let w0 = taps.first_weight as u16;
    let w1 = taps.second_weight as u16;
    let pairs = width / 2;

    for (x, dst) in dst[..pairs * 4]
        .chunks_exact_mut(4)
        .enumerate()
        .skip(start)
    {
        dst[0] = y_src[x * 2];
        dst[1] = weighted_tap(u_first[x], u_second[x], w0, w1);
        dst[2] = y_src[x * 2 + 1];
        dst[3] = weighted_tap(v_first[x], v_second[x], w0, w1);
    }

    if width & 1 != 0 {
        // Trailing pixel has no partner to carry V
        let x = width - 1;
        dst[x * 2] = y_src[x];
        dst[x * 2 + 1] = weighted_tap(u_first[pairs], u_second[pairs], w0, w1);
    }
}

#[allow(clippy::too_many_arguments)]
fn interlaced_row(
    y_src: &[u8],
    u_first: &[u8],
    u_second: &[u8],
    v_first: &[u8],
    v_second: &[u8],
    taps: InterlacedRowPlan,
    dst: &mut [u8],
    width: usize,
    _strategy: Strategy,
) {
    let mut _cx = 0usize;

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        if _strategy == Strategy::Vector && CpuCapabilities::get().byte_shuffle {
            _cx = sse_interlaced_yuv420_to_yuyv422_row(
                y_src, u_first, u_second, v_first, v_second, taps, dst, width,
            );
        }
    }

    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        if _strategy == Strategy::Vector {
            _cx = neon_interlaced_yuv420_to_yuyv422_row(
                y_src, u_first, u_second, v_first, v_second, taps, dst, width,
            );
        }
    }

    interlaced_row_scalar(
        y_src, u_first, u_second, v_first, v_second, taps, dst, _cx, width,
    );
}

/// Convert interlaced planar YUV 4:2:0 into packed YUYV 4:2:2.
///
/// Luma is copied as is. Chroma is vertically upsampled within each field:
/// the first and last two rows copy chroma, every inner group of four rows
/// blends two chroma rows of the same field with weights 5/3, 7/1, 1/7 and 3/5.
/// Both strategies produce byte identical output.
///
/// # Arguments
///
/// * `planar_image` - Source image, chroma planes hold `ceil(width / 2)` by `ceil(height / 2)` samples.
/// * `yuy2_store` - A mutable slice to store the converted YUYV data.
/// * `yuy2_stride` - The stride (bytes per row) for the YUYV plane.
/// * `strategy` - Kernel to run, see [Strategy::for_yuy2] to pick one.
///
/// # Errors
///
/// Returns an error if any plane or the destination is too small for the declared geometry,
/// nothing is written in that case.
pub fn interlaced_yuv420_to_yuyv422(
    planar_image: &YuvPlanarImage,
    yuy2_store: &mut [u8],
    yuy2_stride: u32,
    strategy: Strategy,
) -> Result<(), ConversionError> {
    planar_image.check_constraints()?;
    let width = planar_image.width as usize;
    let height = planar_image.height as usize;
    let row_bytes = width * YUY2_SIZE;
    check_destination(yuy2_store.len(), yuy2_stride as usize, row_bytes, height)?;

    let stride = yuy2_stride as usize;
    let chroma_width = planar_image.chroma_width();
    let chroma_height = planar_image.chroma_height();
    let dst = &mut yuy2_store[..stride * height];

    let y_plane = planar_image.y_plane;
    let u_plane = planar_image.u_plane;
    let v_plane = planar_image.v_plane;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(stride);
    }

    iter.enumerate().for_each(|(y, dst)| {
        let taps = InterlacedRowPlan::for_row(y, height);
        interlaced_row(
            y_plane.row(y, height, width),
            u_plane.row(taps.first, chroma_height, chroma_width),
            u_plane.row(taps.second, chroma_height, chroma_width),
            v_plane.row(taps.first, chroma_height, chroma_width),
            v_plane.row(taps.second, chroma_height, chroma_width),
            taps,
            &mut dst[..row_bytes],
            width,
            strategy,
        );
    });

    Ok(())
}
