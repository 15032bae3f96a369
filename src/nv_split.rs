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

#![forbid(unsafe_code)]
use crate::conversion_error::check_destination;
use crate::scratch::alloc_scratch;
use crate::yuv_support::YuvNVOrder;
use crate::{ConversionError, Plane, YuvBiPlanarImage, YuvPlanarImage};

/// De-interleaves a bi-planar chroma plane into separate U and V planes.
///
/// Every output row holds `chroma_width` samples, `planar_stride` bytes apart.
/// `order` tells which byte of each interleaved pair is U.
///
/// # Errors
///
/// Returns an error if the source or either destination is too small, nothing is written in that case.
pub fn split_nv_chroma(
    uv_plane: &Plane,
    order: YuvNVOrder,
    chroma_width: usize,
    chroma_height: usize,
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    planar_stride: usize,
) -> Result<(), ConversionError> {
    uv_plane.check(1, chroma_width * 2, chroma_height)?;
    check_destination(u_plane.len(), planar_stride, chroma_width, chroma_height)?;
    check_destination(v_plane.len(), planar_stride, chroma_width, chroma_height)?;
    if chroma_width == 0 || chroma_height == 0 {
        return Ok(());
    }

    let u_position = order.get_u_position();
    let v_position = order.get_v_position();

    for (y, (u_dst, v_dst)) in u_plane
        .chunks_exact_mut(planar_stride)
        .zip(v_plane.chunks_exact_mut(planar_stride))
        .take(chroma_height)
        .enumerate()
    {
        let uv_src = uv_plane.row(y, chroma_height, chroma_width * 2);
        for ((u_dst, v_dst), uv) in u_dst[..chroma_width]
            .iter_mut()
            .zip(v_dst[..chroma_width].iter_mut())
            .zip(uv_src.chunks_exact(2))
        {
            *u_dst = uv[u_position];
            *v_dst = uv[v_position];
        }
    }

    Ok(())
}

/// Planar chroma split out of a bi-planar frame, owning its scratch memory.
///
/// Decoder memory is never touched, [`SplitChroma::as_planar`] builds a fresh planar view instead.
#[derive(Debug)]
pub struct SplitChroma {
    storage: Vec<u8>,
    stride: usize,
    rows: usize,
}

impl SplitChroma {
    /// Splits the chroma of `image` into scratch memory of half the interleaved stride.
    ///
    /// # Errors
    ///
    /// [`ConversionError::AllocationFailed`] when the scratch memory cannot be obtained
    /// or would exceed `scratch_limit`.
    pub fn split(
        image: &YuvBiPlanarImage,
        order: YuvNVOrder,
        scratch_limit: Option<usize>,
    ) -> Result<SplitChroma, ConversionError> {
        image.check_constraints()?;
        let chroma_width = image.chroma_width();
        let rows = image.chroma_height();
        let stride = image.uv_plane.stride as usize / 2;
        let plane_size = stride * rows;

        let mut storage = alloc_scratch(plane_size * 2, scratch_limit)?;
        let (u_plane, v_plane) = storage.split_at_mut(plane_size);
        split_nv_chroma(
            &image.uv_plane,
            order,
            chroma_width,
            rows,
            u_plane,
            v_plane,
            stride,
        )?;

        Ok(SplitChroma {
            storage,
            stride,
            rows,
        })
    }

    pub fn u_plane(&self) -> Plane<'_> {
        Plane::new(&self.storage[..self.stride * self.rows], self.stride as u32)
    }

    pub fn v_plane(&self) -> Plane<'_> {
        Plane::new(&self.storage[self.stride * self.rows..], self.stride as u32)
    }

    /// Planar view combining the source luma with the split chroma
    pub fn as_planar<'a>(&'a self, image: &YuvBiPlanarImage<'a>) -> YuvPlanarImage<'a> {
        YuvPlanarImage {
            y_plane: image.y_plane,
            u_plane: self.u_plane(),
            v_plane: self.v_plane(),
            width: image.width,
            height: image.height,
        }
    }
}
