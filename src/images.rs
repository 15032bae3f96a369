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

use crate::conversion_error::{check_destination, check_plane};
use crate::yuv_support::RowOrder;
use crate::{ConversionError, PixelFormat, YuvRange};

/// Borrowed plane of 8-bit storage.
///
/// Stride here always means bytes per row. Orientation is carried by `order` instead of a negative stride.
#[derive(Debug, Copy, Clone)]
pub struct Plane<'a> {
    pub data: &'a [u8],
    pub stride: u32,
    pub order: RowOrder,
}

impl<'a> Plane<'a> {
    /// Placeholder for planes a format does not use
    pub const EMPTY: Plane<'static> = Plane {
        data: &[],
        stride: 0,
        order: RowOrder::TopDown,
    };

    pub const fn new(data: &'a [u8], stride: u32) -> Self {
        Plane {
            data,
            stride,
            order: RowOrder::TopDown,
        }
    }

    pub const fn bottom_up(data: &'a [u8], stride: u32) -> Self {
        Plane {
            data,
            stride,
            order: RowOrder::BottomUp,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical row `y` of a plane holding `rows` rows, `width` bytes long.
    ///
    /// # Panics
    ///
    /// Panics if the row is outside of the plane.
    #[inline]
    pub fn row(&self, y: usize, rows: usize, width: usize) -> &'a [u8] {
        let offset = self.order.row_offset(y, rows, self.stride as usize);
        &self.data[offset..offset + width]
    }

    pub(crate) fn check(
        &self,
        index: usize,
        row_bytes: usize,
        rows: usize,
    ) -> Result<(), ConversionError> {
        check_plane(
            index,
            self.data.len(),
            self.stride as usize,
            row_bytes,
            rows,
        )
    }
}

impl Default for Plane<'_> {
    fn default() -> Self {
        Plane::EMPTY
    }
}

/// Mutable counterpart of [`Plane`]
#[derive(Debug)]
pub struct PlaneMut<'a> {
    pub data: &'a mut [u8],
    pub stride: u32,
    pub order: RowOrder,
}

impl<'a> PlaneMut<'a> {
    pub fn new(data: &'a mut [u8], stride: u32) -> Self {
        PlaneMut {
            data,
            stride,
            order: RowOrder::TopDown,
        }
    }

    pub fn bottom_up(data: &'a mut [u8], stride: u32) -> Self {
        PlaneMut {
            data,
            stride,
            order: RowOrder::BottomUp,
        }
    }

    pub fn empty() -> Self {
        PlaneMut::new(&mut [], 0)
    }

    /// Logical row `y` of a plane holding `rows` rows, `width` bytes long.
    ///
    /// # Panics
    ///
    /// Panics if the row is outside of the plane.
    #[inline]
    pub fn row_mut(&mut self, y: usize, rows: usize, width: usize) -> &mut [u8] {
        let offset = self.order.row_offset(y, rows, self.stride as usize);
        &mut self.data[offset..offset + width]
    }
}

impl Default for PlaneMut<'_> {
    fn default() -> Self {
        PlaneMut::empty()
    }
}

/// A decoded picture as handed over by the decoder, never written to.
#[derive(Debug, Copy, Clone)]
pub struct DecodedFrame<'a> {
    /// Planes in decoder order, unused ones are [`Plane::EMPTY`]
    pub planes: [Plane<'a>; 4],
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub interlaced: bool,
    /// Range signalled by the stream
    pub range: YuvRange,
}

impl DecodedFrame<'_> {
    pub(crate) fn check_size(&self) -> Result<(), ConversionError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConversionError::ZeroBaseSize);
        }
        Ok(())
    }
}

/// Host owned destination, only plane 0 of a packed layout
#[derive(Debug)]
pub struct OutputBuffer<'a> {
    pub data: &'a mut [u8],
    /// Bytes per row
    pub stride: u32,
    /// Rows allocated by the host
    pub height: u32,
}

impl OutputBuffer<'_> {
    pub(crate) fn check_constraints(
        &self,
        row_bytes: usize,
        rows: usize,
    ) -> Result<(), ConversionError> {
        check_destination(
            self.data.len(),
            self.stride as usize,
            row_bytes,
            rows.max(self.height as usize),
        )
    }
}

#[derive(Debug, Copy, Clone)]
/// Non-mutable representation of an 8-bit planar YUV 4:2:0 image
pub struct YuvPlanarImage<'a> {
    pub y_plane: Plane<'a>,
    pub u_plane: Plane<'a>,
    pub v_plane: Plane<'a>,
    pub width: u32,
    pub height: u32,
}

impl YuvPlanarImage<'_> {
    pub const fn chroma_width(&self) -> usize {
        (self.width as usize).div_ceil(2)
    }

    pub const fn chroma_height(&self) -> usize {
        (self.height as usize).div_ceil(2)
    }

    pub fn check_constraints(&self) -> Result<(), ConversionError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConversionError::ZeroBaseSize);
        }
        self.y_plane
            .check(0, self.width as usize, self.height as usize)?;
        self.u_plane
            .check(1, self.chroma_width(), self.chroma_height())?;
        self.v_plane
            .check(2, self.chroma_width(), self.chroma_height())?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
/// Planar YUV 4:4:4 with 16-bit little-endian samples, as the scaler leaves it for YC48 packing.
///
/// Strides are in bytes, every plane holds `width * 2` bytes per row.
pub struct Yuv444P16Image<'a> {
    pub y_plane: Plane<'a>,
    pub u_plane: Plane<'a>,
    pub v_plane: Plane<'a>,
    pub width: u32,
    pub height: u32,
}

impl Yuv444P16Image<'_> {
    pub fn check_constraints(&self) -> Result<(), ConversionError> {
        let row_bytes = self.width as usize * 2;
        let rows = self.height as usize;
        self.y_plane.check(0, row_bytes, rows)?;
        self.u_plane.check(1, row_bytes, rows)?;
        self.v_plane.check(2, row_bytes, rows)?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
/// Non-mutable representation of an 8-bit Bi-Planar YUV 4:2:0 image
pub struct YuvBiPlanarImage<'a> {
    pub y_plane: Plane<'a>,
    /// Interleaved chroma pairs
    pub uv_plane: Plane<'a>,
    pub width: u32,
    pub height: u32,
}

impl YuvBiPlanarImage<'_> {
    pub const fn chroma_width(&self) -> usize {
        (self.width as usize).div_ceil(2)
    }

    pub const fn chroma_height(&self) -> usize {
        (self.height as usize).div_ceil(2)
    }

    pub fn check_constraints(&self) -> Result<(), ConversionError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConversionError::ZeroBaseSize);
        }
        self.y_plane
            .check(0, self.width as usize, self.height as usize)?;
        self.uv_plane
            .check(1, self.chroma_width() * 2, self.chroma_height())?;
        Ok(())
    }
}
