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

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Declares YUV range Limited (studio) or Full as signalled by the decoder
pub enum YuvRange {
    /// Limited range Y ∈ [16 << (depth - 8), 235 << (depth - 8)], UV ∈ [16 << (depth - 8), 240 << (depth - 8)]
    #[default]
    Limited,
    /// Full range Y ∈ [0, 2^bit_depth - 1], UV ∈ [0, 2^bit_depth - 1]
    Full,
}

/// Channel order of the interleaved chroma plane in bi-planar formats
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl YuvNVOrder {
    #[inline(always)]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline(always)]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }
}

/// Vertical storage order of a plane.
///
/// Replaces negative strides: a `BottomUp` plane stores logical row 0 in its last stored row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RowOrder {
    #[default]
    TopDown,
    BottomUp,
}

impl RowOrder {
    /// Offset in elements of logical row `y` in a plane of `rows` rows.
    #[inline(always)]
    pub const fn row_offset(self, y: usize, rows: usize, stride: usize) -> usize {
        match self {
            RowOrder::TopDown => y * stride,
            RowOrder::BottomUp => (rows - 1 - y) * stride,
        }
    }
}

/// Bytes occupied by one YC48 pixel: signed 16-bit Y, Cb, Cr
pub const YC48_SIZE: usize = 6;
/// Bytes occupied by one packed BGRA pixel
pub const RGBA_SIZE: usize = 4;
/// Bytes occupied by one packed BGR pixel
pub const RGB24_SIZE: usize = 3;
/// Bytes occupied by one YUY2 pixel
pub const YUY2_SIZE: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offset_bottom_up_mirrors() {
        assert_eq!(RowOrder::TopDown.row_offset(0, 4, 10), 0);
        assert_eq!(RowOrder::TopDown.row_offset(3, 4, 10), 30);
        assert_eq!(RowOrder::BottomUp.row_offset(0, 4, 10), 30);
        assert_eq!(RowOrder::BottomUp.row_offset(3, 4, 10), 0);
    }

    #[test]
    fn test_nv_order_positions() {
        assert_eq!(YuvNVOrder::UV.get_u_position(), 0);
        assert_eq!(YuvNVOrder::VU.get_u_position(), 1);
        assert_eq!(YuvNVOrder::VU.get_v_position(), 0);
    }
}
