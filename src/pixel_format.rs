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
use crate::yuv_support::YuvNVOrder;

/// Pixel format tags reported by decoders.
///
/// Naming follows the FFmpeg `AV_PIX_FMT_*` tags, `Le`/`Be` suffixes mark the
/// byte order of formats wider than 8 bits.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    Yuv420p,
    Yuyv422,
    Uyvy422,
    Rgb24,
    Bgr24,
    Yuv422p,
    Yuv444p,
    Yuv410p,
    Yuv411p,
    Yuv440p,
    Gray8,
    Gray16Le,
    Gray16Be,
    Pal8,
    Yuvj420p,
    Yuvj422p,
    Yuvj444p,
    Yuvj440p,
    Bgr8,
    Bgr4,
    Bgr4Byte,
    Rgb8,
    Rgb4,
    Rgb4Byte,
    Nv12,
    Nv21,
    Nv16,
    P010Le,
    P010Be,
    Argb,
    Rgba,
    Abgr,
    Bgra,
    Rgb48Le,
    Rgb48Be,
    Bgr48Le,
    Bgr48Be,
    Rgb565Le,
    Rgb565Be,
    Rgb555Le,
    Rgb555Be,
    Bgr565Le,
    Bgr565Be,
    Bgr555Le,
    Bgr555Be,
    Rgb444Le,
    Rgb444Be,
    Bgr444Le,
    Bgr444Be,
    Yuv420p9Le,
    Yuv420p9Be,
    Yuv422p9Le,
    Yuv422p9Be,
    Yuv444p9Le,
    Yuv444p9Be,
    Yuv420p10Le,
    Yuv420p10Be,
    Yuv422p10Le,
    Yuv422p10Be,
    Yuv444p10Le,
    Yuv444p10Be,
    Yuv420p16Le,
    Yuv420p16Be,
    Yuv422p16Le,
    Yuv422p16Be,
    Yuv444p16Le,
    Yuv444p16Be,
    Yuva420p,
    Gbrp,
    Gbrp9Le,
    Gbrp9Be,
    Gbrp10Le,
    Gbrp10Be,
    Gbrp16Le,
    Gbrp16Be,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Yuv,
    Rgb,
    Gray,
    /// 8-bit indices into a palette of RGB entries
    Palette,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaneLayout {
    /// Every channel in its own plane
    Planar,
    /// Luma plane followed by one interleaved chroma plane
    SemiPlanar,
    /// All channels interleaved in a single plane
    Packed,
}

/// Memory layout of a [`PixelFormat`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelFormatDescriptor {
    pub family: ColorFamily,
    pub layout: PlaneLayout,
    /// Bits of the widest component
    pub bit_depth: u8,
    /// log2 of horizontal chroma subsampling
    pub chroma_shift_w: u8,
    /// log2 of vertical chroma subsampling
    pub chroma_shift_h: u8,
    pub has_alpha: bool,
    pub big_endian: bool,
    /// Tag implies full range samples regardless of what the stream signals
    pub full_range: bool,
}

impl PixelFormatDescriptor {
    const fn yuv(layout: PlaneLayout, bit_depth: u8, shift_w: u8, shift_h: u8) -> Self {
        PixelFormatDescriptor {
            family: ColorFamily::Yuv,
            layout,
            bit_depth,
            chroma_shift_w: shift_w,
            chroma_shift_h: shift_h,
            has_alpha: false,
            big_endian: false,
            full_range: false,
        }
    }

    const fn rgb(layout: PlaneLayout, bit_depth: u8) -> Self {
        PixelFormatDescriptor {
            family: ColorFamily::Rgb,
            layout,
            bit_depth,
            chroma_shift_w: 0,
            chroma_shift_h: 0,
            has_alpha: false,
            big_endian: false,
            full_range: false,
        }
    }

    const fn gray(bit_depth: u8) -> Self {
        PixelFormatDescriptor {
            family: ColorFamily::Gray,
            layout: PlaneLayout::Planar,
            bit_depth,
            chroma_shift_w: 0,
            chroma_shift_h: 0,
            has_alpha: false,
            big_endian: false,
            full_range: false,
        }
    }

    const fn be(mut self) -> Self {
        self.big_endian = true;
        self
    }

    const fn alpha(mut self) -> Self {
        self.has_alpha = true;
        self
    }

    const fn jpeg(mut self) -> Self {
        self.full_range = true;
        self
    }
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 75] = [
        PixelFormat::Yuv420p,
        PixelFormat::Yuyv422,
        PixelFormat::Uyvy422,
        PixelFormat::Rgb24,
        PixelFormat::Bgr24,
        PixelFormat::Yuv422p,
        PixelFormat::Yuv444p,
        PixelFormat::Yuv410p,
        PixelFormat::Yuv411p,
        PixelFormat::Yuv440p,
        PixelFormat::Gray8,
        PixelFormat::Gray16Le,
        PixelFormat::Gray16Be,
        PixelFormat::Pal8,
        PixelFormat::Yuvj420p,
        PixelFormat::Yuvj422p,
        PixelFormat::Yuvj444p,
        PixelFormat::Yuvj440p,
        PixelFormat::Bgr8,
        PixelFormat::Bgr4,
        PixelFormat::Bgr4Byte,
        PixelFormat::Rgb8,
        PixelFormat::Rgb4,
        PixelFormat::Rgb4Byte,
        PixelFormat::Nv12,
        PixelFormat::Nv21,
        PixelFormat::Nv16,
        PixelFormat::P010Le,
        PixelFormat::P010Be,
        PixelFormat::Argb,
        PixelFormat::Rgba,
        PixelFormat::Abgr,
        PixelFormat::Bgra,
        PixelFormat::Rgb48Le,
        PixelFormat::Rgb48Be,
        PixelFormat::Bgr48Le,
        PixelFormat::Bgr48Be,
        PixelFormat::Rgb565Le,
        PixelFormat::Rgb565Be,
        PixelFormat::Rgb555Le,
        PixelFormat::Rgb555Be,
        PixelFormat::Bgr565Le,
        PixelFormat::Bgr565Be,
        PixelFormat::Bgr555Le,
        PixelFormat::Bgr555Be,
        PixelFormat::Rgb444Le,
        PixelFormat::Rgb444Be,
        PixelFormat::Bgr444Le,
        PixelFormat::Bgr444Be,
        PixelFormat::Yuv420p9Le,
        PixelFormat::Yuv420p9Be,
        PixelFormat::Yuv422p9Le,
        PixelFormat::Yuv422p9Be,
        PixelFormat::Yuv444p9Le,
        PixelFormat::Yuv444p9Be,
        PixelFormat::Yuv420p10Le,
        PixelFormat::Yuv420p10Be,
        PixelFormat::Yuv422p10Le,
        PixelFormat::Yuv422p10Be,
        PixelFormat::Yuv444p10Le,
        PixelFormat::Yuv444p10Be,
        PixelFormat::Yuv420p16Le,
        PixelFormat::Yuv420p16Be,
        PixelFormat::Yuv422p16Le,
        PixelFormat::Yuv422p16Be,
        PixelFormat::Yuv444p16Le,
        PixelFormat::Yuv444p16Be,
        PixelFormat::Yuva420p,
        PixelFormat::Gbrp,
        PixelFormat::Gbrp9Le,
        PixelFormat::Gbrp9Be,
        PixelFormat::Gbrp10Le,
        PixelFormat::Gbrp10Be,
        PixelFormat::Gbrp16Le,
        PixelFormat::Gbrp16Be,
    ];

    pub const fn descriptor(self) -> PixelFormatDescriptor {
        use PixelFormat::*;
        use PixelFormatDescriptor as D;
        use PlaneLayout::*;

        match self {
            Yuv420p => D::yuv(Planar, 8, 1, 1),
            Yuv422p => D::yuv(Planar, 8, 1, 0),
            Yuv444p => D::yuv(Planar, 8, 0, 0),
            Yuv410p => D::yuv(Planar, 8, 2, 2),
            Yuv411p => D::yuv(Planar, 8, 2, 0),
            Yuv440p => D::yuv(Planar, 8, 0, 1),
            Yuvj420p => D::yuv(Planar, 8, 1, 1).jpeg(),
            Yuvj422p => D::yuv(Planar, 8, 1, 0).jpeg(),
            Yuvj444p => D::yuv(Planar, 8, 0, 0).jpeg(),
            Yuvj440p => D::yuv(Planar, 8, 0, 1).jpeg(),
            Yuyv422 | Uyvy422 => D::yuv(Packed, 8, 1, 0),
            Nv12 | Nv21 => D::yuv(SemiPlanar, 8, 1, 1),
            Nv16 => D::yuv(SemiPlanar, 8, 1, 0),
            P010Le => D::yuv(SemiPlanar, 10, 1, 1),
            P010Be => D::yuv(SemiPlanar, 10, 1, 1).be(),
            Yuv420p9Le => D::yuv(Planar, 9, 1, 1),
            Yuv420p9Be => D::yuv(Planar, 9, 1, 1).be(),
            Yuv422p9Le => D::yuv(Planar, 9, 1, 0),
            Yuv422p9Be => D::yuv(Planar, 9, 1, 0).be(),
            Yuv444p9Le => D::yuv(Planar, 9, 0, 0),
            Yuv444p9Be => D::yuv(Planar, 9, 0, 0).be(),
            Yuv420p10Le => D::yuv(Planar, 10, 1, 1),
            Yuv420p10Be => D::yuv(Planar, 10, 1, 1).be(),
            Yuv422p10Le => D::yuv(Planar, 10, 1, 0),
            Yuv422p10Be => D::yuv(Planar, 10, 1, 0).be(),
            Yuv444p10Le => D::yuv(Planar, 10, 0, 0),
            Yuv444p10Be => D::yuv(Planar, 10, 0, 0).be(),
            Yuv420p16Le => D::yuv(Planar, 16, 1, 1),
            Yuv420p16Be => D::yuv(Planar, 16, 1, 1).be(),
            Yuv422p16Le => D::yuv(Planar, 16, 1, 0),
            Yuv422p16Be => D::yuv(Planar, 16, 1, 0).be(),
            Yuv444p16Le => D::yuv(Planar, 16, 0, 0),
            Yuv444p16Be => D::yuv(Planar, 16, 0, 0).be(),
            Yuva420p => D::yuv(Planar, 8, 1, 1).alpha(),
            Gray8 => D::gray(8),
            Gray16Le => D::gray(16),
            Gray16Be => D::gray(16).be(),
            Pal8 => PixelFormatDescriptor {
                family: ColorFamily::Palette,
                layout: Packed,
                bit_depth: 8,
                chroma_shift_w: 0,
                chroma_shift_h: 0,
                has_alpha: false,
                big_endian: false,
                full_range: false,
            },
            Rgb24 | Bgr24 => D::rgb(Packed, 8),
            Bgr8 | Rgb8 => D::rgb(Packed, 3),
            Bgr4 | Bgr4Byte | Rgb4 | Rgb4Byte => D::rgb(Packed, 2),
            Argb | Rgba | Abgr | Bgra => D::rgb(Packed, 8).alpha(),
            Rgb48Le | Bgr48Le => D::rgb(Packed, 16),
            Rgb48Be | Bgr48Be => D::rgb(Packed, 16).be(),
            Rgb565Le | Bgr565Le => D::rgb(Packed, 6),
            Rgb565Be | Bgr565Be => D::rgb(Packed, 6).be(),
            Rgb555Le | Bgr555Le => D::rgb(Packed, 5),
            Rgb555Be | Bgr555Be => D::rgb(Packed, 5).be(),
            Rgb444Le | Bgr444Le => D::rgb(Packed, 4),
            Rgb444Be | Bgr444Be => D::rgb(Packed, 4).be(),
            Gbrp => D::rgb(Planar, 8),
            Gbrp9Le => D::rgb(Planar, 9),
            Gbrp9Be => D::rgb(Planar, 9).be(),
            Gbrp10Le => D::rgb(Planar, 10),
            Gbrp10Be => D::rgb(Planar, 10).be(),
            Gbrp16Le => D::rgb(Planar, 16),
            Gbrp16Be => D::rgb(Planar, 16).be(),
        }
    }

    /// Channel order of the interleaved chroma plane, `None` for anything that is not 8-bit bi-planar 4:2:0
    pub const fn nv_order(self) -> Option<YuvNVOrder> {
        match self {
            PixelFormat::Nv12 => Some(YuvNVOrder::UV),
            PixelFormat::Nv21 => Some(YuvNVOrder::VU),
            _ => None,
        }
    }

    /// 8-bit 4:2:0 with separate U and V planes, in either range
    pub const fn is_planar_yuv420(self) -> bool {
        matches!(self, PixelFormat::Yuv420p | PixelFormat::Yuvj420p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let unique: HashSet<PixelFormat> = PixelFormat::ALL.iter().copied().collect();
        assert_eq!(unique.len(), PixelFormat::ALL.len());
        assert_eq!(*PixelFormat::ALL.last().unwrap() as usize + 1, PixelFormat::ALL.len());
    }

    #[test]
    fn test_descriptor_layouts() {
        let nv12 = PixelFormat::Nv12.descriptor();
        assert_eq!(nv12.layout, PlaneLayout::SemiPlanar);
        assert_eq!((nv12.chroma_shift_w, nv12.chroma_shift_h), (1, 1));

        let rgb48 = PixelFormat::Rgb48Be.descriptor();
        assert_eq!(rgb48.bit_depth, 16);
        assert!(rgb48.big_endian);

        assert!(PixelFormat::Bgra.descriptor().has_alpha);
        assert!(PixelFormat::Yuvj444p.descriptor().full_range);
        assert!(!PixelFormat::Yuv444p.descriptor().full_range);
    }

    #[test]
    fn test_nv_order() {
        assert_eq!(PixelFormat::Nv12.nv_order(), Some(YuvNVOrder::UV));
        assert_eq!(PixelFormat::Nv21.nv_order(), Some(YuvNVOrder::VU));
        assert_eq!(PixelFormat::Nv16.nv_order(), None);
        assert_eq!(PixelFormat::Yuv420p.nv_order(), None);
    }
}
