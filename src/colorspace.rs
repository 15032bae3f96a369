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
use crate::pixel_format::{ColorFamily, PlaneLayout};
use crate::yuv_support::{RGB24_SIZE, RGBA_SIZE, YC48_SIZE, YUY2_SIZE};
use crate::PixelFormat;

/// Buffer layouts the host accepts
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutputClass {
    /// Packed signed 16-bit Y, Cb, Cr, 48 bits per pixel
    Yc48,
    /// Packed B, G, R, A, bottom-up rows
    Rgba32,
    /// Packed B, G, R, bottom-up rows
    Rgb24,
    /// Packed Y, U, Y, V 4:2:2
    Yuy2,
}

impl OutputClass {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            OutputClass::Yc48 => YC48_SIZE,
            OutputClass::Rgba32 => RGBA_SIZE,
            OutputClass::Rgb24 => RGB24_SIZE,
            OutputClass::Yuy2 => YUY2_SIZE,
        }
    }

    /// Host expects RGB classes stored bottom row first
    pub const fn is_bottom_up(self) -> bool {
        matches!(self, OutputClass::Rgba32 | OutputClass::Rgb24)
    }
}

/// Target chosen for a decoder format
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub class: OutputClass,
    /// Format the generic scaler has to produce
    pub destination: PixelFormat,
}

/// Decides which host layout a decoder format is delivered in.
///
/// Total: every tag is classified, formats nothing else claims become YUY2.
pub fn classify(format: PixelFormat) -> Classification {
    let format = format.to_limited_range();
    let desc = format.descriptor();

    let class = match desc.family {
        // 4:4:4 and 4:4:0 would lose horizontal chroma in YUY2
        ColorFamily::Yuv
            if desc.layout == PlaneLayout::Planar
                && (desc.bit_depth > 8 || desc.chroma_shift_w == 0) =>
        {
            OutputClass::Yc48
        }
        ColorFamily::Rgb if desc.bit_depth > 8 => OutputClass::Yc48,
        ColorFamily::Rgb if desc.has_alpha => OutputClass::Rgba32,
        ColorFamily::Rgb | ColorFamily::Palette => OutputClass::Rgb24,
        _ => OutputClass::Yuy2,
    };

    let destination = match class {
        OutputClass::Yc48 => PixelFormat::Yuv444p16Le,
        OutputClass::Rgba32 => PixelFormat::Bgra,
        OutputClass::Rgb24 => PixelFormat::Bgr24,
        OutputClass::Yuy2 => PixelFormat::Yuyv422,
    };

    Classification { class, destination }
}
