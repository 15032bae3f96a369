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
use crate::PixelFormat;

/// Full range tags whose layout is identical to a limited range tag
const FULL_TO_LIMITED: [(PixelFormat, PixelFormat); 4] = [
    (PixelFormat::Yuvj420p, PixelFormat::Yuv420p),
    (PixelFormat::Yuvj422p, PixelFormat::Yuv422p),
    (PixelFormat::Yuvj444p, PixelFormat::Yuv444p),
    (PixelFormat::Yuvj440p, PixelFormat::Yuv440p),
];

impl PixelFormat {
    /// Returns the limited range twin of a full range planar YUV tag, or `self`.
    ///
    /// Range itself is carried separately by the frame, so collapsing the
    /// tags keeps the scaler from rescaling samples it was never asked to.
    pub fn to_limited_range(self) -> PixelFormat {
        FULL_TO_LIMITED
            .iter()
            .find(|(full, _)| *full == self)
            .map(|&(_, limited)| limited)
            .unwrap_or(self)
    }
}

/// Rewrites a full range tag in place to its limited range twin.
///
/// No-op for every tag without such a twin.
pub fn normalize_range(format: &mut PixelFormat) {
    *format = format.to_limited_range();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rewrites_jpeg_tags() {
        for (full, limited) in FULL_TO_LIMITED {
            let mut format = full;
            normalize_range(&mut format);
            assert_eq!(format, limited);

            let mut full_desc = full.descriptor();
            full_desc.full_range = false;
            assert_eq!(full_desc, limited.descriptor());
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for format in PixelFormat::ALL {
            let mut once = format;
            normalize_range(&mut once);
            let mut twice = once;
            normalize_range(&mut twice);
            assert_eq!(once, twice);
            assert!(!once.descriptor().full_range);
        }
    }

    #[test]
    fn test_normalize_leaves_other_tags() {
        for format in [PixelFormat::Nv12, PixelFormat::Yuv420p, PixelFormat::Bgra] {
            let mut tag = format;
            normalize_range(&mut tag);
            assert_eq!(tag, format);
        }
    }
}
