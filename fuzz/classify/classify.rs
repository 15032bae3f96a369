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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yc48::{
    classify, normalize_range, scaler_fn, Converter, ConverterOptions, DecodedFrame,
    OutputBuffer, PixelFormat, Plane, YuvRange,
};

fuzz_target!(|data: (u8, u8, u8, bool, Option<u16>)| {
    fuzz_convert(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_convert(format: u8, i_width: u8, i_height: u8, interlaced: bool, limit: Option<u16>) {
    let format = PixelFormat::ALL[format as usize % PixelFormat::ALL.len()];
    let classification = classify(format);
    let mut normalized = format;
    normalize_range(&mut normalized);
    assert_eq!(classify(normalized), classification);

    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    // Generous enough for any 8-bit layout of this geometry
    let source = vec![128u8; width * 8 * height];
    let frame = DecodedFrame {
        planes: [
            Plane::new(&source, width as u32 * 8),
            Plane::new(&source, width as u32 * 8),
            Plane::new(&source, width as u32 * 8),
            Plane::EMPTY,
        ],
        width: width as u32,
        height: height as u32,
        format,
        interlaced,
        range: YuvRange::Limited,
    };

    let mut converter = Converter::with_options(
        scaler_fn(|_, destination| destination.height as usize),
        ConverterOptions {
            scratch_limit: limit.map(|limit| limit as usize),
            ..Default::default()
        },
    );
    let size = converter
        .required_output_size(format, width as u32, height as u32)
        .unwrap();
    let stride = size / height;
    let mut data = vec![0u8; size];
    if let Ok(written) = converter.convert(
        &frame,
        &mut OutputBuffer {
            data: &mut data,
            stride: stride as u32,
            height: height as u32,
        },
    ) {
        assert!(written <= size);
    }
}
