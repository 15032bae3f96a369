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

use rand::Rng;
use std::time::Instant;
use yc48::{
    scaler_fn, Converter, ConverterOptions, DecodedFrame, OutputBuffer, PixelFormat, Plane,
    VectorPolicy, YuvRange,
};

fn random_plane(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random()).collect()
}

fn convert(frame: &DecodedFrame, vector_policy: VectorPolicy, yuv16: u16) -> (Vec<u8>, usize) {
    let mut converter = Converter::with_options(
        scaler_fn(move |_, destination| {
            let width = destination.width as usize;
            for plane in 0..3 {
                for y in 0..destination.height as usize {
                    for pixel in destination.row_mut(plane, y, width * 2).chunks_exact_mut(2) {
                        pixel.copy_from_slice(&yuv16.to_le_bytes());
                    }
                }
            }
            destination.height as usize
        }),
        ConverterOptions {
            vector_policy,
            ..Default::default()
        },
    );
    let size = converter
        .required_output_size(frame.format, frame.width, frame.height)
        .unwrap();
    let mut data = vec![0u8; size];
    let start = Instant::now();
    let written = converter
        .convert(
            frame,
            &mut OutputBuffer {
                data: &mut data,
                stride: (size / frame.height as usize) as u32,
                height: frame.height,
            },
        )
        .unwrap();
    println!(
        "{:?} {:?}: {} bytes in {:?}",
        frame.format,
        vector_policy,
        written,
        start.elapsed()
    );
    (data, written)
}

fn max_divergence(a: &[u8], b: &[u8]) -> u8 {
    a.iter().zip(b.iter()).map(|(&a, &b)| a.abs_diff(b)).max().unwrap_or(0)
}

fn main() {
    let width = 1920usize;
    let height = 1080usize;

    let y_plane = random_plane(width * height);
    let uv_plane = random_plane(width * height / 2);
    let nv12 = DecodedFrame {
        planes: [
            Plane::new(&y_plane, width as u32),
            Plane::new(&uv_plane, width as u32),
            Plane::EMPTY,
            Plane::EMPTY,
        ],
        width: width as u32,
        height: height as u32,
        format: PixelFormat::Nv12,
        interlaced: true,
        range: YuvRange::Limited,
    };

    let (scalar, _) = convert(&nv12, VectorPolicy::ScalarOnly, 0);
    let (vector, _) = convert(&nv12, VectorPolicy::Auto, 0);
    println!("NV12 -> YUY2 max divergence {}", max_divergence(&scalar, &vector));

    let yuv444 = DecodedFrame {
        format: PixelFormat::Yuv444p10Le,
        interlaced: false,
        ..nv12
    };
    let (scalar, _) = convert(&yuv444, VectorPolicy::ScalarOnly, 40000);
    let (vector, _) = convert(&yuv444, VectorPolicy::Auto, 40000);
    println!("YUV444P10 -> YC48 max divergence {}", max_divergence(&scalar, &vector));
}
