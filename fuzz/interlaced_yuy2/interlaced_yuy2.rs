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
    interlaced_yuv420_to_yuyv422, Plane, SplitChroma, Strategy, YuvBiPlanarImage, YuvNVOrder,
    YuvPlanarImage,
};

fuzz_target!(|data: (u8, u8, u8, Vec<u8>)| {
    fuzz_planar(data.0, data.1, data.2, &data.3);
    fuzz_bi_planar(data.0, data.1, &data.3);
});

fn fill(len: usize, seed: &[u8]) -> Vec<u8> {
    seed.iter().cycle().take(len).copied().collect()
}

fn fuzz_planar(i_width: u8, i_height: u8, padding: u8, seed: &[u8]) {
    if i_height == 0 || i_width == 0 || seed.is_empty() {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let padding = padding as usize % 8;
    let chroma_stride = width.div_ceil(2) + padding;
    let chroma_len = chroma_stride * height.div_ceil(2);

    let y_plane = fill(width * height, seed);
    let u_plane = fill(chroma_len, &seed[seed.len() / 2..]);
    let v_plane = fill(chroma_len, seed);

    let planar_image = YuvPlanarImage {
        y_plane: Plane::new(&y_plane, width as u32),
        u_plane: Plane::new(&u_plane, chroma_stride as u32),
        v_plane: Plane::new(&v_plane, chroma_stride as u32),
        width: width as u32,
        height: height as u32,
    };

    let yuy2_stride = width * 2 + padding;
    let mut scalar = vec![0u8; yuy2_stride * height];
    let mut vector = vec![0u8; yuy2_stride * height];

    interlaced_yuv420_to_yuyv422(&planar_image, &mut scalar, yuy2_stride as u32, Strategy::Scalar)
        .unwrap();
    interlaced_yuv420_to_yuyv422(&planar_image, &mut vector, yuy2_stride as u32, Strategy::Vector)
        .unwrap();
    assert_eq!(scalar, vector);
}

fn fuzz_bi_planar(i_width: u8, i_height: u8, seed: &[u8]) {
    if i_height == 0 || i_width == 0 || seed.is_empty() {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let uv_stride = width.div_ceil(2) * 2;

    let y_plane = fill(width * height, seed);
    let uv_plane = fill(uv_stride * height.div_ceil(2), seed);

    let bi_planar_image = YuvBiPlanarImage {
        y_plane: Plane::new(&y_plane, width as u32),
        uv_plane: Plane::new(&uv_plane, uv_stride as u32),
        width: width as u32,
        height: height as u32,
    };

    for order in [YuvNVOrder::UV, YuvNVOrder::VU] {
        let split = SplitChroma::split(&bi_planar_image, order, None).unwrap();
        let mut yuy2 = vec![0u8; width * 2 * height];
        interlaced_yuv420_to_yuyv422(
            &split.as_planar(&bi_planar_image),
            &mut yuy2,
            width as u32 * 2,
            Strategy::Vector,
        )
        .unwrap();
    }
}
