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

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yc48::{
    interlaced_yuv420_to_yuyv422, Plane, SplitChroma, Strategy, YuvBiPlanarImage, YuvNVOrder,
    YuvPlanarImage,
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let mut rng = rand::rng();

    let y_plane: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
    let u_plane: Vec<u8> = (0..width * height / 4).map(|_| rng.random()).collect();
    let v_plane: Vec<u8> = (0..width * height / 4).map(|_| rng.random()).collect();
    let uv_plane: Vec<u8> = (0..width * height / 2).map(|_| rng.random()).collect();

    let planar_image = YuvPlanarImage {
        y_plane: Plane::new(&y_plane, width as u32),
        u_plane: Plane::new(&u_plane, width as u32 / 2),
        v_plane: Plane::new(&v_plane, width as u32 / 2),
        width: width as u32,
        height: height as u32,
    };
    let bi_planar_image = YuvBiPlanarImage {
        y_plane: Plane::new(&y_plane, width as u32),
        uv_plane: Plane::new(&uv_plane, width as u32),
        width: width as u32,
        height: height as u32,
    };

    let stride = width * 2;
    let mut yuy2 = vec![0u8; stride * height];

    c.bench_function("yc48 interlaced YUV420 -> YUYV Scalar", |b| {
        b.iter(|| {
            interlaced_yuv420_to_yuyv422(&planar_image, &mut yuy2, stride as u32, Strategy::Scalar)
                .unwrap();
        })
    });

    c.bench_function("yc48 interlaced YUV420 -> YUYV Vector", |b| {
        b.iter(|| {
            interlaced_yuv420_to_yuyv422(&planar_image, &mut yuy2, stride as u32, Strategy::Vector)
                .unwrap();
        })
    });

    c.bench_function("yc48 split NV12 chroma", |b| {
        b.iter(|| {
            SplitChroma::split(&bi_planar_image, YuvNVOrder::UV, None).unwrap();
        })
    });

    c.bench_function("yc48 interlaced NV12 -> YUYV Vector", |b| {
        b.iter(|| {
            let split = SplitChroma::split(&bi_planar_image, YuvNVOrder::UV, None).unwrap();
            interlaced_yuv420_to_yuyv422(
                &split.as_planar(&bi_planar_image),
                &mut yuy2,
                stride as u32,
                Strategy::Vector,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
