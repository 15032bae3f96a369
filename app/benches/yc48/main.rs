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
use yc48::{yuv444_p16_to_yc48, Plane, Strategy, Yuv444P16Image, YuvRange, YC48_SIZE};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;
    let mut rng = rand::rng();

    let planes: Vec<Vec<u8>> = (0..3)
        .map(|_| (0..width * height * 2).map(|_| rng.random()).collect())
        .collect();
    let image = Yuv444P16Image {
        y_plane: Plane::new(&planes[0], width as u32 * 2),
        u_plane: Plane::new(&planes[1], width as u32 * 2),
        v_plane: Plane::new(&planes[2], width as u32 * 2),
        width: width as u32,
        height: height as u32,
    };

    let stride = width * YC48_SIZE;
    // 16 byte aligned, as the vector packer is only picked for aligned hosts
    let mut storage = vec![0u8; stride * height + 16];
    let offset = storage.as_ptr().align_offset(16);
    let yc48_store = &mut storage[offset..offset + stride * height];

    c.bench_function("yc48 YUV444P16 -> YC48 Limited Scalar", |b| {
        b.iter(|| {
            yuv444_p16_to_yc48(
                &image,
                yc48_store,
                stride as u32,
                YuvRange::Limited,
                Strategy::Scalar,
            )
            .unwrap();
        })
    });

    c.bench_function("yc48 YUV444P16 -> YC48 Limited Vector", |b| {
        b.iter(|| {
            yuv444_p16_to_yc48(
                &image,
                yc48_store,
                stride as u32,
                YuvRange::Limited,
                Strategy::Vector,
            )
            .unwrap();
        })
    });

    c.bench_function("yc48 YUV444P16 -> YC48 Full Vector", |b| {
        b.iter(|| {
            yuv444_p16_to_yc48(
                &image,
                yc48_store,
                stride as u32,
                YuvRange::Full,
                Strategy::Vector,
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
