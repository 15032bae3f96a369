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
use yc48::{yuv444_p16_to_yc48, Plane, Strategy, Yuv444P16Image, YuvRange, YC48_SIZE};

fuzz_target!(|data: (u8, u8, u8, bool, Vec<u16>)| {
    fuzz_yc48(data.0, data.1, data.2, data.3, &data.4);
});

fn plane_from(samples: impl Iterator<Item = u16>, len: usize) -> Vec<u8> {
    samples.take(len).flat_map(|v| v.to_le_bytes()).collect()
}

fn fuzz_yc48(i_width: u8, i_height: u8, shift: u8, full_range: bool, samples: &[u16]) {
    if i_height == 0 || i_width == 0 || samples.is_empty() {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let y_plane = plane_from(samples.iter().copied().cycle(), width * height);
    let u_plane = plane_from(samples.iter().rev().copied().cycle(), width * height);
    let v_plane = plane_from(samples.iter().map(|v| !v).cycle(), width * height);

    let image = Yuv444P16Image {
        y_plane: Plane::new(&y_plane, width as u32 * 2),
        u_plane: Plane::new(&u_plane, width as u32 * 2),
        v_plane: Plane::new(&v_plane, width as u32 * 2),
        width: width as u32,
        height: height as u32,
    };

    let range = if full_range {
        YuvRange::Full
    } else {
        YuvRange::Limited
    };
    // Sweeps destination alignment
    let shift = shift as usize % 16;
    let stride = width * YC48_SIZE;
    let mut scalar = vec![0u8; stride * height + shift];
    let mut vector = vec![0u8; stride * height + shift];

    yuv444_p16_to_yc48(&image, &mut scalar[shift..], stride as u32, range, Strategy::Scalar)
        .unwrap();
    yuv444_p16_to_yc48(&image, &mut vector[shift..], stride as u32, range, Strategy::Vector)
        .unwrap();
    assert_eq!(scalar, vector);
}
