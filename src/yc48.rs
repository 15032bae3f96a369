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

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_yuv444_p16_to_yc48_row;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_yuv444_p16_to_yc48_row;
use crate::conversion_error::check_destination;
use crate::cpu::CpuCapabilities;
use crate::yuv_support::YC48_SIZE;
use crate::{ConversionError, Yuv444P16Image, YuvRange};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Which implementation of a kernel runs
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    Scalar,
    /// SSE/NEON kernel, rows tails are finished by the scalar code.
    /// Falls back to `Scalar` when no kernel was compiled for the target.
    Vector,
}

impl Strategy {
    /// Vector packing requires the SIMD tier and a 16 byte aligned destination base and stride
    pub fn for_yc48(capabilities: CpuCapabilities, dst: &[u8], dst_stride: u32) -> Strategy {
        let aligned = ((dst.as_ptr() as usize) | dst_stride as usize) & 15 == 0;
        if capabilities.simd128 && aligned {
            Strategy::Vector
        } else {
            Strategy::Scalar
        }
    }

    /// Interpolation only depends on the shuffle tier
    pub fn for_yuy2(capabilities: CpuCapabilities) -> Strategy {
        if capabilities.byte_shuffle {
            Strategy::Vector
        } else {
            Strategy::Scalar
        }
    }
}

/// Fixed point transform from 16-bit YUV into the YC48 scale
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Yc48Coefficients {
    pub(crate) y_coef: i32,
    pub(crate) y_shift: u32,
    pub(crate) uv_coef: i32,
    pub(crate) uv_offset: i32,
}

pub(crate) const YC48_Y_BIAS: i32 = 299;

impl Yc48Coefficients {
    pub(crate) const LIMITED: Yc48Coefficients = Yc48Coefficients {
        y_coef: 1197,
        y_shift: 14,
        uv_coef: 4682,
        uv_offset: 32768,
    };

    pub(crate) const FULL: Yc48Coefficients = Yc48Coefficients {
        y_coef: 4770,
        y_shift: 16,
        uv_coef: 4662,
        uv_offset: 589824,
    };

    pub(crate) const fn new(range: YuvRange) -> Yc48Coefficients {
        match range {
            YuvRange::Limited => Yc48Coefficients::LIMITED,
            YuvRange::Full => Yc48Coefficients::FULL,
        }
    }

    /// Luma multiplier rescaled so that a high half multiply performs the shift
    #[allow(dead_code)]
    pub(crate) const fn y_mulhi(&self) -> u16 {
        (self.y_coef << (16 - self.y_shift)) as u16
    }
}

#[inline(always)]
pub(crate) fn yc48_pixel(y: u16, u: u16, v: u16, coeffs: &Yc48Coefficients) -> [i16; 3] {
    let y = ((y as i32 * coeffs.y_coef) >> coeffs.y_shift) - YC48_Y_BIAS;
    let cb = ((u as i32 - 32768) * coeffs.uv_coef + coeffs.uv_offset) >> 16;
    let cr = ((v as i32 - 32768) * coeffs.uv_coef + coeffs.uv_offset) >> 16;
    // YC48 stores 16 bits, anything wider wraps
    [y as i16, cb as i16, cr as i16]
}

/// Packs pixels `start..width` of one row, returns nothing since rows are always finished.
#[inline(always)]
pub(crate) fn yc48_row_scalar(
    y_src: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    dst: &mut [u8],
    start: usize,
    width: usize,
    coeffs: &Yc48Coefficients,
) {
    let y_src = &y_src[start * 2..width * 2];
    let u_src = &u_src[start * 2..width * 2];
    let v_src = &v_src[start * 2..width * 2];
    let dst = &mut dst[start * YC48_SIZE..width * YC48_SIZE];

    for (((dst, y), u), v) in dst
        .chunks_exact_mut(YC48_SIZE)
        .zip(y_src.chunks_exact(2))
        .zip(u_src.chunks_exact(2))
        .zip(v_src.chunks_exact(2))
    {
        let [y, cb, cr] = yc48_pixel(
            u16::from_le_bytes([y[0], y[1]]),
            u16::from_le_bytes([u[0], u[1]]),
            u16::from_le_bytes([v[0], v[1]]),
            coeffs,
        );
        dst[0..2].copy_from_slice(&y.to_le_bytes());
        dst[2..4].copy_from_slice(&cb.to_le_bytes());
        dst[4..6].copy_from_slice(&cr.to_le_bytes());
    }
}

fn yc48_row(
    y_src: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    dst: &mut [u8],
    width: usize,
    coeffs: &Yc48Coefficients,
    _strategy: Strategy,
) {
    let mut _cx = 0usize;

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        if _strategy == Strategy::Vector && CpuCapabilities::get().simd128 {
            _cx = sse_yuv444_p16_to_yc48_row(y_src, u_src, v_src, dst, width, coeffs);
        }
    }

    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        if _strategy == Strategy::Vector {
            _cx = neon_yuv444_p16_to_yc48_row(y_src, u_src, v_src, dst, width, coeffs);
        }
    }

    yc48_row_scalar(y_src, u_src, v_src, dst, _cx, width, coeffs);
}

/// Convert planar YUV 4:4:4 16-bit little-endian into packed YC48.
///
/// Each pixel becomes three signed little-endian 16-bit values Y, Cb, Cr
/// scaled by the fixed point transform selected by `range`.
/// Both strategies produce byte identical output.
///
/// # Arguments
///
/// * `planar_image` - Source image, `height` is the number of rows packed.
/// * `yc48_store` - A mutable slice to store the converted YC48 data.
/// * `yc48_stride` - The stride (bytes per row) for the YC48 plane.
/// * `range` - Range of the samples, see [YuvRange] for more info.
/// * `strategy` - Kernel to run, see [Strategy::for_yc48] to pick one.
///
/// # Errors
///
/// Returns an error if any plane or the destination is too small for the declared geometry,
/// nothing is written in that case.
pub fn yuv444_p16_to_yc48(
    planar_image: &Yuv444P16Image,
    yc48_store: &mut [u8],
    yc48_stride: u32,
    range: YuvRange,
    strategy: Strategy,
) -> Result<(), ConversionError> {
    planar_image.check_constraints()?;
    let width = planar_image.width as usize;
    let rows = planar_image.height as usize;
    let row_bytes = width * YC48_SIZE;
    check_destination(yc48_store.len(), yc48_stride as usize, row_bytes, rows)?;
    if rows == 0 || width == 0 {
        return Ok(());
    }

    let coeffs = Yc48Coefficients::new(range);
    let stride = yc48_stride as usize;
    let dst = &mut yc48_store[..stride * rows];

    let y_plane = planar_image.y_plane;
    let u_plane = planar_image.u_plane;
    let v_plane = planar_image.v_plane;

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(stride);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(stride);
    }

    iter.enumerate().for_each(|(y, dst)| {
        yc48_row(
            y_plane.row(y, rows, width * 2),
            u_plane.row(y, rows, width * 2),
            v_plane.row(y, rows, width * 2),
            &mut dst[..row_bytes],
            width,
            &coeffs,
            strategy,
        );
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Plane;
    use rand::Rng;

    fn le_plane(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    fn read_i16(bytes: &[u8], index: usize) -> i16 {
        i16::from_le_bytes([bytes[index * 2], bytes[index * 2 + 1]])
    }

    #[test]
    fn test_mid_grey_limited() {
        // (32768 * 1197) >> 14 = 2394
        assert_eq!(
            yc48_pixel(32768, 32768, 32768, &Yc48Coefficients::LIMITED),
            [2095, 0, 0]
        );
    }

    #[test]
    fn test_range_constants_differ() {
        // Full range: (65535 * 4770) >> 16 - 299
        assert_eq!(yc48_pixel(65535, 0, 65535, &Yc48Coefficients::FULL)[0], 4470);
        assert_eq!(yc48_pixel(0, 0, 65535, &Yc48Coefficients::FULL)[1], -2322);
        assert_eq!(yc48_pixel(0, 0, 65535, &Yc48Coefficients::FULL)[2], 2339);
        assert_eq!(yc48_pixel(0, 0, 65535, &Yc48Coefficients::LIMITED)[0], -299);
        assert_eq!(yc48_pixel(0, 0, 65535, &Yc48Coefficients::LIMITED)[1], -2341);
        assert_eq!(yc48_pixel(0, 0, 65535, &Yc48Coefficients::LIMITED)[2], 2341);
    }

    #[test]
    fn test_mulhi_equivalence() {
        for coeffs in [Yc48Coefficients::LIMITED, Yc48Coefficients::FULL] {
            for y in (0..=u16::MAX).step_by(7) {
                let exact = (y as i32 * coeffs.y_coef) >> coeffs.y_shift;
                let mulhi = (y as u32 * coeffs.y_mulhi() as u32) >> 16;
                assert_eq!(exact, mulhi as i32);
            }
        }
    }

    #[test]
    fn test_packed_layout() {
        let width = 3usize;
        let y = le_plane(&[0, 32768, 65535]);
        let u = le_plane(&[32768, 0, 65535]);
        let v = le_plane(&[32768, 65535, 0]);
        let image = Yuv444P16Image {
            y_plane: Plane::new(&y, 6),
            u_plane: Plane::new(&u, 6),
            v_plane: Plane::new(&v, 6),
            width: width as u32,
            height: 1,
        };
        let mut dst = vec![0u8; width * YC48_SIZE];
        yuv444_p16_to_yc48(&image, &mut dst, 18, YuvRange::Limited, Strategy::Scalar).unwrap();
        for x in 0..width {
            let expected = yc48_pixel(
                u16::from_le_bytes([y[x * 2], y[x * 2 + 1]]),
                u16::from_le_bytes([u[x * 2], u[x * 2 + 1]]),
                u16::from_le_bytes([v[x * 2], v[x * 2 + 1]]),
                &Yc48Coefficients::LIMITED,
            );
            assert_eq!(read_i16(&dst, x * 3), expected[0]);
            assert_eq!(read_i16(&dst, x * 3 + 1), expected[1]);
            assert_eq!(read_i16(&dst, x * 3 + 2), expected[2]);
        }
    }

    #[test]
    fn test_scalar_and_vector_match() {
        let mut rng = rand::rng();
        for _ in 0..24 {
            let width = rng.random_range(1..77usize);
            let height = rng.random_range(1..9usize);
            let src_stride = width * 2 + rng.random_range(0..9usize) * 2;
            let range = if rng.random_bool(0.5) {
                YuvRange::Full
            } else {
                YuvRange::Limited
            };
            let planes: Vec<Vec<u8>> = (0..3)
                .map(|_| (0..src_stride * height).map(|_| rng.random()).collect())
                .collect();
            let image = Yuv444P16Image {
                y_plane: Plane::new(&planes[0], src_stride as u32),
                u_plane: Plane::new(&planes[1], src_stride as u32),
                v_plane: Plane::new(&planes[2], src_stride as u32),
                width: width as u32,
                height: height as u32,
            };

            let dst_stride = width * YC48_SIZE + rng.random_range(0..5usize);
            // Shift the destination base to sweep alignments
            let shift = rng.random_range(0..16usize);
            let mut scalar = vec![0u8; dst_stride * height + shift];
            let mut vector = vec![0u8; dst_stride * height + shift];

            yuv444_p16_to_yc48(
                &image,
                &mut scalar[shift..],
                dst_stride as u32,
                range,
                Strategy::Scalar,
            )
            .unwrap();
            yuv444_p16_to_yc48(
                &image,
                &mut vector[shift..],
                dst_stride as u32,
                range,
                Strategy::Vector,
            )
            .unwrap();
            assert_eq!(scalar, vector);
        }
    }

    #[test]
    fn test_strategy_requires_alignment() {
        let capable = CpuCapabilities {
            simd128: true,
            byte_shuffle: true,
        };
        #[repr(align(16))]
        struct Aligned([u8; 64]);
        let buffer = Aligned([0u8; 64]);
        assert_eq!(Strategy::for_yc48(capable, &buffer.0, 32), Strategy::Vector);
        assert_eq!(Strategy::for_yc48(capable, &buffer.0, 24), Strategy::Scalar);
        assert_eq!(Strategy::for_yc48(capable, &buffer.0[1..], 32), Strategy::Scalar);
        assert_eq!(
            Strategy::for_yc48(CpuCapabilities::none(), &buffer.0, 32),
            Strategy::Scalar
        );
        assert_eq!(Strategy::for_yuy2(capable), Strategy::Vector);
        assert_eq!(Strategy::for_yuy2(CpuCapabilities::none()), Strategy::Scalar);
    }

    #[test]
    fn test_rejects_short_destination() {
        let y = le_plane(&[0; 4]);
        let image = Yuv444P16Image {
            y_plane: Plane::new(&y, 8),
            u_plane: Plane::new(&y, 8),
            v_plane: Plane::new(&y, 8),
            width: 4,
            height: 1,
        };
        let mut dst = vec![0xAAu8; 23];
        assert!(
            yuv444_p16_to_yc48(&image, &mut dst, 24, YuvRange::Full, Strategy::Scalar).is_err()
        );
        assert!(dst.iter().all(|&v| v == 0xAA));
    }
}
