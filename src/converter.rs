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
use crate::colorspace::{classify, Classification, OutputClass};
use crate::conversion_error::{check_overflow_v2, check_overflow_v3};
use crate::cpu::CpuCapabilities;
use crate::interlaced_yuy2::interlaced_yuv420_to_yuyv422;
use crate::nv_split::SplitChroma;
use crate::range_normalize::normalize_range;
use crate::scaler::{ScaleDestination, Scaler};
use crate::scratch::alloc_scratch;
use crate::yc48::{yuv444_p16_to_yc48, Strategy};
use crate::{
    ConversionError, DecodedFrame, OutputBuffer, PixelFormat, Plane, PlaneMut, Yuv444P16Image,
    YuvBiPlanarImage, YuvPlanarImage, YuvRange,
};

/// Whether vector kernels may be picked at all
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum VectorPolicy {
    /// Vector kernels whenever the processor and the buffers allow
    #[default]
    Auto,
    ScalarOnly,
}

/// Runtime knobs of a [`Converter`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ConverterOptions {
    /// Host row pitch granularity in bytes
    pub pitch_alignment: usize,
    /// Upper bound on temporary buffers, larger requests fail with [`ConversionError::AllocationFailed`]
    pub scratch_limit: Option<usize>,
    pub vector_policy: VectorPolicy,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            pitch_alignment: 4,
            scratch_limit: None,
            vector_policy: VectorPolicy::Auto,
        }
    }
}

/// Row stride of the 16-bit 4:4:4 intermediate
const YC48_SCRATCH_ALIGNMENT: usize = 16;

/// Delivers decoded frames in the layout the host accepts for their format.
pub struct Converter<S> {
    scaler: S,
    options: ConverterOptions,
}

impl<S: Scaler> Converter<S> {
    pub fn new(scaler: S) -> Converter<S> {
        Converter::with_options(scaler, ConverterOptions::default())
    }

    pub fn with_options(scaler: S, options: ConverterOptions) -> Converter<S> {
        Converter { scaler, options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn scaler_mut(&mut self) -> &mut S {
        &mut self.scaler
    }

    pub fn into_scaler(self) -> S {
        self.scaler
    }

    /// Row bytes rounded up to the host pitch granularity
    pub fn host_pitch(&self, row_bytes: usize) -> usize {
        row_bytes.next_multiple_of(self.options.pitch_alignment.max(1))
    }

    /// Smallest buffer a host has to provide for a frame, in bytes.
    ///
    /// # Errors
    ///
    /// [`ConversionError::PointerOverflow`] when the size does not fit into `usize`.
    pub fn required_output_size(
        &self,
        format: PixelFormat,
        width: u32,
        height: u32,
    ) -> Result<usize, ConversionError> {
        let bytes_per_pixel = classify(format).class.bytes_per_pixel();
        let row_bytes = check_overflow_v2(width as usize, bytes_per_pixel)?;
        check_overflow_v2(self.host_pitch(row_bytes), height as usize)
    }

    fn capabilities(&self) -> CpuCapabilities {
        match self.options.vector_policy {
            VectorPolicy::Auto => CpuCapabilities::get(),
            VectorPolicy::ScalarOnly => CpuCapabilities::none(),
        }
    }

    /// Converts one frame into `output`, returns the number of bytes written.
    ///
    /// The count is the host pitch of one row times the rows actually produced,
    /// which may be fewer than the frame height when the scaler falls short.
    ///
    /// # Errors
    ///
    /// Geometry errors are reported before anything is written. On
    /// [`ConversionError::AllocationFailed`] the frame is abandoned and `output`
    /// must not be trusted.
    pub fn convert(
        &mut self,
        frame: &DecodedFrame,
        output: &mut OutputBuffer,
    ) -> Result<usize, ConversionError> {
        frame.check_size()?;
        let Classification { class, destination } = classify(frame.format);
        let width = frame.width as usize;
        let height = frame.height as usize;
        let row_bytes = check_overflow_v2(width, class.bytes_per_pixel())?;
        output.check_constraints(row_bytes, height)?;

        // Range travels with the frame once the tag is collapsed
        let range = if frame.format.descriptor().full_range {
            YuvRange::Full
        } else {
            frame.range
        };
        let mut source = *frame;
        normalize_range(&mut source.format);
        source.range = range;

        tracing::debug!(
            format = ?frame.format,
            ?class,
            ?destination,
            width,
            height,
            interlaced = frame.interlaced,
            "converting frame"
        );

        let rows = match class {
            OutputClass::Yc48 => self.convert_yc48(&source, destination, output)?,
            OutputClass::Rgba32 | OutputClass::Rgb24 => {
                self.scale_bottom_up(&source, destination, output)
            }
            OutputClass::Yuy2 => self.convert_yuy2(&source, destination, output)?,
        };

        if rows < height {
            tracing::warn!(rows, height, "scaler produced fewer rows than the frame holds");
        }

        check_overflow_v2(self.host_pitch(row_bytes), rows)
    }

    fn convert_yc48(
        &mut self,
        frame: &DecodedFrame,
        destination: PixelFormat,
        output: &mut OutputBuffer,
    ) -> Result<usize, ConversionError> {
        let width = frame.width as usize;
        let height = frame.height as usize;
        let scratch_stride = (width * 2).next_multiple_of(YC48_SCRATCH_ALIGNMENT);
        let plane_size = check_overflow_v2(scratch_stride, height)?;
        let mut scratch = alloc_scratch(
            check_overflow_v3(scratch_stride, height, 3)?,
            self.options.scratch_limit,
        )?;

        let rows = {
            let (y_plane, chroma) = scratch.split_at_mut(plane_size);
            let (u_plane, v_plane) = chroma.split_at_mut(plane_size);
            let mut scale_destination = ScaleDestination {
                format: destination,
                planes: [
                    PlaneMut::new(y_plane, scratch_stride as u32),
                    PlaneMut::new(u_plane, scratch_stride as u32),
                    PlaneMut::new(v_plane, scratch_stride as u32),
                    PlaneMut::empty(),
                ],
                width: frame.width,
                height: frame.height,
                rows: frame.height,
            };
            self.scaler.scale(frame, &mut scale_destination).min(height)
        };
        tracing::trace!(rows, "scaled into yuv444p16 intermediate");

        let image = Yuv444P16Image {
            y_plane: Plane::new(&scratch[..plane_size], scratch_stride as u32),
            u_plane: Plane::new(&scratch[plane_size..plane_size * 2], scratch_stride as u32),
            v_plane: Plane::new(&scratch[plane_size * 2..], scratch_stride as u32),
            width: frame.width,
            height: rows as u32,
        };

        let strategy = Strategy::for_yc48(self.capabilities(), output.data, output.stride);
        tracing::trace!(?strategy, range = ?frame.range, "packing yc48");
        yuv444_p16_to_yc48(&image, output.data, output.stride, frame.range, strategy)?;

        Ok(rows)
    }

    fn scale_bottom_up(
        &mut self,
        frame: &DecodedFrame,
        destination: PixelFormat,
        output: &mut OutputBuffer,
    ) -> usize {
        let height = frame.height as usize;
        // Host rows, the first scaled row lands in the last of them
        let buffer_rows = height.max(output.height as usize);
        let stride = output.stride;
        let data = &mut output.data[..stride as usize * buffer_rows];

        let mut scale_destination = ScaleDestination {
            format: destination,
            planes: [
                PlaneMut::bottom_up(data, stride),
                PlaneMut::empty(),
                PlaneMut::empty(),
                PlaneMut::empty(),
            ],
            width: frame.width,
            height: frame.height,
            rows: buffer_rows as u32,
        };
        let rows = self.scaler.scale(frame, &mut scale_destination).min(height);
        tracing::trace!(rows, "scaled bottom-up");
        rows
    }

    fn convert_yuy2(
        &mut self,
        frame: &DecodedFrame,
        destination: PixelFormat,
        output: &mut OutputBuffer,
    ) -> Result<usize, ConversionError> {
        let interlaced_420 = frame.interlaced
            && (frame.format.is_planar_yuv420() || frame.format.nv_order().is_some());
        if !interlaced_420 {
            let height = frame.height as usize;
            let buffer_rows = height.max(output.height as usize);
            let stride = output.stride;
            let mut scale_destination = ScaleDestination {
                format: destination,
                planes: [
                    PlaneMut::new(&mut output.data[..stride as usize * buffer_rows], stride),
                    PlaneMut::empty(),
                    PlaneMut::empty(),
                    PlaneMut::empty(),
                ],
                width: frame.width,
                height: frame.height,
                rows: buffer_rows as u32,
            };
            let rows = self.scaler.scale(frame, &mut scale_destination).min(height);
            tracing::trace!(rows, "scaled into yuyv422");
            return Ok(rows);
        }

        let strategy = Strategy::for_yuy2(self.capabilities());
        tracing::trace!(?strategy, "interpolating interlaced chroma");

        match frame.format.nv_order() {
            Some(order) => {
                let bi_planar = YuvBiPlanarImage {
                    y_plane: frame.planes[0],
                    uv_plane: frame.planes[1],
                    width: frame.width,
                    height: frame.height,
                };
                let split = SplitChroma::split(&bi_planar, order, self.options.scratch_limit)?;
                interlaced_yuv420_to_yuyv422(
                    &split.as_planar(&bi_planar),
                    output.data,
                    output.stride,
                    strategy,
                )?;
            }
            None => {
                let planar = YuvPlanarImage {
                    y_plane: frame.planes[0],
                    u_plane: frame.planes[1],
                    v_plane: frame.planes[2],
                    width: frame.width,
                    height: frame.height,
                };
                interlaced_yuv420_to_yuyv422(&planar, output.data, output.stride, strategy)?;
            }
        }

        Ok(frame.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yc48::{yc48_pixel, Yc48Coefficients};
    use crate::yuv_support::{RGB24_SIZE, RGBA_SIZE, YC48_SIZE};
    use crate::InterlacedRowPlan;
    use rand::Rng;

    /// Copies plane 0 row by row, or fills 16-bit planes with one triple
    #[derive(Default)]
    struct RecordingScaler {
        calls: usize,
        rows: Option<usize>,
        yuv16: [u16; 3],
        last_destination: Option<PixelFormat>,
    }

    impl Scaler for RecordingScaler {
        fn scale(&mut self, source: &DecodedFrame, destination: &mut ScaleDestination) -> usize {
            self.calls += 1;
            self.last_destination = Some(destination.format);
            let rows = self.rows.unwrap_or(destination.height as usize);
            let width = destination.width as usize;
            match destination.format {
                PixelFormat::Yuv444p16Le => {
                    for plane in 0..3 {
                        let bytes = self.yuv16[plane].to_le_bytes();
                        for y in 0..rows {
                            for pixel in destination.row_mut(plane, y, width * 2).chunks_exact_mut(2) {
                                pixel.copy_from_slice(&bytes);
                            }
                        }
                    }
                }
                format => {
                    let bytes_per_pixel = classify_bytes(format);
                    for y in 0..rows {
                        let src = source.planes[0].row(y, source.height as usize, width * bytes_per_pixel);
                        destination
                            .row_mut(0, y, width * bytes_per_pixel)
                            .copy_from_slice(src);
                    }
                }
            }
            rows
        }
    }

    fn classify_bytes(format: PixelFormat) -> usize {
        match format {
            PixelFormat::Bgra => RGBA_SIZE,
            PixelFormat::Bgr24 => RGB24_SIZE,
            _ => 2,
        }
    }

    fn decoded_frame<'a>(
        planes: [Plane<'a>; 4],
        format: PixelFormat,
        width: u32,
        height: u32,
        interlaced: bool,
    ) -> DecodedFrame<'a> {
        DecodedFrame {
            planes,
            width,
            height,
            format,
            interlaced,
            range: YuvRange::Limited,
        }
    }

    #[test]
    fn test_host_pitch_and_required_size() {
        let converter = Converter::new(RecordingScaler::default());
        assert_eq!(converter.host_pitch(0), 0);
        assert_eq!(converter.host_pitch(9), 12);
        assert_eq!(converter.host_pitch(12), 12);
        assert_eq!(
            converter.required_output_size(PixelFormat::Rgb24, 3, 2).unwrap(),
            12 * 2
        );
        assert_eq!(
            converter.required_output_size(PixelFormat::Yuv444p10Le, 5, 3).unwrap(),
            32 * 3
        );
        assert_eq!(
            converter.required_output_size(PixelFormat::Yuv420p, u32::MAX, u32::MAX),
            Err(ConversionError::PointerOverflow)
        );
    }

    #[test]
    fn test_rgb_marker_lands_bottom_left() {
        let width = 3usize;
        let height = 4usize;
        let stride = width * RGB24_SIZE;
        let mut source = vec![0u8; stride * height];
        source[..3].copy_from_slice(&[1, 2, 3]);
        let frame = decoded_frame(
            [Plane::new(&source, stride as u32), Plane::EMPTY, Plane::EMPTY, Plane::EMPTY],
            PixelFormat::Rgb24,
            width as u32,
            height as u32,
            false,
        );

        let mut converter = Converter::new(RecordingScaler::default());
        let out_stride = converter.host_pitch(stride);
        let mut data = vec![0u8; out_stride * height];
        let written = converter
            .convert(
                &frame,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: out_stride as u32,
                    height: height as u32,
                },
            )
            .unwrap();

        assert_eq!(written, out_stride * height);
        assert_eq!(&data[(height - 1) * out_stride..][..3], &[1, 2, 3]);
        assert!(data[..(height - 1) * out_stride].iter().all(|&v| v == 0));
        assert_eq!(converter.scaler_mut().last_destination, Some(PixelFormat::Bgr24));
    }

    #[test]
    fn test_rgba_flip_uses_host_height() {
        let width = 2usize;
        let stride = width * RGBA_SIZE;
        let source: Vec<u8> = (0..(stride * 2) as u8).collect();
        let frame = decoded_frame(
            [Plane::new(&source, stride as u32), Plane::EMPTY, Plane::EMPTY, Plane::EMPTY],
            PixelFormat::Rgba,
            width as u32,
            2,
            false,
        );
        let mut converter = Converter::new(RecordingScaler::default());
        let mut data = vec![0u8; stride * 3];
        let written = converter
            .convert(
                &frame,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: stride as u32,
                    height: 3,
                },
            )
            .unwrap();
        assert_eq!(written, stride * 2);
        assert_eq!(&data[2 * stride..], &source[..stride]);
        assert_eq!(&data[stride..2 * stride], &source[stride..]);
        assert!(data[..stride].iter().all(|&v| v == 0));
    }

    #[test]
    fn test_yc48_path_packs_scaler_output() {
        for range in [YuvRange::Limited, YuvRange::Full] {
            let width = 5usize;
            let height = 3usize;
            let planes = vec![0u8; width * height];
            let mut frame = decoded_frame(
                [
                    Plane::new(&planes, width as u32),
                    Plane::new(&planes, width as u32),
                    Plane::new(&planes, width as u32),
                    Plane::EMPTY,
                ],
                PixelFormat::Yuv444p,
                width as u32,
                height as u32,
                false,
            );
            frame.range = range;

            let yuv16 = [40000u16, 20000, 50000];
            let mut converter = Converter::new(RecordingScaler {
                yuv16,
                ..Default::default()
            });
            let row_bytes = width * YC48_SIZE;
            let stride = converter.host_pitch(row_bytes);
            let mut data = vec![0u8; stride * height];
            let written = converter
                .convert(
                    &frame,
                    &mut OutputBuffer {
                        data: &mut data,
                        stride: stride as u32,
                        height: height as u32,
                    },
                )
                .unwrap();
            assert_eq!(written, stride * height);

            let expected = yc48_pixel(yuv16[0], yuv16[1], yuv16[2], &Yc48Coefficients::new(range));
            let expected: Vec<u8> = expected.iter().flat_map(|v| v.to_le_bytes()).collect();
            for y in 0..height {
                for pixel in data[y * stride..][..row_bytes].chunks_exact(YC48_SIZE) {
                    assert_eq!(pixel, expected.as_slice());
                }
            }
        }
    }

    #[test]
    fn test_jpeg_tag_packs_full_range() {
        let planes = vec![0u8; 4];
        let frame = decoded_frame(
            [
                Plane::new(&planes, 2),
                Plane::new(&planes, 2),
                Plane::new(&planes, 2),
                Plane::EMPTY,
            ],
            PixelFormat::Yuvj444p,
            2,
            2,
            false,
        );
        let yuv16 = [65535u16, 32768, 32768];
        let mut converter = Converter::new(RecordingScaler {
            yuv16,
            ..Default::default()
        });
        let mut data = vec![0u8; 12 * 2];
        converter
            .convert(
                &frame,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: 12,
                    height: 2,
                },
            )
            .unwrap();
        assert_eq!(i16::from_le_bytes([data[0], data[1]]), 4470);
    }

    #[test]
    fn test_short_scaler_output_reduces_byte_count() {
        let planes = vec![0u8; 16];
        let frame = decoded_frame(
            [
                Plane::new(&planes, 4),
                Plane::new(&planes, 4),
                Plane::new(&planes, 4),
                Plane::EMPTY,
            ],
            PixelFormat::Yuv444p16Le,
            2,
            4,
            false,
        );
        let mut converter = Converter::new(RecordingScaler {
            rows: Some(1),
            ..Default::default()
        });
        let mut data = vec![0u8; 12 * 4];
        let written = converter
            .convert(
                &frame,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: 12,
                    height: 4,
                },
            )
            .unwrap();
        assert_eq!(written, 12);

        converter.scaler_mut().rows = Some(0);
        let written = converter
            .convert(
                &frame,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: 12,
                    height: 4,
                },
            )
            .unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_allocation_failure_writes_nothing() {
        let planes = vec![0u8; 64];
        let frame = decoded_frame(
            [
                Plane::new(&planes, 8),
                Plane::new(&planes, 8),
                Plane::new(&planes, 8),
                Plane::EMPTY,
            ],
            PixelFormat::Yuv444p,
            8,
            8,
            false,
        );
        let mut converter = Converter::with_options(
            RecordingScaler::default(),
            ConverterOptions {
                scratch_limit: Some(0),
                ..Default::default()
            },
        );
        let mut data = vec![0xC3u8; 48 * 8];
        let result = converter.convert(
            &frame,
            &mut OutputBuffer {
                data: &mut data,
                stride: 48,
                height: 8,
            },
        );
        assert!(matches!(result, Err(ConversionError::AllocationFailed { .. })));
        assert_eq!(converter.scaler_mut().calls, 0);
        assert!(data.iter().all(|&v| v == 0xC3));

        // Semi-planar interlaced frames need scratch as well
        let uv = vec![0u8; 32];
        let nv12 = decoded_frame(
            [Plane::new(&planes, 8), Plane::new(&uv, 8), Plane::EMPTY, Plane::EMPTY],
            PixelFormat::Nv12,
            8,
            8,
            true,
        );
        let mut data = vec![0xC3u8; 16 * 8];
        let result = converter.convert(
            &nv12,
            &mut OutputBuffer {
                data: &mut data,
                stride: 16,
                height: 8,
            },
        );
        assert!(matches!(result, Err(ConversionError::AllocationFailed { .. })));
        assert!(data.iter().all(|&v| v == 0xC3));
    }

    #[test]
    fn test_rejects_small_output_before_scaling() {
        let source = vec![0u8; 12];
        let frame = decoded_frame(
            [Plane::new(&source, 6), Plane::EMPTY, Plane::EMPTY, Plane::EMPTY],
            PixelFormat::Bgr24,
            2,
            2,
            false,
        );
        let mut converter = Converter::new(RecordingScaler::default());
        let mut data = vec![0u8; 8 * 2];
        let result = converter.convert(
            &frame,
            &mut OutputBuffer {
                data: &mut data,
                stride: 8,
                height: 3,
            },
        );
        assert!(matches!(
            result,
            Err(ConversionError::DestinationSizeMismatch(_))
        ));
        assert_eq!(converter.scaler_mut().calls, 0);

        let empty = frame_with_size(0, 2);
        assert_eq!(
            converter.convert(
                &empty,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: 8,
                    height: 2,
                },
            ),
            Err(ConversionError::ZeroBaseSize)
        );
    }

    fn frame_with_size(width: u32, height: u32) -> DecodedFrame<'static> {
        decoded_frame(
            [Plane::EMPTY; 4],
            PixelFormat::Bgr24,
            width,
            height,
            false,
        )
    }

    #[test]
    fn test_progressive_yuv420_goes_through_scaler() {
        let planes = vec![0u8; 4 * 4 * 2];
        let frame = decoded_frame(
            [Plane::new(&planes, 8), Plane::EMPTY, Plane::EMPTY, Plane::EMPTY],
            PixelFormat::Yuv420p,
            4,
            4,
            false,
        );
        let mut converter = Converter::new(RecordingScaler::default());
        let mut data = vec![0u8; 8 * 4];
        let written = converter
            .convert(
                &frame,
                &mut OutputBuffer {
                    data: &mut data,
                    stride: 8,
                    height: 4,
                },
            )
            .unwrap();
        assert_eq!(written, 32);
        assert_eq!(converter.scaler_mut().calls, 1);
        assert_eq!(converter.scaler_mut().last_destination, Some(PixelFormat::Yuyv422));
    }

    #[test]
    fn test_interlaced_nv21_matches_planar() {
        let mut rng = rand::rng();
        let width = 36usize;
        let height = 12usize;
        let chroma_width = width / 2;
        let chroma_height = height / 2;
        let y: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
        let u: Vec<u8> = (0..chroma_width * chroma_height).map(|_| rng.random()).collect();
        let v: Vec<u8> = (0..chroma_width * chroma_height).map(|_| rng.random()).collect();
        let vu: Vec<u8> = v
            .iter()
            .zip(u.iter())
            .flat_map(|(&v, &u)| [v, u])
            .collect();

        let planar = decoded_frame(
            [
                Plane::new(&y, width as u32),
                Plane::new(&u, chroma_width as u32),
                Plane::new(&v, chroma_width as u32),
                Plane::EMPTY,
            ],
            PixelFormat::Yuvj420p,
            width as u32,
            height as u32,
            true,
        );
        let nv21 = decoded_frame(
            [
                Plane::new(&y, width as u32),
                Plane::new(&vu, width as u32),
                Plane::EMPTY,
                Plane::EMPTY,
            ],
            PixelFormat::Nv21,
            width as u32,
            height as u32,
            true,
        );

        let stride = width * 2;
        let mut converter = Converter::new(RecordingScaler::default());
        let mut from_planar = vec![0u8; stride * height];
        let mut from_nv21 = vec![0u8; stride * height];
        for (frame, data) in [(&planar, &mut from_planar), (&nv21, &mut from_nv21)] {
            let written = converter
                .convert(
                    frame,
                    &mut OutputBuffer {
                        data,
                        stride: stride as u32,
                        height: height as u32,
                    },
                )
                .unwrap();
            assert_eq!(written, stride * height);
        }
        assert_eq!(converter.scaler_mut().calls, 0);
        assert_eq!(from_planar, from_nv21);

        // Row 3 blends chroma rows 1 and 3 by 7/1
        let taps = InterlacedRowPlan::for_row(3, height);
        let expected = (7 * u[chroma_width + 5] as u32 + u[3 * chroma_width + 5] as u32 + 4) >> 3;
        assert_eq!(taps.first, 1);
        assert_eq!(from_nv21[3 * stride + 5 * 4 + 1] as u32, expected);
        assert_eq!(from_nv21[3 * stride + 5 * 4], y[3 * width + 10]);
    }

    #[test]
    fn test_scalar_only_policy_matches_auto() {
        let mut rng = rand::rng();
        let width = 50usize;
        let height = 10usize;
        let y: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
        let chroma: Vec<u8> = (0..width * height / 4).map(|_| rng.random()).collect();
        let frame = decoded_frame(
            [
                Plane::new(&y, width as u32),
                Plane::new(&chroma, width as u32 / 2),
                Plane::new(&chroma, width as u32 / 2),
                Plane::EMPTY,
            ],
            PixelFormat::Yuv420p,
            width as u32,
            height as u32,
            true,
        );
        let mut outputs = Vec::new();
        for vector_policy in [VectorPolicy::Auto, VectorPolicy::ScalarOnly] {
            let mut converter = Converter::with_options(
                RecordingScaler::default(),
                ConverterOptions {
                    vector_policy,
                    ..Default::default()
                },
            );
            let mut data = vec![0u8; width * 2 * height];
            converter
                .convert(
                    &frame,
                    &mut OutputBuffer {
                        data: &mut data,
                        stride: width as u32 * 2,
                        height: height as u32,
                    },
                )
                .unwrap();
            outputs.push(data);
        }
        assert_eq!(outputs[0], outputs[1]);
    }
}
