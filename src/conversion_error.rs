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

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Failures reported by the conversion layer.
///
/// Only [`ConversionError::AllocationFailed`] can happen on well-formed input,
/// everything else describes a frame or destination that does not match its declared geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Scratch memory for the intermediate buffer could not be obtained, the frame is abandoned
    AllocationFailed { bytes: usize },
    ZeroBaseSize,
    PointerOverflow,
    /// Plane at this index is required by the format but is empty
    MissingPlane(usize),
    PlaneSizeMismatch { plane: usize, size: MismatchedSize },
    StrideTooSmall { plane: usize, size: MismatchedSize },
    DestinationSizeMismatch(MismatchedSize),
    DestinationStrideTooSmall(MismatchedSize),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::AllocationFailed { bytes } => f.write_fmt(format_args!(
                "Failed to allocate {} bytes of scratch memory for the conversion",
                bytes
            )),
            ConversionError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            ConversionError::PointerOverflow => {
                f.write_str("Image size overflow pointer capabilities")
            }
            ConversionError::MissingPlane(plane) => {
                f.write_fmt(format_args!("Plane {} is required but it is empty", plane))
            }
            ConversionError::PlaneSizeMismatch { plane, size } => f.write_fmt(format_args!(
                "Plane {} have invalid size, it must be at least {}, but it was {}",
                plane, size.expected, size.received
            )),
            ConversionError::StrideTooSmall { plane, size } => f.write_fmt(format_args!(
                "Plane {} stride must be at least {}, but it was {}",
                plane, size.expected, size.received
            )),
            ConversionError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            ConversionError::DestinationStrideTooSmall(size) => f.write_fmt(format_args!(
                "Destination stride must be at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for ConversionError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, ConversionError> {
    v0.checked_mul(v1).ok_or(ConversionError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, ConversionError> {
    check_overflow_v2(check_overflow_v2(v0, v1)?, v2)
}

/// Checks that a plane holding `rows` rows of `row_elements` elements each,
/// `stride` elements apart, fits into `len` elements.
#[inline]
pub(crate) fn check_plane(
    plane: usize,
    len: usize,
    stride: usize,
    row_elements: usize,
    rows: usize,
) -> Result<(), ConversionError> {
    if rows == 0 || row_elements == 0 {
        return Ok(());
    }
    if len == 0 {
        return Err(ConversionError::MissingPlane(plane));
    }
    if stride < row_elements {
        return Err(ConversionError::StrideTooSmall {
            plane,
            size: MismatchedSize {
                expected: row_elements,
                received: stride,
            },
        });
    }
    // Last row only has to hold its visible elements
    let required = check_overflow_v2(stride, rows - 1)?
        .checked_add(row_elements)
        .ok_or(ConversionError::PointerOverflow)?;
    if len < required {
        return Err(ConversionError::PlaneSizeMismatch {
            plane,
            size: MismatchedSize {
                expected: required,
                received: len,
            },
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_destination(
    len: usize,
    stride: usize,
    row_bytes: usize,
    rows: usize,
) -> Result<(), ConversionError> {
    if stride < row_bytes {
        return Err(ConversionError::DestinationStrideTooSmall(MismatchedSize {
            expected: row_bytes,
            received: stride,
        }));
    }
    let required = check_overflow_v2(stride, rows)?;
    if len < required {
        return Err(ConversionError::DestinationSizeMismatch(MismatchedSize {
            expected: required,
            received: len,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_plane_accepts_short_last_row() {
        assert_eq!(check_plane(0, 16 * 3 + 10, 16, 10, 4), Ok(()));
        assert!(matches!(
            check_plane(0, 16 * 3 + 9, 16, 10, 4),
            Err(ConversionError::PlaneSizeMismatch { plane: 0, .. })
        ));
    }

    #[test]
    fn test_check_plane_reports_missing_and_narrow() {
        assert_eq!(
            check_plane(2, 0, 16, 10, 4),
            Err(ConversionError::MissingPlane(2))
        );
        assert!(matches!(
            check_plane(1, 1024, 8, 10, 4),
            Err(ConversionError::StrideTooSmall { plane: 1, .. })
        ));
    }

    #[test]
    fn test_check_destination() {
        assert_eq!(check_destination(64 * 4, 64, 60, 4), Ok(()));
        assert!(check_destination(64 * 4 - 1, 64, 60, 4).is_err());
        assert!(check_destination(1024, 32, 60, 4).is_err());
        assert_eq!(
            check_overflow_v3(usize::MAX, 2, 1),
            Err(ConversionError::PointerOverflow)
        );
    }
}
