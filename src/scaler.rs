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

use crate::{DecodedFrame, PixelFormat, PlaneMut};

/// Destination handed to the generic scaler.
///
/// Planes carry their own [`crate::RowOrder`], write rows through [`ScaleDestination::row_mut`]
/// so bottom-up hosts are served without signed strides.
#[derive(Debug)]
pub struct ScaleDestination<'a> {
    /// Layout the scaler has to produce
    pub format: PixelFormat,
    pub planes: [PlaneMut<'a>; 4],
    pub width: u32,
    /// Rows to produce
    pub height: u32,
    /// Rows available in every plane, never less than `height`
    pub rows: u32,
}

impl ScaleDestination<'_> {
    /// Logical row `y` of `plane`, `row_bytes` long.
    ///
    /// # Panics
    ///
    /// Panics if the row is outside of the plane.
    pub fn row_mut(&mut self, plane: usize, y: usize, row_bytes: usize) -> &mut [u8] {
        let rows = self.rows as usize;
        self.planes[plane].row_mut(y, rows, row_bytes)
    }
}

/// Generic pixel format converter the core delegates everything it does not pack itself to.
pub trait Scaler {
    /// Converts `source` into `destination`, returns the number of rows produced.
    ///
    /// Zero rows is how a scaler reports failure.
    fn scale(&mut self, source: &DecodedFrame, destination: &mut ScaleDestination) -> usize;
}

impl<S: Scaler + ?Sized> Scaler for &mut S {
    fn scale(&mut self, source: &DecodedFrame, destination: &mut ScaleDestination) -> usize {
        (**self).scale(source, destination)
    }
}

impl<S: Scaler + ?Sized> Scaler for Box<S> {
    fn scale(&mut self, source: &DecodedFrame, destination: &mut ScaleDestination) -> usize {
        (**self).scale(source, destination)
    }
}

/// Scaler built from a closure, see [`scaler_fn`]
#[derive(Debug, Copy, Clone)]
pub struct FnScaler<F>(F);

/// Wraps a closure into a [`Scaler`].
pub fn scaler_fn<F>(f: F) -> FnScaler<F>
where
    F: FnMut(&DecodedFrame<'_>, &mut ScaleDestination<'_>) -> usize,
{
    FnScaler(f)
}

impl<F> Scaler for FnScaler<F>
where
    F: FnMut(&DecodedFrame<'_>, &mut ScaleDestination<'_>) -> usize,
{
    fn scale(&mut self, source: &DecodedFrame, destination: &mut ScaleDestination) -> usize {
        (self.0)(source, destination)
    }
}
