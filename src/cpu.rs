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

use std::sync::OnceLock;

/// Vector instruction tiers available on the running processor.
///
/// On x86 `simd128` means SSE4.1 and `byte_shuffle` means SSSE3,
/// on aarch64 both mean NEON. Tiers are only reported when the kernels for them were compiled in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CpuCapabilities {
    /// Tier used by the YC48 packer
    pub simd128: bool,
    /// Tier used by the interlaced YUY2 interpolator
    pub byte_shuffle: bool,
}

impl CpuCapabilities {
    /// Probes the processor once, every later call returns the cached answer.
    pub fn get() -> CpuCapabilities {
        static CAPABILITIES: OnceLock<CpuCapabilities> = OnceLock::new();
        *CAPABILITIES.get_or_init(|| {
            let capabilities = CpuCapabilities::probe();
            tracing::debug!(
                simd128 = capabilities.simd128,
                byte_shuffle = capabilities.byte_shuffle,
                "probed cpu capabilities"
            );
            capabilities
        })
    }

    /// Capabilities of a processor without any vector unit
    pub const fn none() -> CpuCapabilities {
        CpuCapabilities {
            simd128: false,
            byte_shuffle: false,
        }
    }

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    fn probe() -> CpuCapabilities {
        CpuCapabilities {
            simd128: std::arch::is_x86_feature_detected!("sse4.1"),
            byte_shuffle: std::arch::is_x86_feature_detected!("ssse3"),
        }
    }

    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    fn probe() -> CpuCapabilities {
        let neon = std::arch::is_aarch64_feature_detected!("neon");
        CpuCapabilities {
            simd128: neon,
            byte_shuffle: neon,
        }
    }

    #[cfg(not(any(
        all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"),
        all(target_arch = "aarch64", target_feature = "neon")
    )))]
    fn probe() -> CpuCapabilities {
        CpuCapabilities::none()
    }
}
