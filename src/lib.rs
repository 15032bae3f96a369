mod colorspace;
mod conversion_error;
mod converter;
mod cpu;
mod images;
mod interlaced_yuy2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
mod nv_split;
mod pixel_format;
mod range_normalize;
mod scaler;
mod scratch;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;
mod yc48;
mod yuv_support;

pub use yuv_support::RowOrder;
pub use yuv_support::YuvNVOrder;
pub use yuv_support::YuvRange;
pub use yuv_support::{RGB24_SIZE, RGBA_SIZE, YC48_SIZE, YUY2_SIZE};

pub use conversion_error::ConversionError;
pub use conversion_error::MismatchedSize;

pub use images::DecodedFrame;
pub use images::OutputBuffer;
pub use images::Plane;
pub use images::PlaneMut;
pub use images::Yuv444P16Image;
pub use images::YuvBiPlanarImage;
pub use images::YuvPlanarImage;

pub use pixel_format::ColorFamily;
pub use pixel_format::PixelFormat;
pub use pixel_format::PixelFormatDescriptor;
pub use pixel_format::PlaneLayout;

pub use range_normalize::normalize_range;

pub use colorspace::classify;
pub use colorspace::Classification;
pub use colorspace::OutputClass;

pub use cpu::CpuCapabilities;

pub use yc48::yuv444_p16_to_yc48;
pub use yc48::Strategy;

pub use nv_split::split_nv_chroma;
pub use nv_split::SplitChroma;

pub use interlaced_yuy2::interlaced_yuv420_to_yuyv422;
pub use interlaced_yuy2::InterlacedRowPlan;

pub use scaler::scaler_fn;
pub use scaler::FnScaler;
pub use scaler::ScaleDestination;
pub use scaler::Scaler;

pub use converter::Converter;
pub use converter::ConverterOptions;
pub use converter::VectorPolicy;
