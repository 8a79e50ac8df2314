//! Dithering algorithms.
//!
//! Every algorithm quantizes against the grid-nearest palette
//! ([`GridNearest`]) and rewrites the image in place, leaving each pixel
//! equal to a palette color. Final byte encoding happens later, in
//! [`crate::output`].
//!
//! # Algorithms
//!
//! - **Floyd-Steinberg**: 4 neighbors, 100% propagation
//! - **Jarvis-Judice-Ninke**: 12 neighbors over three rows, 100% propagation
//! - **Atkinson**: 6 neighbors, 75% propagation
//! - **Bayer**: 16×16 ordered threshold, no error carried between pixels
//! - **None**: plain per-pixel quantization
//!
//! # Architecture
//!
//! All algorithms implement the [`Dither`] trait. The three diffusion
//! algorithms share [`dither_with_kernel`] and differ only in their
//! [`Kernel`]. [`DitherMethod`] is the closed selector used by callers that
//! pick an algorithm at runtime.
//!
//! # Example
//!
//! ```
//! use rgb332_dither::{Dither, FloydSteinberg, RgbImage};
//!
//! let mut image = RgbImage::filled(4, 4, [100, 150, 200]).unwrap();
//! FloydSteinberg.dither(&mut image);
//! ```

mod atkinson;
mod bayer;
mod floyd_steinberg;
mod jjn;
mod kernel;
mod none;

pub use atkinson::Atkinson;
pub use bayer::{Bayer16, BAYER_MATRIX_16X16, BAYER_SIZE};
pub use floyd_steinberg::FloydSteinberg;
pub use jjn::JarvisJudiceNinke;
pub use kernel::*;
pub use none::NoDither;

use std::fmt;
use std::str::FromStr;

use crate::error::DitherError;
use crate::image::{RgbImage, RGB_COMPONENTS};
use crate::palette::{ColorMapper, GridNearest};

/// Dither algorithm selection.
///
/// Each variant has a stable integer code, used by configuration files and
/// the command line:
///
/// | code | method |
/// |------|--------|
/// | -1 (or any unknown code) | [`None`](DitherMethod::None) |
/// | 0 | [`FloydSteinberg`](DitherMethod::FloydSteinberg) |
/// | 1 | [`JarvisJudiceNinke`](DitherMethod::JarvisJudiceNinke) |
/// | 2 | [`Atkinson`](DitherMethod::Atkinson) |
/// | 3 | [`Bayer`](DitherMethod::Bayer) |
///
/// # Example
///
/// ```
/// use rgb332_dither::DitherMethod;
///
/// assert_eq!(DitherMethod::from_code(2), DitherMethod::Atkinson);
/// assert_eq!(DitherMethod::from_code(42), DitherMethod::None);
/// assert_eq!("jjn".parse::<DitherMethod>().unwrap(), DitherMethod::JarvisJudiceNinke);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherMethod {
    /// Quantize each pixel with no error handling.
    #[default]
    None,

    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    FloydSteinberg,

    /// Jarvis-Judice-Ninke error diffusion (100% propagation, 12 neighbors).
    JarvisJudiceNinke,

    /// Atkinson error diffusion (75% propagation, 6 neighbors).
    Atkinson,

    /// 16×16 Bayer ordered dithering.
    Bayer,
}

impl DitherMethod {
    /// Every method, in code order.
    pub const ALL: [DitherMethod; 5] = [
        DitherMethod::None,
        DitherMethod::FloydSteinberg,
        DitherMethod::JarvisJudiceNinke,
        DitherMethod::Atkinson,
        DitherMethod::Bayer,
    ];

    /// Method for an integer code.
    ///
    /// Codes outside `0..=3` select [`DitherMethod::None`]. `-1` is the
    /// documented "no dithering" code and is accepted silently; any other
    /// unknown code is logged.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => DitherMethod::FloydSteinberg,
            1 => DitherMethod::JarvisJudiceNinke,
            2 => DitherMethod::Atkinson,
            3 => DitherMethod::Bayer,
            -1 => DitherMethod::None,
            other => {
                tracing::warn!(code = other, "Unknown dither method, quantizing without dithering");
                DitherMethod::None
            }
        }
    }

    /// Integer code of this method.
    pub fn code(self) -> i32 {
        match self {
            DitherMethod::None => -1,
            DitherMethod::FloydSteinberg => 0,
            DitherMethod::JarvisJudiceNinke => 1,
            DitherMethod::Atkinson => 2,
            DitherMethod::Bayer => 3,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DitherMethod::None => "none",
            DitherMethod::FloydSteinberg => "floyd-steinberg",
            DitherMethod::JarvisJudiceNinke => "jarvis",
            DitherMethod::Atkinson => "atkinson",
            DitherMethod::Bayer => "bayer",
        }
    }

    /// Dither an image in place with this method.
    pub fn apply(self, image: &mut RgbImage) {
        tracing::debug!(
            method = self.name(),
            width = image.width(),
            height = image.height(),
            "Dithering"
        );
        match self {
            DitherMethod::None => NoDither.dither(image),
            DitherMethod::FloydSteinberg => FloydSteinberg.dither(image),
            DitherMethod::JarvisJudiceNinke => JarvisJudiceNinke.dither(image),
            DitherMethod::Atkinson => Atkinson.dither(image),
            DitherMethod::Bayer => Bayer16.dither(image),
        }
    }
}

impl fmt::Display for DitherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherMethod {
    type Err = DitherError;

    /// Parse a method name or integer code.
    ///
    /// Names are case-insensitive. Integer codes go through
    /// [`DitherMethod::from_code`], so unknown codes still fall back to
    /// [`DitherMethod::None`]; unknown names are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "none" | "off" => Ok(DitherMethod::None),
            "floyd-steinberg" | "floyd_steinberg" | "fs" => Ok(DitherMethod::FloydSteinberg),
            "jarvis" | "jarvis-judice-ninke" | "jjn" => Ok(DitherMethod::JarvisJudiceNinke),
            "atkinson" => Ok(DitherMethod::Atkinson),
            "bayer" | "ordered" => Ok(DitherMethod::Bayer),
            _ => name
                .parse::<i32>()
                .map(DitherMethod::from_code)
                .map_err(|_| {
                    DitherError::InvalidArgument(format!(
                        "unknown dither method '{s}' (expected none, floyd-steinberg, jarvis, atkinson, bayer or -1..3)"
                    ))
                }),
        }
    }
}

/// Trait for dithering algorithms.
///
/// Implementors rewrite every pixel of the image to a color of the
/// grid-nearest palette. The image is owned exclusively by the caller for
/// the duration of the call.
pub trait Dither {
    /// Dither an image in place.
    fn dither(&self, image: &mut RgbImage);
}

/// One neighbor write performed by the diffusion driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionWrite {
    /// Pixel whose error is being distributed.
    pub source: (usize, usize),
    /// Pixel receiving the error.
    pub target: (usize, usize),
    /// Value stored in the target after clamping.
    pub value: [u8; 3],
}

/// Add a diffused error share to a channel.
///
/// The sum is clamped to `0.0..=255.0` and truncated toward zero.
#[inline]
pub(crate) fn diffuse_channel(value: u8, share: f32) -> u8 {
    (value as f32 + share).clamp(0.0, 255.0) as u8
}

/// Core error diffusion loop parameterized by kernel.
///
/// Scans the image in raster order. For each pixel: quantize it with
/// `mapper`, store the result, then add `(old - new) * weight` to every
/// in-bounds neighbor named by the kernel, clamping each neighbor channel
/// as it is written. `on_write` observes every neighbor write.
///
/// Because kernels only reach forward (see [`Kernel`]), a pixel never
/// receives error after it has been quantized.
pub fn dither_with_kernel<M, F>(image: &mut RgbImage, kernel: &Kernel, mapper: &M, mut on_write: F)
where
    M: ColorMapper,
    F: FnMut(DiffusionWrite),
{
    let width = image.width();
    let height = image.height();
    let pixels = image.as_bytes_mut();

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * RGB_COMPONENTS;
            let old = [pixels[idx], pixels[idx + 1], pixels[idx + 2]];
            let new = mapper.quantize(old);
            pixels[idx..idx + RGB_COMPONENTS].copy_from_slice(&new);

            let error = [
                old[0] as f32 - new[0] as f32,
                old[1] as f32 - new[1] as f32,
                old[2] as f32 - new[2] as f32,
            ];
            if error == [0.0; 3] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                let nx = nx as usize;

                let w = kernel.weight(weight);
                let adj = (ny * width + nx) * RGB_COMPONENTS;
                for c in 0..RGB_COMPONENTS {
                    pixels[adj + c] = diffuse_channel(pixels[adj + c], error[c] * w);
                }

                on_write(DiffusionWrite {
                    source: (x, y),
                    target: (nx, ny),
                    value: [pixels[adj], pixels[adj + 1], pixels[adj + 2]],
                });
            }
        }
    }
}

/// Error diffusion against the grid-nearest palette with no observer.
#[inline]
pub(crate) fn diffuse(image: &mut RgbImage, kernel: &Kernel) {
    dither_with_kernel(image, kernel, &GridNearest, |_| {});
}
