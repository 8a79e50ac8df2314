#![allow(clippy::needless_range_loop, clippy::unusual_byte_groupings)]

//! rgb332-dither: tone correction, palette mapping and dithering for
//! 8-bit RGB332 displays.
//!
//! # Quick Start
//!
//! ```
//! use rgb332_dither::{DitherMethod, EncodedImage, RgbImage, ToneCurve, ToneOptions};
//!
//! let mut image = RgbImage::filled(4, 4, [200, 120, 40]).unwrap();
//!
//! let curve = ToneCurve::new(&ToneOptions::new().gamma(2.2)).unwrap();
//! curve.apply(&mut image).unwrap();
//!
//! DitherMethod::FloydSteinberg.apply(&mut image);
//!
//! let encoded = EncodedImage::from_image(&image).unwrap();
//! assert_eq!(encoded.to_binary().len(), 6 + 16);
//! ```
//!
//! # Pipeline
//!
//! Every stage works on one exclusively owned [`RgbImage`]:
//!
//! 1. **Tone** ([`ToneCurve`]): two 256-entry lookup tables, chained per
//!    channel.
//! 2. **Dither** ([`DitherMethod`] / [`Dither`]): rewrites every pixel to a
//!    color of the grid-nearest palette, optionally spreading or masking
//!    the quantization error.
//! 3. **Encode** ([`EncodedImage`]): one byte per pixel by RGB332 bit
//!    truncation, serialized as a binary container or a C header.
//!
//! # Two Palettes
//!
//! Dithering quantizes against the grid-nearest palette ([`GridNearest`]),
//! a 16×16×16 lookup over 256 colors. Encoding re-quantizes the result by
//! plain bit truncation ([`Rgb332Truncation`]). The two agree on every
//! palette color but not on arbitrary input, so the order of the stages
//! matters: changing either mapping changes the output bytes.
//!
//! # Scan Order
//!
//! The error diffusion algorithms scan strictly left to right, top to
//! bottom, and their kernels only reach pixels that have not been
//! quantized yet. A pixel's final value is decided exactly once.

pub mod dither;
pub mod error;
pub mod image;
pub mod output;
pub mod palette;
pub mod tone;


pub use dither::{
    Atkinson, Bayer16, Dither, DitherMethod, FloydSteinberg, JarvisJudiceNinke, Kernel, NoDither,
};
pub use error::DitherError;
pub use image::RgbImage;
pub use output::{sanitize_identifier, CHeader, EncodedImage};
pub use palette::{ColorMapper, GridNearest, Rgb332Truncation, RGB332_FORMAT_ID};
pub use tone::{ToneCurve, ToneOptions};
