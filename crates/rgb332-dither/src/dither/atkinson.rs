//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! Originally developed by Bill Atkinson for the Apple Macintosh.

use crate::image::RgbImage;

use super::{diffuse, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// The Atkinson kernel distributes error to 6 neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, for a total of 6/8 = 75%. The
/// remaining quarter is dropped, which gives the method its characteristic
/// lower-contrast look.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &mut RgbImage) {
        diffuse(image, &ATKINSON);
    }
}
