//! Quantization without dithering.

use crate::image::RgbImage;
use crate::palette::{ColorMapper, GridNearest};

use super::Dither;

/// Replace every pixel with its grid-nearest palette color.
///
/// No error is carried between pixels. This is what unknown dither codes
/// fall back to.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDither;

impl Dither for NoDither {
    fn dither(&self, image: &mut RgbImage) {
        for pixel in image.as_bytes_mut().chunks_exact_mut(3) {
            let new = GridNearest.quantize([pixel[0], pixel[1], pixel[2]]);
            pixel.copy_from_slice(&new);
        }
    }
}
