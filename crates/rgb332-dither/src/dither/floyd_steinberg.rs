//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::image::RgbImage;

use super::{diffuse, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights are divided by 16, for a total of 16/16 = 100%.
///
/// # Example
///
/// ```
/// use rgb332_dither::{Dither, FloydSteinberg, RgbImage};
///
/// let mut image = RgbImage::filled(3, 3, [128, 128, 128]).unwrap();
/// FloydSteinberg.dither(&mut image);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &mut RgbImage) {
        diffuse(image, &FLOYD_STEINBERG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_moves_right_first() {
        // 34 sits at the top of grid cell 1 and quantizes to 0; 7/16 of the
        // error lands on the right neighbor
        let mut image = RgbImage::from_raw(2, 1, vec![34, 0, 0, 0, 0, 0]).unwrap();
        FloydSteinberg.dither(&mut image);
        assert_eq!(image.pixel(0, 0), [0, 0, 0]);
        // 34 * 7/16 = 14.875 -> 14, which still maps to 0
        assert_eq!(image.pixel(1, 0), [0, 0, 0]);
    }

    #[test]
    fn test_error_accumulates_into_brighter_level() {
        // Second pixel 30 + 14.875 = 44 lands in cell 2 -> level 0x24
        let mut image = RgbImage::from_raw(2, 1, vec![34, 0, 0, 30, 0, 0]).unwrap();
        FloydSteinberg.dither(&mut image);
        assert_eq!(image.pixel(0, 0), [0, 0, 0]);
        assert_eq!(image.pixel(1, 0), [0x24, 0, 0]);
    }

    #[test]
    fn test_single_pixel() {
        let mut image = RgbImage::filled(1, 1, [200, 100, 50]).unwrap();
        FloydSteinberg.dither(&mut image);
        assert_eq!(image.pixel(0, 0), crate::palette::quantize([200, 100, 50]));
    }

    #[test]
    fn test_palette_colors_pass_through() {
        let mut image = RgbImage::filled(5, 4, [0x91, 0xDA, 0x55]).unwrap();
        FloydSteinberg.dither(&mut image);
        assert!(image.pixels().all(|p| p == [0x91, 0xDA, 0x55]));
    }
}
