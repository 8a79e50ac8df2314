//! Ordered dithering with a 16×16 Bayer threshold matrix.
//!
//! Each pixel is nudged by an amount that depends only on its position,
//! then quantized. No error is carried between pixels, so the result does
//! not depend on scan order.

use crate::image::{RgbImage, RGB_COMPONENTS};
use crate::palette::{ColorMapper, GridNearest};

use super::Dither;

/// Side length of the threshold matrix.
pub const BAYER_SIZE: usize = 16;

/// Threshold matrix, one value per position in a 16×16 tile.
///
/// Holds each value in `0..=255` exactly once.
pub const BAYER_MATRIX_16X16: [[u8; BAYER_SIZE]; BAYER_SIZE] = [
    [0, 128, 32, 160, 8, 136, 40, 168, 2, 130, 34, 162, 10, 138, 42, 170],
    [192, 64, 224, 96, 200, 72, 232, 104, 194, 66, 226, 98, 202, 74, 234, 106],
    [48, 176, 16, 144, 56, 184, 24, 152, 50, 178, 18, 146, 58, 186, 26, 154],
    [240, 112, 208, 80, 248, 120, 216, 88, 242, 114, 210, 82, 250, 122, 218, 90],
    [12, 140, 44, 172, 4, 132, 36, 164, 14, 142, 46, 174, 6, 134, 38, 166],
    [204, 76, 236, 108, 196, 68, 228, 100, 206, 78, 238, 110, 198, 70, 230, 102],
    [60, 188, 28, 156, 52, 180, 20, 148, 62, 190, 30, 158, 54, 182, 22, 150],
    [252, 124, 220, 92, 244, 116, 212, 84, 254, 126, 222, 94, 246, 118, 214, 86],
    [3, 131, 35, 163, 11, 139, 43, 171, 1, 129, 33, 161, 9, 137, 41, 169],
    [195, 67, 227, 99, 203, 75, 235, 107, 193, 65, 225, 97, 201, 73, 233, 105],
    [51, 179, 19, 147, 59, 187, 27, 155, 49, 177, 17, 145, 57, 185, 25, 153],
    [243, 115, 211, 83, 251, 123, 219, 91, 241, 113, 209, 81, 249, 121, 217, 89],
    [15, 143, 47, 175, 7, 135, 39, 167, 13, 141, 45, 173, 5, 133, 37, 165],
    [207, 79, 239, 111, 199, 71, 231, 103, 205, 77, 237, 109, 197, 69, 229, 101],
    [63, 191, 31, 159, 55, 183, 23, 151, 61, 189, 29, 157, 53, 181, 21, 149],
    [255, 127, 223, 95, 247, 119, 215, 87, 253, 125, 221, 93, 245, 117, 213, 85],
];

/// Thresholds are centered on this value before scaling.
const THRESHOLD_CENTER: f32 = 128.0;

/// Divisor applied to the centered threshold.
const THRESHOLD_SCALE: f32 = 8.0;

/// 16×16 Bayer ordered dithering.
///
/// For a pixel at `(x, y)`, every channel becomes
/// `clamp(round(c + (M[y % 16][x % 16] - 128) / 8), 0, 255)`, then the pixel
/// is replaced by its grid-nearest palette color. The offset ranges from
/// -16 to +15.875.
///
/// # Example
///
/// ```
/// use rgb332_dither::{Bayer16, Dither, RgbImage};
///
/// let mut a = RgbImage::filled(20, 20, [90, 140, 60]).unwrap();
/// let mut b = a.clone();
/// Bayer16.dither(&mut a);
/// Bayer16.dither(&mut b);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bayer16;

impl Bayer16 {
    /// Channel offset for a pixel position.
    #[inline]
    pub fn offset(x: usize, y: usize) -> f32 {
        let threshold = BAYER_MATRIX_16X16[y % BAYER_SIZE][x % BAYER_SIZE];
        (threshold as f32 - THRESHOLD_CENTER) / THRESHOLD_SCALE
    }
}

impl Dither for Bayer16 {
    fn dither(&self, image: &mut RgbImage) {
        let width = image.width();
        for (i, pixel) in image
            .as_bytes_mut()
            .chunks_exact_mut(RGB_COMPONENTS)
            .enumerate()
        {
            let offset = Self::offset(i % width, i / width);
            let nudged = [
                nudge(pixel[0], offset),
                nudge(pixel[1], offset),
                nudge(pixel[2], offset),
            ];
            pixel.copy_from_slice(&GridNearest.quantize(nudged));
        }
    }
}

#[inline]
fn nudge(value: u8, offset: f32) -> u8 {
    (value as f32 + offset).round().clamp(0.0, 255.0) as u8
}
