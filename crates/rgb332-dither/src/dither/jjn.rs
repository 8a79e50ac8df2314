//! Jarvis-Judice-Ninke error diffusion dithering algorithm.
//!
//! JJN spreads error over 12 neighbors across three rows (the current row
//! plus two below). The wide kernel gives smoother gradients than
//! Floyd-Steinberg at the cost of more writes per pixel.

use crate::image::RgbImage;

use super::{diffuse, Dither, JARVIS_JUDICE_NINKE};

/// Jarvis-Judice-Ninke error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
///
/// Weights are divided by 48, for a total of 48/48 = 100%.
#[derive(Debug, Clone, Copy, Default)]
pub struct JarvisJudiceNinke;

impl Dither for JarvisJudiceNinke {
    fn dither(&self, image: &mut RgbImage) {
        diffuse(image, &JARVIS_JUDICE_NINKE);
    }
}
