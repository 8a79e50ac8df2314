//! Test fixtures: input images written to scratch directories.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Write an RGB888 buffer as a PNG and return its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, pixels: &[u8]) -> PathBuf {
    let path = dir.join(name);
    image::save_buffer_with_format(
        &path,
        pixels,
        width,
        height,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .unwrap();
    path
}

/// Every pixel the same color
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    rgb.iter()
        .copied()
        .cycle()
        .take((width * height * 3) as usize)
        .collect()
}

/// Horizontal red ramp over a vertical blue ramp, green constant
pub fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / (width - 1).max(1)) as u8);
            pixels.push(96);
            pixels.push((y * 255 / (height - 1).max(1)) as u8);
        }
    }
    pixels
}

/// Seeded random noise
pub fn noise(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height * 3).map(|_| rng.gen()).collect()
}
