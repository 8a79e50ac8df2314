//! Mapping truecolor pixels onto the 256-color RGB332 space.
//!
//! Two strategies are provided, both implementing [`ColorMapper`]:
//!
//! - [`GridNearest`]: reduces the pixel to a 16×16×16 grid cell and looks up
//!   a precomputed nearest palette entry. Dithering quantizes against this.
//! - [`Rgb332Truncation`]: keeps the top 3/3/2 bits. The encoders produce
//!   the final output bytes with this.
//!
//! The two are not interchangeable. Dithered pixels are snapped to the
//! grid palette first and re-quantized by truncation at encode time; using a
//! single mapper for both stages changes the output.
//!
//! Both strategies share the `RRRGGGBB` index layout, so an index from
//! either one addresses the same color.

pub mod grid;
pub mod rgb332;

pub use grid::{nearest_index, palette_color, quantize, reduce_channel, GRID_LEVELS, PALETTE_SIZE};
pub use rgb332::{expand_rgb332, rgb332_to_rgb, rgb_to_rgb332, RGB332_FORMAT_ID};

/// A strategy for mapping a pixel to one of the 256 palette colors.
pub trait ColorMapper {
    /// Palette index (`RRRGGGBB`) for a pixel.
    fn index(&self, rgb: [u8; 3]) -> u8;

    /// RGB triple for a palette index.
    fn color(&self, index: u8) -> [u8; 3];

    /// Replace a pixel with the color it maps to.
    #[inline]
    fn quantize(&self, rgb: [u8; 3]) -> [u8; 3] {
        self.color(self.index(rgb))
    }
}

/// Precomputed nearest-color lookup over the reduced grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridNearest;

impl ColorMapper for GridNearest {
    #[inline]
    fn index(&self, rgb: [u8; 3]) -> u8 {
        grid::nearest_index(rgb)
    }

    #[inline]
    fn color(&self, index: u8) -> [u8; 3] {
        grid::palette_color(index)
    }
}

/// Direct RGB332 bit truncation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rgb332Truncation;

impl ColorMapper for Rgb332Truncation {
    #[inline]
    fn index(&self, rgb: [u8; 3]) -> u8 {
        rgb332::rgb_to_rgb332(rgb[0], rgb[1], rgb[2])
    }

    #[inline]
    fn color(&self, index: u8) -> [u8; 3] {
        rgb332::rgb332_to_rgb(index)
    }
}
