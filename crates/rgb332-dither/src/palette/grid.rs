//! Grid-nearest palette mapping.
//!
//! Each channel is reduced to a cell index with
//! `floor(value * (GRID_LEVELS - 1) / 256)`, the three cells form a 12-bit
//! index into [`NEAREST_COLOR_GRID`], and the resulting palette index selects
//! an RGB triple from [`PALETTE`]. The pixel is replaced by that palette
//! color, not by the cell value.
//!
//! Both tables are generated at compile time by `build.rs`.

// Include the generated tables from build.rs
include!(concat!(env!("OUT_DIR"), "/palette_tables.rs"));

/// Cells per channel in the reduced grid.
pub const GRID_LEVELS: u32 = 16;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 256;

/// Reduce an 8-bit channel to its grid cell.
///
/// The divisor is 256 and the multiplier is `GRID_LEVELS - 1`, so the top
/// cell is never produced: results lie in `0..=14`.
#[inline]
pub const fn reduce_channel(value: u8) -> u8 {
    (value as u32 * (GRID_LEVELS - 1) / 256) as u8
}

/// Index into [`NEAREST_COLOR_GRID`] for a pixel.
#[inline]
pub const fn grid_index(rgb: [u8; 3]) -> usize {
    let r = reduce_channel(rgb[0]) as usize;
    let g = reduce_channel(rgb[1]) as usize;
    let b = reduce_channel(rgb[2]) as usize;
    (r << 8) | (g << 4) | b
}

/// Palette index of the color nearest to `rgb`.
#[inline]
pub fn nearest_index(rgb: [u8; 3]) -> u8 {
    NEAREST_COLOR_GRID[grid_index(rgb)]
}

/// RGB triple of a palette entry.
#[inline]
pub fn palette_color(index: u8) -> [u8; 3] {
    PALETTE[index as usize]
}

/// Replace a pixel with its nearest palette color.
#[inline]
pub fn quantize(rgb: [u8; 3]) -> [u8; 3] {
    palette_color(nearest_index(rgb))
}
