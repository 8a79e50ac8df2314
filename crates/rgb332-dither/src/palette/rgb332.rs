//! RGB332 bit-truncation encoding.
//!
//! The final byte written for every pixel keeps the top 3 bits of red, the
//! top 3 bits of green and the top 2 bits of blue:
//!
//! ```text
//! bit:   7 6 5 4 3 2 1 0
//!        R R R G G G B B
//! ```

/// Format identifier stored in encoded images.
pub const RGB332_FORMAT_ID: u16 = 0x332;

/// Red/green channel value for each 3-bit level.
pub const LEVELS_3BIT: [u8; 8] = [0x00, 0x24, 0x48, 0x6D, 0x91, 0xB6, 0xDA, 0xFF];

/// Blue channel value for each 2-bit level.
pub const LEVELS_2BIT: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];

/// Encode a truecolor pixel as one RGB332 byte.
///
/// Pure bit truncation, no rounding and no search.
///
/// # Example
///
/// ```
/// use rgb332_dither::palette::rgb_to_rgb332;
///
/// assert_eq!(rgb_to_rgb332(255, 0, 0), 0xE0);
/// assert_eq!(rgb_to_rgb332(0, 255, 0), 0x1C);
/// assert_eq!(rgb_to_rgb332(0, 0, 255), 0x03);
/// ```
#[inline]
pub const fn rgb_to_rgb332(r: u8, g: u8, b: u8) -> u8 {
    (r & 0xE0) | ((g & 0xE0) >> 3) | (b >> 6)
}

/// Expand an RGB332 byte back to RGB888.
///
/// Each field is spread over the full 0..=255 range using the same levels as
/// the grid palette, so `rgb332_to_rgb(rgb_to_rgb332(c)) == c` for every
/// palette color `c`.
#[inline]
pub const fn rgb332_to_rgb(pixel: u8) -> [u8; 3] {
    [
        LEVELS_3BIT[(pixel >> 5) as usize],
        LEVELS_3BIT[((pixel >> 2) & 0x07) as usize],
        LEVELS_2BIT[(pixel & 0x03) as usize],
    ]
}

/// Expand a buffer of RGB332 bytes to interleaved RGB888.
pub fn expand_rgb332(pixels: &[u8]) -> Vec<u8> {
    pixels.iter().flat_map(|&p| rgb332_to_rgb(p)).collect()
}
