//! EncodedImage: RGB332 payload with dimension metadata.

use crate::error::DitherError;
use crate::image::{RgbImage, RGB_COMPONENTS};
use crate::palette::{expand_rgb332, ColorMapper, Rgb332Truncation, RGB332_FORMAT_ID};

/// Encode every pixel of an image as one RGB332 byte, in raster order.
pub fn encode_payload(image: &RgbImage) -> Vec<u8> {
    image
        .pixels()
        .map(|rgb| Rgb332Truncation.index(rgb))
        .collect()
}

/// An image in its final one-byte-per-pixel form.
///
/// # Invariant
///
/// Both dimensions are non-zero and `pixels.len() == width * height`.
///
/// # Example
///
/// ```
/// use rgb332_dither::{EncodedImage, RgbImage};
///
/// let image = RgbImage::filled(2, 2, [255, 0, 0]).unwrap();
/// let encoded = EncodedImage::from_image(&image).unwrap();
/// assert_eq!(encoded.pixels(), &[0xE0; 4]);
/// assert_eq!(encoded.to_binary(), vec![2, 0, 2, 0, 0x32, 0x03, 0xE0, 0xE0, 0xE0, 0xE0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

impl EncodedImage {
    /// Wrap an existing RGB332 payload.
    ///
    /// Fails with [`DitherError::InvalidArgument`] if a dimension is zero or
    /// the payload length is not `width * height`.
    pub fn new(width: u16, height: u16, pixels: Vec<u8>) -> Result<Self, DitherError> {
        if width == 0 || height == 0 {
            return Err(DitherError::InvalidArgument(format!(
                "image has no pixels ({width}x{height})"
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DitherError::InvalidArgument(format!(
                "payload holds {} bytes, expected {expected} for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Check that a `width` x `height` image fits the 16-bit header fields.
    ///
    /// Fails with [`DitherError::DimensionsTooLarge`] otherwise.
    pub fn check_dimensions(width: usize, height: usize) -> Result<(u16, u16), DitherError> {
        let too_large = || DitherError::DimensionsTooLarge { width, height };
        let w = u16::try_from(width).map_err(|_| too_large())?;
        let h = u16::try_from(height).map_err(|_| too_large())?;
        Ok((w, h))
    }

    /// Encode a finished image by RGB332 bit truncation.
    ///
    /// Fails with [`DitherError::DimensionsTooLarge`] if either dimension
    /// does not fit in the 16-bit header fields.
    pub fn from_image(image: &RgbImage) -> Result<Self, DitherError> {
        let (width, height) = Self::check_dimensions(image.width(), image.height())?;

        let pixels = encode_payload(image);
        tracing::debug!(width, height, bytes = pixels.len(), "Encoded RGB332 payload");

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Format identifier written alongside the payload.
    #[inline]
    pub fn format_id(&self) -> u16 {
        RGB332_FORMAT_ID
    }

    /// RGB332 bytes, one per pixel, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return its payload.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Expand back to RGB888 for previewing.
    pub fn to_rgb(&self) -> RgbImage {
        let data = expand_rgb332(&self.pixels);
        debug_assert_eq!(data.len(), self.pixels.len() * RGB_COMPONENTS);
        RgbImage::from_raw_unchecked(self.width as usize, self.height as usize, data)
    }
}
