//! Owned RGB888 pixel buffer.
//!
//! [`RgbImage`] is the buffer every stage of the pipeline works on: tone
//! correction and dithering mutate it in place, the output encoders read it.
//! The buffer is validated once at construction, so the stages themselves
//! never see a buffer whose length disagrees with its dimensions.

use crate::error::DitherError;

/// Bytes per pixel (R, G, B).
pub const RGB_COMPONENTS: usize = 3;

/// A row-major RGB888 image with no row padding.
///
/// # Invariant
///
/// `data.len() == width * height * 3` and both dimensions are non-zero.
///
/// # Example
///
/// ```
/// use rgb332_dither::RgbImage;
///
/// let image = RgbImage::filled(2, 2, [255, 0, 0]).unwrap();
/// assert_eq!(image.pixel(1, 1), [255, 0, 0]);
/// assert_eq!(image.as_bytes().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl RgbImage {
    /// Wrap a decoded pixel buffer.
    ///
    /// Fails with [`DitherError::InvalidArgument`] if either dimension is
    /// zero or the buffer length is not exactly `width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, DitherError> {
        if width == 0 || height == 0 {
            return Err(DitherError::InvalidArgument(format!(
                "image has no pixels ({width}x{height})"
            )));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGB_COMPONENTS))
            .ok_or_else(|| {
                DitherError::InvalidArgument(format!("image size {width}x{height} overflows"))
            })?;
        if data.len() != expected {
            return Err(DitherError::InvalidArgument(format!(
                "pixel buffer holds {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wrap a buffer the caller has already sized correctly.
    pub(crate) fn from_raw_unchecked(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * RGB_COMPONENTS);
        Self {
            data,
            width,
            height,
        }
    }

    /// Create an image where every pixel has the same color.
    ///
    /// Fails with [`DitherError::InvalidArgument`] if either dimension is
    /// zero.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self, DitherError> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGB_COMPONENTS))
            .ok_or_else(|| {
                DitherError::InvalidArgument(format!("image size {width}x{height} overflows"))
            })?;
        let data = rgb.iter().copied().cycle().take(len).collect();
        Self::from_raw(width, height, data)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw interleaved RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw interleaved RGB bytes.
    ///
    /// The length cannot change through a slice, so the invariant holds.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = self.offset(x, y);
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let idx = self.offset(x, y);
        self.data[idx..idx + RGB_COMPONENTS].copy_from_slice(&rgb);
    }

    /// Iterate over pixels in raster order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(RGB_COMPONENTS)
            .map(|p| [p[0], p[1], p[2]])
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        (y * self.width + x) * RGB_COMPONENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_accepts_exact_length() {
        let image = RgbImage::from_raw(3, 2, vec![7; 18]).unwrap();
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel_count(), 6);
    }

    #[test]
    fn test_from_raw_rejects_length_mismatch() {
        let err = RgbImage::from_raw(3, 2, vec![0; 17]).unwrap_err();
        assert!(matches!(err, DitherError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_raw_rejects_empty() {
        let err = RgbImage::from_raw(0, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, DitherError::InvalidArgument(_)));

        let err = RgbImage::from_raw(4, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, DitherError::InvalidArgument(_)));
    }

    #[test]
    fn test_pixel_access_is_row_major() {
        let data: Vec<u8> = (0..12).collect();
        let mut image = RgbImage::from_raw(2, 2, data).unwrap();

        assert_eq!(image.pixel(0, 0), [0, 1, 2]);
        assert_eq!(image.pixel(1, 0), [3, 4, 5]);
        assert_eq!(image.pixel(0, 1), [6, 7, 8]);

        image.set_pixel(1, 1, [200, 201, 202]);
        assert_eq!(&image.as_bytes()[9..], &[200, 201, 202]);
    }

    #[test]
    fn test_filled_and_pixels_iterator() {
        let image = RgbImage::filled(3, 1, [1, 2, 3]).unwrap();
        let pixels: Vec<[u8; 3]> = image.pixels().collect();
        assert_eq!(pixels, vec![[1, 2, 3]; 3]);
    }

    #[test]
    fn test_filled_rejects_empty_dimensions() {
        assert!(matches!(
            RgbImage::filled(0, 4, [1, 2, 3]),
            Err(DitherError::InvalidArgument(_))
        ));
        assert!(matches!(
            RgbImage::filled(4, 0, [1, 2, 3]),
            Err(DitherError::InvalidArgument(_))
        ));
    }

    #[test]
    #[should_panic]
    fn test_pixel_out_of_bounds_panics() {
        let image = RgbImage::filled(2, 2, [0, 0, 0]).unwrap();
        image.pixel(2, 0);
    }
}
