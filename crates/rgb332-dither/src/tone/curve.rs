//! Gamma and contrast/lightness lookup tables.

use crate::error::DitherError;
use crate::image::RgbImage;

use super::ToneOptions;

/// Number of entries in each lookup table.
pub const LUT_SIZE: usize = 256;

const MAX_COLOUR_VALUE: f32 = 255.0;

/// A pair of 256-entry tone lookup tables.
///
/// The tables are chained per channel as
/// `contrast_brightness_lut[gamma_lut[value]]`.
///
/// `gamma_lut` holds the gamma-only curve. `contrast_brightness_lut` is
/// computed independently from the raw index (gamma, then lightness and
/// contrast), so the chained lookup applies gamma twice whenever gamma is
/// not 1.0.
///
/// # Example
///
/// ```
/// use rgb332_dither::{ToneCurve, ToneOptions};
///
/// let curve = ToneCurve::new(&ToneOptions::new()).unwrap();
/// assert!(curve.is_identity());
/// assert_eq!(curve.map(200), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneCurve {
    gamma_lut: [u8; LUT_SIZE],
    contrast_brightness_lut: [u8; LUT_SIZE],
}

impl ToneCurve {
    /// Build both tables from tone options.
    ///
    /// Fails with [`DitherError::InvalidParameter`] if the options do not
    /// validate (see [`ToneOptions::validate`]).
    pub fn new(options: &ToneOptions) -> Result<Self, DitherError> {
        options.validate()?;

        let inv_gamma = 1.0 / options.gamma;
        let factor = options.contrast_factor();

        let mut gamma_lut = [0u8; LUT_SIZE];
        let mut contrast_brightness_lut = [0u8; LUT_SIZE];

        for i in 0..LUT_SIZE {
            let normalized = i as f32 / MAX_COLOUR_VALUE;

            gamma_lut[i] = to_byte(normalized.powf(inv_gamma));

            let value = normalized.powf(inv_gamma);
            let value = factor * (value * options.lightness - 0.5) + 0.5;
            contrast_brightness_lut[i] = to_byte(value.clamp(0.0, 1.0));
        }

        tracing::debug!(
            gamma = options.gamma,
            contrast = options.contrast,
            lightness = options.lightness,
            factor,
            "Built tone lookup tables"
        );

        Ok(Self {
            gamma_lut,
            contrast_brightness_lut,
        })
    }

    /// Build both tables from raw parameters.
    pub fn build(gamma: f32, contrast: f32, lightness: f32) -> Result<Self, DitherError> {
        Self::new(
            &ToneOptions::new()
                .gamma(gamma)
                .contrast(contrast)
                .lightness(lightness),
        )
    }

    /// The gamma-only table.
    #[inline]
    pub fn gamma_lut(&self) -> &[u8; LUT_SIZE] {
        &self.gamma_lut
    }

    /// The gamma + lightness + contrast table.
    #[inline]
    pub fn contrast_brightness_lut(&self) -> &[u8; LUT_SIZE] {
        &self.contrast_brightness_lut
    }

    /// Map a single channel value through both tables.
    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.contrast_brightness_lut[self.gamma_lut[value as usize] as usize]
    }

    /// True when the chained lookup leaves every value unchanged.
    pub fn is_identity(&self) -> bool {
        (0..LUT_SIZE).all(|i| self.map(i as u8) as usize == i)
    }

    /// Apply the curve to every channel of an interleaved RGB slice.
    ///
    /// Fails with [`DitherError::InvalidArgument`] if the slice is empty or
    /// its length is not a whole number of RGB pixels.
    pub fn apply_to_slice(&self, pixels: &mut [u8]) -> Result<(), DitherError> {
        if pixels.is_empty() {
            return Err(DitherError::InvalidArgument(
                "pixel buffer is empty".to_string(),
            ));
        }
        if pixels.len() % 3 != 0 {
            return Err(DitherError::InvalidArgument(format!(
                "pixel buffer length {} is not a multiple of 3",
                pixels.len()
            )));
        }
        for channel in pixels.iter_mut() {
            *channel = self.map(*channel);
        }
        Ok(())
    }

    /// Apply the curve to an image in place.
    pub fn apply(&self, image: &mut RgbImage) -> Result<(), DitherError> {
        self.apply_to_slice(image.as_bytes_mut())
    }
}

#[inline]
fn to_byte(value: f32) -> u8 {
    (value * MAX_COLOUR_VALUE).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_parameters_give_identity_tables() {
        let curve = ToneCurve::build(1.0, 0.0, 1.0).unwrap();
        for i in 0..LUT_SIZE {
            assert_eq!(curve.gamma_lut()[i] as usize, i, "gamma_lut[{i}]");
            assert_eq!(
                curve.contrast_brightness_lut()[i] as usize,
                i,
                "contrast_brightness_lut[{i}]"
            );
        }
        assert!(curve.is_identity());
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = ToneCurve::build(2.2, 35.0, 1.1).unwrap();
        let b = ToneCurve::build(2.2, 35.0, 1.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_gamma_brightens_mid_tones() {
        let curve = ToneCurve::build(2.2, 0.0, 1.0).unwrap();
        let lut = curve.gamma_lut();
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
        // (128/255)^(1/2.2) * 255 ~= 186.4
        assert_eq!(lut[128], 186);
        assert!(!curve.is_identity());
    }

    #[test]
    fn test_gamma_lut_is_monotonic() {
        let curve = ToneCurve::build(0.6, 0.0, 1.0).unwrap();
        let lut = curve.gamma_lut();
        for i in 1..LUT_SIZE {
            assert!(lut[i] >= lut[i - 1], "not monotonic at {i}");
        }
    }

    #[test]
    fn test_high_contrast_saturates_extremes() {
        let curve = ToneCurve::build(1.0, 200.0, 1.0).unwrap();
        let lut = curve.contrast_brightness_lut();
        assert_eq!(lut[10], 0);
        assert_eq!(lut[245], 255);
        // factor ~= 7.83 pushes 128 only slightly past the midpoint
        assert_eq!(lut[128], 131);
    }

    #[test]
    fn test_minimum_contrast_flattens_to_midpoint() {
        let curve = ToneCurve::build(1.0, -255.0, 1.0).unwrap();
        // factor == 0: every entry is round(0.5 * 255) = 128
        assert!(curve.contrast_brightness_lut().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_lightness_scales_before_contrast() {
        let curve = ToneCurve::build(1.0, 0.0, 0.5).unwrap();
        let lut = curve.contrast_brightness_lut();
        assert_eq!(lut[200], 100);
        // gamma table untouched by lightness
        assert_eq!(curve.gamma_lut()[200], 200);
    }

    #[test]
    fn test_contrast_table_uses_its_own_gamma_pass() {
        let curve = ToneCurve::build(2.0, 0.0, 1.0).unwrap();
        // Both tables carry the same gamma-only curve here, and the chain
        // applies it twice: 64 -> 128 -> 181
        assert_eq!(curve.gamma_lut()[64], 128);
        assert_eq!(curve.contrast_brightness_lut()[64], 128);
        assert_eq!(curve.map(64), 181);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            ToneCurve::build(0.0, 0.0, 1.0),
            Err(DitherError::InvalidParameter(_))
        ));
        assert!(matches!(
            ToneCurve::build(-2.0, 0.0, 1.0),
            Err(DitherError::InvalidParameter(_))
        ));
        assert!(matches!(
            ToneCurve::build(1.0, 259.0, 1.0),
            Err(DitherError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_apply_substitutes_every_channel() {
        let curve = ToneCurve::build(1.0, 0.0, 0.5).unwrap();
        let mut image = RgbImage::filled(2, 1, [200, 100, 0]).unwrap();
        curve.apply(&mut image).unwrap();
        assert_eq!(image.pixel(0, 0), [100, 50, 0]);
        assert_eq!(image.pixel(1, 0), [100, 50, 0]);
    }

    #[test]
    fn test_apply_to_slice_rejects_bad_buffers() {
        let curve = ToneCurve::build(1.0, 0.0, 1.0).unwrap();
        assert!(matches!(
            curve.apply_to_slice(&mut []),
            Err(DitherError::InvalidArgument(_))
        ));
        let mut partial = [1u8, 2, 3, 4];
        assert!(matches!(
            curve.apply_to_slice(&mut partial),
            Err(DitherError::InvalidArgument(_))
        ));
        // Rejected input is left untouched
        assert_eq!(partial, [1, 2, 3, 4]);
    }
}
