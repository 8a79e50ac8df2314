//! Tone adjustment options.
//!
//! This module provides the [`ToneOptions`] struct for configuring the gamma,
//! contrast and lightness curve applied before dithering.

use crate::error::DitherError;

/// Contrast value at which the contrast factor's denominator reaches zero.
pub const CONTRAST_POLE: f32 = 259.0;

/// Configuration for the tone curve.
///
/// # Defaults
///
/// The default configuration leaves pixels untouched:
/// - Gamma: 1.0
/// - Contrast: 0.0
/// - Lightness: 1.0
///
/// # Example
///
/// ```
/// use rgb332_dither::ToneOptions;
///
/// let options = ToneOptions::new()
///     .gamma(2.2)
///     .contrast(20.0)
///     .lightness(1.1);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneOptions {
    /// Gamma exponent; each normalized channel is raised to `1 / gamma`.
    ///
    /// - 1.0 = no change
    /// - > 1.0 brightens mid-tones
    /// - < 1.0 darkens mid-tones
    pub gamma: f32,

    /// Contrast in the classic `[-255, 255]` range.
    ///
    /// - 0.0 = no change
    /// - positive values steepen the curve around the midpoint
    /// - negative values flatten it
    pub contrast: f32,

    /// Lightness multiplier applied before contrast.
    ///
    /// - 1.0 = no change
    pub lightness: f32,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            contrast: 0.0,
            lightness: 1.0,
        }
    }
}

impl ToneOptions {
    /// Create tone options with default (identity) values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gamma exponent.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the contrast.
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Set the lightness multiplier.
    #[inline]
    pub fn lightness(mut self, lightness: f32) -> Self {
        self.lightness = lightness;
        self
    }

    /// Check that the parameters can produce a curve.
    ///
    /// Fails with [`DitherError::InvalidParameter`] when:
    /// - gamma is not finite or `<= 0` (the exponent `1 / gamma` is undefined)
    /// - contrast is not finite or `>= 259` (the contrast factor divides by zero)
    /// - lightness is not finite or negative
    pub fn validate(&self) -> Result<(), DitherError> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(DitherError::InvalidParameter(format!(
                "gamma must be a finite value > 0 (got {})",
                self.gamma
            )));
        }
        if !self.contrast.is_finite() || self.contrast >= CONTRAST_POLE {
            return Err(DitherError::InvalidParameter(format!(
                "contrast must be a finite value < {CONTRAST_POLE} (got {})",
                self.contrast
            )));
        }
        if !self.lightness.is_finite() || self.lightness < 0.0 {
            return Err(DitherError::InvalidParameter(format!(
                "lightness must be a finite value >= 0 (got {})",
                self.lightness
            )));
        }
        Ok(())
    }

    /// The contrast factor `259 * (c + 255) / (255 * (259 - c))`.
    #[inline]
    pub fn contrast_factor(&self) -> f32 {
        (CONTRAST_POLE * (self.contrast + 255.0)) / (255.0 * (CONTRAST_POLE - self.contrast))
    }
}
