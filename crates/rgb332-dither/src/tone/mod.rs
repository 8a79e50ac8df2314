//! Tone correction ahead of quantization.
//!
//! A [`ToneCurve`] is built once per run from [`ToneOptions`] and then
//! applied to the image as a pure per-channel table substitution:
//!
//! ```text
//! pixel[c] = contrast_brightness_lut[gamma_lut[pixel[c]]]
//! ```
//!
//! Table construction, per index `i`:
//!
//! 1. `v = i / 255`
//! 2. `gamma_lut[i] = round(v^(1/gamma) * 255)`
//! 3. `v' = factor * (v^(1/gamma) * lightness - 0.5) + 0.5`, where
//!    `factor = 259 * (contrast + 255) / (255 * (259 - contrast))`
//! 4. `contrast_brightness_lut[i] = round(clamp(v', 0, 1) * 255)`

mod curve;
mod options;

pub use curve::{ToneCurve, LUT_SIZE};
pub use options::{ToneOptions, CONTRAST_POLE};
