//! Unified error type for the rgb332-dither public API.

use thiserror::Error;

/// Errors reported by the tone, dither and output stages.
///
/// All engine routines validate their inputs up front and return one of
/// these instead of touching the pixel buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DitherError {
    /// A buffer or slice is empty or does not match the stated dimensions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A tone parameter is outside the range the curve formula supports.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The image cannot be described by the 16-bit output header.
    #[error("image dimensions {width}x{height} exceed the 65535 pixel limit of the output header")]
    DimensionsTooLarge {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },

    /// An encoded image could not be read back.
    #[error("malformed encoded image: {0}")]
    Format(String),
}
