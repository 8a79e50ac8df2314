//! Binary container.
//!
//! ```text
//! offset  size  field
//! 0       2     width      (u16, little-endian)
//! 2       2     height     (u16, little-endian)
//! 4       2     format_id  (u16, little-endian, always 0x332)
//! 6       w*h   RGB332 pixels, row-major, no padding
//! ```

use std::io::{self, Write};

use crate::error::DitherError;
use crate::palette::RGB332_FORMAT_ID;

use super::EncodedImage;

/// Size of the binary header in bytes.
pub const BINARY_HEADER_LEN: usize = 6;

impl EncodedImage {
    /// Size of the binary container in bytes.
    pub fn binary_len(&self) -> usize {
        BINARY_HEADER_LEN + self.pixels().len()
    }

    fn binary_header(&self) -> [u8; BINARY_HEADER_LEN] {
        let [w0, w1] = self.width().to_le_bytes();
        let [h0, h1] = self.height().to_le_bytes();
        let [f0, f1] = RGB332_FORMAT_ID.to_le_bytes();
        [w0, w1, h0, h1, f0, f1]
    }

    /// Write the binary container to a writer.
    pub fn write_binary<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.binary_header())?;
        writer.write_all(self.pixels())?;
        writer.flush()
    }

    /// Serialize to the binary container.
    pub fn to_binary(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.binary_len());
        out.extend_from_slice(&self.binary_header());
        out.extend_from_slice(self.pixels());
        out
    }

    /// Parse a binary container.
    ///
    /// Fails with [`DitherError::Format`] if the header is truncated, the
    /// format id is not `0x332`, a dimension is zero, or the payload is not
    /// exactly `width * height` bytes.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DitherError> {
        if bytes.len() < BINARY_HEADER_LEN {
            return Err(DitherError::Format(format!(
                "binary header needs {BINARY_HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let field = |offset: usize| u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);
        let width = field(0);
        let height = field(2);
        let format_id = field(4);

        if format_id != RGB332_FORMAT_ID {
            return Err(DitherError::Format(format!(
                "unexpected format id 0x{format_id:X}, expected 0x{RGB332_FORMAT_ID:X}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(DitherError::Format(format!(
                "image has no pixels ({width}x{height})"
            )));
        }

        let payload = &bytes[BINARY_HEADER_LEN..];
        let expected = width as usize * height as usize;
        if payload.len() != expected {
            return Err(DitherError::Format(format!(
                "payload holds {} bytes, expected {expected} for {width}x{height}",
                payload.len()
            )));
        }

        Self::new(width, height, payload.to_vec())
    }
}
