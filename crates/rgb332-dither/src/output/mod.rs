//! Output encoding for dithered images.
//!
//! [`EncodedImage`] holds one RGB332 byte per pixel plus 16-bit dimensions.
//! It is produced from a finished [`RgbImage`](crate::RgbImage) by bit
//! truncation, never by the grid-nearest mapping used while dithering.
//!
//! # Output Formats
//!
//! - **Binary** ([`EncodedImage::to_binary`]): 6-byte little-endian header
//!   `{width, height, format_id}` followed by the payload
//! - **C header** ([`EncodedImage::c_header`]): a `uint8_t` array and an
//!   `Image_t` struct literal for static linkage into firmware
//!
//! Both formats can be read back ([`EncodedImage::from_binary`],
//! [`EncodedImage::from_c_header`]).

mod binary;
mod encoded;
mod header;

pub use binary::BINARY_HEADER_LEN;
pub use encoded::{encode_payload, EncodedImage};
pub use header::{sanitize_identifier, CHeader, IMAGE_TYPES_H};
