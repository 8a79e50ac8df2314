//! C header text output.
//!
//! The generated file declares `<name>_data`, a `uint8_t` array holding the
//! RGB332 payload with one source line per image row, and `<name>_image`, an
//! `Image_t` literal pointing at it. The `Image_t` definition itself lives
//! in `image_types.h`; a copy is embedded as a comment so the file documents
//! the layout it depends on.

use std::fmt;

use crate::error::DitherError;

use super::EncodedImage;

/// Contents of the `image_types.h` companion header.
pub const IMAGE_TYPES_H: &str = "#ifndef IMAGE_TYPES_H
#define IMAGE_TYPES_H

#include <stdint.h>

#define RGB332_FORMAT_ID 0x332

typedef struct {
    const uint8_t* data;
    uint16_t width;
    uint16_t height;
    uint16_t format_id;
} Image_t;

#endif // IMAGE_TYPES_H
";

/// Turn an arbitrary name into a C identifier.
///
/// Characters other than ASCII letters, digits and `_` become `_`, and a
/// leading digit gets a `_` prefix. An empty name becomes `image`.
///
/// ```
/// use rgb332_dither::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("logo-small"), "logo_small");
/// assert_eq!(sanitize_identifier("8ball"), "_8ball");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() {
        return "image".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// C header rendering of an [`EncodedImage`].
///
/// Created by [`EncodedImage::c_header`]; the text is produced through
/// [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct CHeader<'a> {
    image: &'a EncodedImage,
    name: String,
}

impl CHeader<'_> {
    /// The sanitized array name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let image = self.image;

        writeln!(f, "#ifndef {name}_H")?;
        writeln!(f, "#define {name}_H\n")?;
        writeln!(f, "#include \"image_types.h\"\n")?;
        writeln!(f, "/*\n{IMAGE_TYPES_H}*/\n")?;

        writeln!(
            f,
            "static const uint8_t {name}_data[{}] = {{",
            image.pixels().len()
        )?;
        for row in image.pixels().chunks(image.width() as usize) {
            for byte in row {
                write!(f, "0x{byte:02X}, ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}};\n")?;

        writeln!(f, "static const Image_t {name}_image = {{")?;
        writeln!(f, "    .data = {name}_data,")?;
        writeln!(f, "    .width = {},", image.width())?;
        writeln!(f, "    .height = {},", image.height())?;
        writeln!(f, "    .format_id = RGB332_FORMAT_ID")?;
        writeln!(f, "}};\n")?;

        writeln!(f, "#endif // {name}_H")
    }
}

impl EncodedImage {
    /// Render as a C header declaring `<name>_data` and `<name>_image`.
    ///
    /// `name` is passed through [`sanitize_identifier`].
    pub fn c_header(&self, name: &str) -> CHeader<'_> {
        CHeader {
            image: self,
            name: sanitize_identifier(name),
        }
    }

    /// Parse a header produced by [`EncodedImage::c_header`].
    ///
    /// Reads the `_data` array and the `.width`/`.height` fields of the
    /// struct literal. Fails with [`DitherError::Format`] if any of them is
    /// missing or malformed, or if the array does not hold exactly
    /// `width * height` bytes.
    pub fn from_c_header(text: &str) -> Result<Self, DitherError> {
        let start = text
            .find("_data[")
            .ok_or_else(|| DitherError::Format("no _data array found".to_string()))?;
        let body = &text[start..];
        let open = body
            .find('{')
            .ok_or_else(|| DitherError::Format("_data array has no initializer".to_string()))?;
        let close = body[open..]
            .find("};")
            .ok_or_else(|| DitherError::Format("_data array is not terminated".to_string()))?;
        let values = &body[open + 1..open + close];

        let pixels = values
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse_hex_byte)
            .collect::<Result<Vec<u8>, DitherError>>()?;

        let rest = &body[open + close..];
        let width = struct_field(rest, ".width")?;
        let height = struct_field(rest, ".height")?;
        if width == 0 || height == 0 {
            return Err(DitherError::Format(format!(
                "image has no pixels ({width}x{height})"
            )));
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DitherError::Format(format!(
                "_data array holds {} bytes, expected {expected} for {width}x{height}",
                pixels.len()
            )));
        }

        Self::new(width, height, pixels)
    }
}

fn parse_hex_byte(token: &str) -> Result<u8, DitherError> {
    token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .ok_or_else(|| DitherError::Format(format!("'{token}' is not a hex byte")))
}

fn struct_field(text: &str, field: &str) -> Result<u16, DitherError> {
    let value = text
        .lines()
        .filter_map(|line| line.trim().strip_prefix(field))
        .filter_map(|rest| rest.trim_start().strip_prefix('='))
        .map(|value| value.trim().trim_end_matches(',').trim())
        .next()
        .ok_or_else(|| DitherError::Format(format!("no {field} field found")))?;
    value
        .parse()
        .map_err(|_| DitherError::Format(format!("{field} value '{value}' is not a u16")))
}
