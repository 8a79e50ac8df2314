use rgb332_dither::palette::rgb332_to_rgb;
use rgb332_dither::EncodedImage;
use std::io::Cursor;
use std::path::Path;

use crate::error::ConvertError;
use crate::services::loader;

/// PLTE chunk for the full RGB332 color space, indexed by the encoded byte.
pub fn rgb332_plte() -> Vec<u8> {
    (0..=255u8).flat_map(rgb332_to_rgb).collect()
}

/// Encode an RGB332 image as an 8-bit indexed PNG.
///
/// Each encoded byte is used directly as the palette index, so the PNG
/// shows exactly the colors the display will.
pub fn encode_png(image: &EncodedImage) -> Result<Vec<u8>, ConvertError> {
    let plte = rgb332_plte();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.pixels())
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Write a viewable preview of an encoded image.
///
/// `.png` gets an indexed PNG; any other extension is expanded to RGB888
/// and saved in the format the extension names (BMP for `.bmp`).
pub fn write_preview(image: &EncodedImage, path: &Path) -> Result<(), ConvertError> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        let bytes = encode_png(image)?;
        std::fs::write(path, &bytes).map_err(|e| ConvertError::io(path, e))?;
    } else {
        let format = image::ImageFormat::from_path(path).map_err(|e| {
            ConvertError::Encode(format!("{}: {e}", path.display()))
        })?;
        loader::save_rgb(&image.to_rgb(), path, format)?;
    }

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Wrote preview"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plte_covers_every_byte() {
        let plte = rgb332_plte();
        assert_eq!(plte.len(), 256 * 3);
        assert_eq!(&plte[0..3], &[0, 0, 0]);
        assert_eq!(&plte[0xE0 * 3..0xE0 * 3 + 3], &[0xFF, 0, 0]);
        assert_eq!(&plte[0xFF * 3..], &[0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_encode_png_decodes_to_palette_colors() {
        let encoded = EncodedImage::new(2, 1, vec![0xE0, 0x03]).unwrap();
        let bytes = encode_png(&encoded).unwrap();

        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!(info.width, 2);
        assert_eq!(info.height, 1);
        assert_eq!(info.color_type, png::ColorType::Indexed);

        let mut buf = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut buf).unwrap();
        assert_eq!(&buf[..2], &[0xE0, 0x03]);
    }
}
