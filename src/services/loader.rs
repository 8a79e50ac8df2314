use rgb332_dither::{EncodedImage, RgbImage};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::models::OutputFormat;

/// Decode an image file (PNG, JPEG, BMP, ...) into an RGB888 buffer.
///
/// Alpha is dropped and grayscale is expanded to three channels.
pub fn load_image(path: &Path) -> Result<RgbImage, ConvertError> {
    let decoded = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    tracing::info!(path = %path.display(), width, height, "Loaded image");

    Ok(RgbImage::from_raw(
        width as usize,
        height as usize,
        rgb.into_raw(),
    )?)
}

/// Write an RGB888 buffer as a 24-bit BMP.
pub fn save_bmp(image: &RgbImage, path: &Path) -> Result<(), ConvertError> {
    save_rgb(image, path, image::ImageFormat::Bmp)
}

/// Write an RGB888 buffer in the given container format.
pub fn save_rgb(
    image: &RgbImage,
    path: &Path,
    format: image::ImageFormat,
) -> Result<(), ConvertError> {
    let (width, height) = dimensions_u32(image)?;
    image::save_buffer_with_format(
        path,
        image.as_bytes(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
        format,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(source) => ConvertError::io(path, source),
        other => ConvertError::Encode(other.to_string()),
    })
}

/// Path of a debug snapshot: `<prefix>_<stage>.bmp`
pub fn debug_snapshot_path(prefix: &Path, stage: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!("_{stage}.bmp"));
    PathBuf::from(name)
}

/// Write a debug snapshot if a prefix is configured
pub fn write_debug_snapshot(
    image: &RgbImage,
    prefix: Option<&Path>,
    stage: &str,
) -> Result<(), ConvertError> {
    let Some(prefix) = prefix else {
        return Ok(());
    };
    let path = debug_snapshot_path(prefix, stage);
    save_bmp(image, &path)?;
    tracing::debug!(path = %path.display(), "Wrote debug snapshot");
    Ok(())
}

/// Read an encoded image back, either a binary container or a generated
/// C header (chosen by file extension).
pub fn load_encoded(path: &Path) -> Result<EncodedImage, ConvertError> {
    let encoded = match OutputFormat::from_path(path) {
        OutputFormat::Header => {
            let text = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
            EncodedImage::from_c_header(&text)?
        }
        OutputFormat::Binary => {
            let bytes = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
            EncodedImage::from_binary(&bytes)?
        }
    };
    tracing::info!(
        path = %path.display(),
        width = encoded.width(),
        height = encoded.height(),
        "Loaded encoded image"
    );
    Ok(encoded)
}

fn dimensions_u32(image: &RgbImage) -> Result<(u32, u32), ConvertError> {
    let too_large = || {
        ConvertError::Encode(format!(
            "image {}x{} is too large to save",
            image.width(),
            image.height()
        ))
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_debug_snapshot_path() {
        assert_eq!(
            debug_snapshot_path(Path::new("debug/logo"), "processed"),
            PathBuf::from("debug/logo_processed.bmp")
        );
        assert_eq!(
            debug_snapshot_path(Path::new("x"), "final"),
            PathBuf::from("x_final.bmp")
        );
    }

    #[test]
    fn test_bmp_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("img.bmp");
        let image = RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 128, 255]).unwrap();

        save_bmp(&image, &path).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_no_snapshot_without_prefix() {
        let image = RgbImage::filled(1, 1, [0, 0, 0]).unwrap();
        write_debug_snapshot(&image, None, "final").unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_image(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_load_encoded_binary_and_header() {
        let dir = TempDir::new().unwrap();
        let encoded = EncodedImage::new(2, 1, vec![0xE0, 0x03]).unwrap();

        let bin = dir.path().join("img.bin");
        std::fs::write(&bin, encoded.to_binary()).unwrap();
        assert_eq!(load_encoded(&bin).unwrap(), encoded);

        let header = dir.path().join("img.h");
        std::fs::write(&header, encoded.c_header("img").to_string()).unwrap();
        assert_eq!(load_encoded(&header).unwrap(), encoded);
    }

    #[test]
    fn test_load_encoded_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("junk.bin");
        std::fs::write(&bin, [1, 2, 3]).unwrap();
        assert!(matches!(load_encoded(&bin), Err(ConvertError::Dither(_))));
    }
}
