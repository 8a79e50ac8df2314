use rgb332_dither::{DitherMethod, EncodedImage, RgbImage, ToneCurve};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConvertError;
use crate::models::{ConvertConfig, OutputFormat};
use crate::services::loader;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub width: u16,
    pub height: u16,
    pub method: DitherMethod,
    pub format: OutputFormat,
    pub bytes_written: usize,
}

/// Runs the conversion pipeline: tone curve, dithering, RGB332 encoding.
///
/// The tone curve is built once at construction, so invalid gamma or
/// contrast values are reported before any file is touched.
pub struct Converter {
    config: ConvertConfig,
    curve: ToneCurve,
}

impl Converter {
    /// Create a converter, validating the tone parameters
    pub fn new(config: ConvertConfig) -> Result<Self, ConvertError> {
        let curve = ToneCurve::new(&config.tone_options())?;
        Ok(Self { config, curve })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Apply the tone curve in place. Skipped when the curve is the identity.
    pub fn apply_tone(&self, image: &mut RgbImage) -> Result<(), ConvertError> {
        if self.curve.is_identity() {
            tracing::debug!("Tone curve is identity, skipping");
            return Ok(());
        }
        self.curve.apply(image)?;
        Ok(())
    }

    /// Tone-correct, dither and encode an in-memory image
    pub fn process(&self, image: &mut RgbImage) -> Result<EncodedImage, ConvertError> {
        self.apply_tone(image)?;
        self.config.dither_method.apply(image);
        Ok(EncodedImage::from_image(image)?)
    }

    /// Convert `input` to `output`, writing debug snapshots if configured
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConvertReport, ConvertError> {
        let debug_prefix = self.config.debug_prefix.as_deref();

        let mut image = loader::load_image(input)?;
        EncodedImage::check_dimensions(image.width(), image.height())?;

        self.apply_tone(&mut image)?;
        loader::write_debug_snapshot(&image, debug_prefix, "processed")?;

        self.config.dither_method.apply(&mut image);
        let encoded = EncodedImage::from_image(&image)?;

        let format = self.config.output_format(output);
        let bytes_written = self.write_encoded(&encoded, output, format)?;

        loader::write_debug_snapshot(&image, debug_prefix, "final")?;

        tracing::info!(
            output = %output.display(),
            %format,
            bytes = bytes_written,
            "Wrote converted image"
        );

        Ok(ConvertReport {
            width: encoded.width(),
            height: encoded.height(),
            method: self.config.dither_method,
            format,
            bytes_written,
        })
    }

    /// Serialize an encoded image to `output` in the given format
    pub fn write_encoded(
        &self,
        encoded: &EncodedImage,
        output: &Path,
        format: OutputFormat,
    ) -> Result<usize, ConvertError> {
        let file = File::create(output).map_err(|e| ConvertError::io(output, e))?;
        let mut writer = BufWriter::new(file);

        let written = match format {
            OutputFormat::Binary => {
                encoded
                    .write_binary(&mut writer)
                    .map_err(|e| ConvertError::io(output, e))?;
                encoded.binary_len()
            }
            OutputFormat::Header => {
                let name = self.config.array_name_for(output);
                let header = encoded.c_header(&name);
                tracing::debug!(array = header.name(), "Rendering C header");
                let text = header.to_string();
                writer
                    .write_all(text.as_bytes())
                    .and_then(|()| writer.flush())
                    .map_err(|e| ConvertError::io(output, e))?;
                text.len()
            }
        };
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb332_dither::DitherError;

    #[test]
    fn test_invalid_gamma_rejected_up_front() {
        let config = ConvertConfig {
            gamma: 0.0,
            ..Default::default()
        };
        let err = Converter::new(config).err().unwrap();
        assert!(matches!(
            err,
            ConvertError::Dither(DitherError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_write_encoded_binary_matches_container() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.bin");
        let converter = Converter::new(ConvertConfig::default()).unwrap();
        let encoded = EncodedImage::new(3, 1, vec![0xE0, 0x1C, 0x03]).unwrap();

        let written = converter
            .write_encoded(&encoded, &path, OutputFormat::Binary)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(written, bytes.len());
        assert_eq!(bytes, encoded.to_binary());
    }

    #[test]
    fn test_process_solid_red() {
        let converter = Converter::new(ConvertConfig::default()).unwrap();
        let mut image = RgbImage::filled(2, 2, [255, 0, 0]).unwrap();
        let encoded = converter.process(&mut image).unwrap();
        assert_eq!(encoded.pixels(), &[0xE0; 4]);
    }

    #[test]
    fn test_process_applies_tone_before_dither() {
        let config = ConvertConfig {
            lightness: 0.0,
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        let mut image = RgbImage::filled(3, 3, [255, 255, 255]).unwrap();
        let encoded = converter.process(&mut image).unwrap();
        assert!(encoded.pixels().iter().all(|&p| p == 0x00));
    }
}
