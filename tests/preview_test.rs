//! Tests for reading encoded files back and rendering previews.

mod common;

use pretty_assertions::assert_eq;
use r3g3b2::error::ConvertError;
use r3g3b2::models::ConvertConfig;
use r3g3b2::rendering::preview;
use r3g3b2::services::{loader, Converter};
use rgb332_dither::palette::rgb332_to_rgb;
use rgb332_dither::{DitherError, EncodedImage};
use tempfile::TempDir;

#[test]
fn test_binary_to_png_preview() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tiles.bin");
    let encoded = EncodedImage::new(4, 1, vec![0xE0, 0x1C, 0x03, 0xFF]).unwrap();
    std::fs::write(&input, encoded.to_binary()).unwrap();

    let loaded = loader::load_encoded(&input).unwrap();
    assert_eq!(loaded, encoded);

    let output = dir.path().join("tiles.png");
    preview::write_preview(&loaded, &output).unwrap();

    let rendered = image::open(&output).unwrap().to_rgb8();
    assert_eq!(rendered.dimensions(), (4, 1));
    let colors: Vec<[u8; 3]> = rendered.pixels().map(|p| p.0).collect();
    assert_eq!(
        colors,
        vec![[0xFF, 0, 0], [0, 0xFF, 0], [0, 0, 0xFF], [0xFF, 0xFF, 0xFF]]
    );
}

#[test]
fn test_header_to_bmp_preview() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ramp.png");
    common::write_png(dir.path(), "ramp.png", 9, 5, &common::gradient(9, 5));
    let header = dir.path().join("ramp.h");

    Converter::new(ConvertConfig::default())
        .unwrap()
        .convert_file(&input, &header)
        .unwrap();

    let encoded = loader::load_encoded(&header).unwrap();
    assert_eq!(encoded.width(), 9);
    assert_eq!(encoded.height(), 5);

    let output = dir.path().join("ramp_preview.bmp");
    preview::write_preview(&encoded, &output).unwrap();

    let rendered = image::open(&output).unwrap().to_rgb8();
    assert_eq!(rendered.dimensions(), (9, 5));
    for (pixel, &byte) in rendered.pixels().zip(encoded.pixels()) {
        assert_eq!(pixel.0, rgb332_to_rgb(byte));
    }
}

#[test]
fn test_preview_matches_converted_payload() {
    let dir = TempDir::new().unwrap();
    let input = common::write_png(dir.path(), "noise.png", 6, 6, &common::noise(6, 6, 3));
    let bin = dir.path().join("noise.bin");

    Converter::new(ConvertConfig::default())
        .unwrap()
        .convert_file(&input, &bin)
        .unwrap();

    let encoded = loader::load_encoded(&bin).unwrap();
    let output = dir.path().join("noise_preview.png");
    preview::write_preview(&encoded, &output).unwrap();

    let rendered = image::open(&output).unwrap().to_rgb8().into_raw();
    assert_eq!(rendered, encoded.to_rgb().as_bytes());
}

#[test]
fn test_truncated_binary_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.bin");
    // Claims 4x4 but carries only two payload bytes
    std::fs::write(&input, [4, 0, 4, 0, 0x32, 0x03, 0xE0, 0xE0]).unwrap();

    let err = loader::load_encoded(&input).unwrap_err();
    assert!(matches!(err, ConvertError::Dither(DitherError::Format(_))));
}

#[test]
fn test_wrong_format_id_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rgb565.bin");
    std::fs::write(&input, [1, 0, 1, 0, 0x65, 0x05, 0x00]).unwrap();

    let err = loader::load_encoded(&input).unwrap_err();
    assert!(err.to_string().contains("0x565"));
}

#[test]
fn test_header_without_array_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.h");
    std::fs::write(&input, "#ifndef EMPTY_H\n#define EMPTY_H\n#endif\n").unwrap();

    let err = loader::load_encoded(&input).unwrap_err();
    assert!(matches!(err, ConvertError::Dither(DitherError::Format(_))));
}

#[test]
fn test_missing_encoded_file() {
    let dir = TempDir::new().unwrap();
    let err = loader::load_encoded(&dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
}
