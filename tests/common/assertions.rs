//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert a binary container has the expected header and payload size
pub fn assert_binary_container(bytes: &[u8], width: u16, height: u16) {
    assert!(
        bytes.len() >= 6,
        "Expected at least a 6-byte header, got {} bytes",
        bytes.len()
    );
    assert_eq!(&bytes[0..2], &width.to_le_bytes(), "width field");
    assert_eq!(&bytes[2..4], &height.to_le_bytes(), "height field");
    assert_eq!(&bytes[4..6], &[0x32, 0x03], "format id field");
    assert_eq!(
        bytes.len() - 6,
        width as usize * height as usize,
        "payload length"
    );
}

/// Assert a generated C header declares the expected symbols
pub fn assert_c_header(text: &str, name: &str, width: u16, height: u16) {
    assert!(text.starts_with(&format!("#ifndef {name}_H\n#define {name}_H\n")));
    assert!(text.contains("#include \"image_types.h\""));
    assert!(text.contains(&format!(
        "static const uint8_t {name}_data[{}] = {{",
        width as usize * height as usize
    )));
    assert!(text.contains(&format!("static const Image_t {name}_image = {{")));
    assert!(text.contains(&format!("    .width = {width},\n")));
    assert!(text.contains(&format!("    .height = {height},\n")));
    assert!(text.contains("    .format_id = RGB332_FORMAT_ID\n"));
    assert!(text.ends_with(&format!("#endif // {name}_H\n")));
}
