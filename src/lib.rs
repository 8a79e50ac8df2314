//! r3g3b2 - RGB888 to RGB332 converter
//!
//! Loads an image, applies a tone curve, dithers it to the 256-color RGB332
//! space and writes a binary blob or a C header for embedded displays.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
