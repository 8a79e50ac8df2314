use rgb332_dither::{DitherMethod, ToneOptions};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConvertError;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 6-byte header + RGB332 payload
    #[default]
    Binary,
    /// C header with a `uint8_t` array and an `Image_t` literal
    Header,
}

impl OutputFormat {
    /// Infer the format from an output path: `.h`/`.hpp` is a header,
    /// anything else is binary.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("h") | Some("hpp") => OutputFormat::Header,
            _ => OutputFormat::Binary,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Binary => f.write_str("binary"),
            OutputFormat::Header => f.write_str("header"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(OutputFormat::Binary),
            "header" | "h" => Ok(OutputFormat::Header),
            other => Err(format!("unknown format '{other}' (expected binary or header)")),
        }
    }
}

/// Conversion settings loaded from a YAML file
///
/// Every field is optional in the file; missing fields keep their defaults.
///
/// ```yaml
/// gamma: 2.2
/// contrast: 20
/// lightness: 1.1
/// dither_method: atkinson   # or an integer code -1..3
/// format: header
/// debug_prefix: debug/logo
/// array_name: logo
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Gamma exponent (> 0)
    pub gamma: f32,

    /// Contrast adjustment (< 259)
    pub contrast: f32,

    /// Lightness multiplier (>= 0)
    pub lightness: f32,

    /// Dithering algorithm, by name or integer code
    #[serde(deserialize_with = "deserialize_dither_method")]
    pub dither_method: DitherMethod,

    /// Output format; inferred from the output path when unset
    pub format: Option<OutputFormat>,

    /// Write `<prefix>_processed.bmp` and `<prefix>_final.bmp` snapshots
    pub debug_prefix: Option<PathBuf>,

    /// C identifier for header output; defaults to the output file stem
    pub array_name: Option<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            contrast: 0.0,
            lightness: 1.0,
            dither_method: DitherMethod::None,
            format: None,
            debug_prefix: None,
            array_name: None,
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub gamma: Option<f32>,
    pub contrast: Option<f32>,
    pub lightness: Option<f32>,
    pub dither_method: Option<DitherMethod>,
    pub format: Option<OutputFormat>,
    pub debug_prefix: Option<PathBuf>,
    pub array_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DitherSetting {
    Code(i32),
    Name(String),
}

fn deserialize_dither_method<'de, D>(deserializer: D) -> Result<DitherMethod, D::Error>
where
    D: Deserializer<'de>,
{
    match DitherSetting::deserialize(deserializer)? {
        DitherSetting::Code(code) => Ok(DitherMethod::from_code(code)),
        DitherSetting::Name(name) => name.parse().map_err(serde::de::Error::custom),
    }
}

impl ConvertConfig {
    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        let config = Self::from_yaml_str(&content).map_err(|e| match e {
            ConvertError::Config(msg) => ConvertError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::info!(
            path = %path.display(),
            gamma = config.gamma,
            contrast = config.contrast,
            lightness = config.lightness,
            dither = %config.dither_method,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Apply command-line values on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(gamma) = overrides.gamma {
            self.gamma = gamma;
        }
        if let Some(contrast) = overrides.contrast {
            self.contrast = contrast;
        }
        if let Some(lightness) = overrides.lightness {
            self.lightness = lightness;
        }
        if let Some(method) = overrides.dither_method {
            self.dither_method = method;
        }
        if overrides.format.is_some() {
            self.format = overrides.format;
        }
        if overrides.debug_prefix.is_some() {
            self.debug_prefix = overrides.debug_prefix;
        }
        if overrides.array_name.is_some() {
            self.array_name = overrides.array_name;
        }
        self
    }

    /// Tone curve parameters
    pub fn tone_options(&self) -> ToneOptions {
        ToneOptions::new()
            .gamma(self.gamma)
            .contrast(self.contrast)
            .lightness(self.lightness)
    }

    /// Output format for a given output path
    pub fn output_format(&self, output: &Path) -> OutputFormat {
        self.format.unwrap_or_else(|| OutputFormat::from_path(output))
    }

    /// Array name for header output: the configured name, or the output
    /// file stem
    pub fn array_name_for(&self, output: &Path) -> String {
        self.array_name.clone().unwrap_or_else(|| {
            output
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
