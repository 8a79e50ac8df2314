use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use r3g3b2::models::{ConfigOverrides, ConvertConfig, OutputFormat};
use r3g3b2::rendering::preview;
use r3g3b2::services::{loader, Converter};
use rgb332_dither::palette::palette_color;
use rgb332_dither::DitherMethod;

#[derive(Parser)]
#[command(name = "r3g3b2")]
#[command(about = "Convert images to RGB332 for small embedded displays")]
struct Cli {
    /// Log pipeline details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to a binary RGB332 blob or a C header
    Convert {
        /// Input image (PNG, JPEG, BMP, ...)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; `.h`/`.hpp` selects header output unless --format is given
        #[arg(short, long)]
        output: PathBuf,

        /// Dither method: none, floyd-steinberg, jarvis, atkinson, bayer, or a code -1..3
        #[arg(short = 'm', long = "method", allow_hyphen_values = true)]
        method: Option<DitherMethod>,

        /// Gamma exponent (> 0)
        #[arg(short, long)]
        gamma: Option<f32>,

        /// Contrast (-255..259)
        #[arg(short, long, allow_negative_numbers = true)]
        contrast: Option<f32>,

        /// Brightness multiplier (>= 0)
        #[arg(short = 'b', long = "brightness", alias = "lightness")]
        brightness: Option<f32>,

        /// Output format: binary or header
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Write <PREFIX>_processed.bmp and <PREFIX>_final.bmp snapshots
        #[arg(long, value_name = "PREFIX")]
        debug: Option<PathBuf>,

        /// C identifier for header output (defaults to the output file stem)
        #[arg(long)]
        array_name: Option<String>,

        /// YAML file with default settings; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Render an encoded .bin or .h file back to a viewable PNG or BMP
    Preview {
        /// Encoded input (.bin or .h)
        #[arg(short, long)]
        input: PathBuf,

        /// Output image (.png or .bmp)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the 256-color palette used for dithering
    Palette,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            method,
            gamma,
            contrast,
            brightness,
            format,
            debug,
            array_name,
            config,
        } => {
            let base = match config {
                Some(path) => ConvertConfig::load(&path)?,
                None => ConvertConfig::default(),
            };
            let config = base.with_overrides(ConfigOverrides {
                gamma,
                contrast,
                lightness: brightness,
                dither_method: method,
                format,
                debug_prefix: debug,
                array_name,
            });
            run_convert_command(config, &input, &output)
        }
        Commands::Preview { input, output } => run_preview_command(&input, &output),
        Commands::Palette => {
            run_palette_command();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "r3g3b2=debug,rgb332_dither=debug"
    } else {
        "r3g3b2=warn,rgb332_dither=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Convert an image file to RGB332
fn run_convert_command(
    config: ConvertConfig,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let converter = Converter::new(config)?;
    let report = converter.convert_file(input, output)?;

    println!(
        "Converted {} -> {} ({}x{}, dither {}, {} format, {} bytes)",
        input.display(),
        output.display(),
        report.width,
        report.height,
        report.method,
        report.format,
        report.bytes_written
    );
    Ok(())
}

/// Expand an encoded file back to RGB888 for viewing
fn run_preview_command(input: &Path, output: &Path) -> anyhow::Result<()> {
    let encoded = loader::load_encoded(input)?;
    preview::write_preview(&encoded, output)?;

    println!(
        "Rendered {} ({}x{})",
        output.display(),
        encoded.width(),
        encoded.height()
    );
    Ok(())
}

/// Print every palette entry with its RGB332 byte
fn run_palette_command() {
    println!("index  rgb332  color");
    for index in 0..=255u8 {
        let [r, g, b] = palette_color(index);
        println!("{index:>5}  0x{index:02X}    #{r:02X}{g:02X}{b:02X}");
    }
}
