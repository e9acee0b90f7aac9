#![deny(unsafe_code)]
//! CLI binary for colorext.
//!
//! Subcommands:
//! - `hex <HEX>`: decode a hex color string
//! - `hsv <H> <S> <V>`: build a color from hue, saturation and value
//! - `rgb <R> <G> <B>`: take channels in [0, 1] as-is
//!
//! Each prints the resulting color's hex, RGB bytes, hue, saturation and value.

mod error;
mod readout;

use clap::{Parser, Subcommand};
use colorext_core::Rgba;
use error::CliError;
use readout::Readout;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorext", about = "Convert colors between hex, RGB and HSV")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a hex color string (1 to 6 digits, optional leading '#').
    Hex {
        /// Hex digits, e.g. "#FF00FF", "AAA" or "FF".
        hex: String,

        /// Alpha override; only positive values take effect.
        #[arg(short, long, allow_negative_numbers = true)]
        alpha: Option<f32>,
    },
    /// Build a color from hue (degrees), saturation and value.
    Hsv {
        /// Hue in degrees; values outside [0, 360) add no chroma.
        #[arg(allow_negative_numbers = true)]
        hue: f32,

        /// Saturation in [0, 1].
        #[arg(allow_negative_numbers = true)]
        saturation: f32,

        /// Value (brightness) in [0, 1].
        #[arg(allow_negative_numbers = true)]
        value: f32,

        /// Alpha override; only positive values take effect.
        #[arg(short, long, allow_negative_numbers = true)]
        alpha: Option<f32>,
    },
    /// Read a color from red, green and blue channels in [0, 1].
    Rgb {
        #[arg(allow_negative_numbers = true)]
        red: f32,

        #[arg(allow_negative_numbers = true)]
        green: f32,

        #[arg(allow_negative_numbers = true)]
        blue: f32,

        /// Alpha override; only positive values take effect.
        #[arg(short, long, allow_negative_numbers = true)]
        alpha: Option<f32>,
    },
}

/// Rejects NaN and infinities, which clap's `f32` parser accepts.
fn finite(name: &str, value: f32) -> Result<f32, CliError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CliError::Input(format!("{name} must be a finite number, got {value}")))
    }
}

fn finite_alpha(alpha: Option<f32>) -> Result<Option<f32>, CliError> {
    alpha.map(|a| finite("alpha", a)).transpose()
}

/// Builds the color a subcommand describes, starting from opaque black.
fn color_for(command: &Command) -> Result<Rgba, CliError> {
    let base = Rgba::BLACK;
    match *command {
        Command::Hex { ref hex, alpha } => {
            tracing::debug!(hex = hex.as_str(), "decoding hex color");
            Ok(base.try_from_hex(hex, finite_alpha(alpha)?)?)
        }
        Command::Hsv {
            hue,
            saturation,
            value,
            alpha,
        } => {
            tracing::debug!(hue, saturation, value, "building color from hsv");
            Ok(base.from_hsv(
                finite("hue", hue)?,
                finite("saturation", saturation)?,
                finite("value", value)?,
                finite_alpha(alpha)?,
            ))
        }
        Command::Rgb {
            red,
            green,
            blue,
            alpha,
        } => {
            tracing::debug!(red, green, blue, "reading rgb channels");
            let color = Rgba::rgb(
                finite("red", red)?,
                finite("green", green)?,
                finite("blue", blue)?,
            );
            Ok(color.with_alpha_override(finite_alpha(alpha)?))
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let readout = Readout::new(color_for(&cli.command)?);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&readout)?);
    } else {
        println!("{readout}");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        eprintln!("{}", e.report(json_mode));
        process::exit(e.exit_code());
    }
}
