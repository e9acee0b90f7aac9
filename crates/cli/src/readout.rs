//! The color summary printed by every subcommand.
//!
//! Shows the same figures a color picker panel would: hex string, RGB bytes,
//! hue in whole degrees, saturation and value as whole percents.

use colorext_core::{Hsv, Rgba};
use serde::Serialize;
use std::fmt;

/// Everything the CLI reports about one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    /// `#RRGGBB`.
    pub hex: String,
    /// Channels quantized the same way as `hex`.
    pub rgb8: [u8; 3],
    /// Alpha as stored, not quantized.
    pub alpha: f32,
    /// Hue rounded to whole degrees.
    pub hue_degrees: i32,
    /// Saturation in whole percent.
    pub saturation_percent: i32,
    /// Value in whole percent.
    pub value_percent: i32,
    /// The unrounded color.
    pub color: Rgba,
    /// The unrounded HSV triple.
    pub hsv: Hsv,
}

impl Readout {
    pub fn new(color: Rgba) -> Self {
        let hsv = color.to_hsv();
        Self {
            hex: format!("#{}", color.to_hex()),
            rgb8: color.to_rgb8(),
            alpha: color.a,
            hue_degrees: hsv.h.round_ties_even() as i32,
            saturation_percent: (hsv.s * 100.0).round_ties_even() as i32,
            value_percent: (hsv.v * 100.0).round_ties_even() as i32,
            color,
            hsv,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb8;
        writeln!(f, "hex         {}", self.hex)?;
        writeln!(f, "rgb         {r} {g} {b}")?;
        writeln!(f, "alpha       {:.3}", self.alpha)?;
        writeln!(f, "hue         {}°", self.hue_degrees)?;
        writeln!(f, "saturation  {}%", self.saturation_percent)?;
        write!(f, "value       {}%", self.value_percent)
    }
}
