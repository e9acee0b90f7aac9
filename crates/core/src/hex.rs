//! Hex string decoding and encoding for [`Rgba`].
//!
//! Decoding accepts 1 to 6 digits with an optional leading `#` and never
//! fails on bad digits: a pair that is not valid hex reads as zero. Longer
//! input is truncated to six digits. Encoding always produces six uppercase
//! digits without a `#` and without alpha.

use crate::color::Rgba;
use crate::error::ColorError;

/// Maximum number of digits read from a hex string.
const MAX_DIGITS: usize = 6;

impl Rgba {
    /// Replaces r, g and b with the color described by `hex`.
    ///
    /// Digit layouts, after stripping `#` and padding odd lengths other than
    /// 3 with a trailing `0`:
    /// - `RR`: red only, green and blue become 0.
    /// - `VVx`: the first pair as a grey in all three channels.
    /// - `RRxx`: the first pair in both red and green, blue 0.
    /// - `RRGGBB`: one pair per channel.
    ///
    /// An empty string (or a lone `#`) is logged as an error and the color is
    /// returned unchanged. Use [`Rgba::try_from_hex`] to get the error instead.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_hex(self, hex: &str, alpha: Option<f32>) -> Rgba {
        self.try_from_hex(hex, alpha).unwrap_or_else(|err| {
            tracing::error!(hex, "cannot decode color: {err}");
            self
        })
    }

    /// Like [`Rgba::from_hex`] but returns `ColorError::EmptyHex` for an
    /// empty string or a lone `#` instead of logging it.
    #[allow(clippy::wrong_self_convention)]
    pub fn try_from_hex(self, hex: &str, alpha: Option<f32>) -> Result<Rgba, ColorError> {
        if hex.is_empty() || hex == "#" {
            return Err(ColorError::EmptyHex);
        }

        let digits = normalize(hex);
        let (r, g, b) = match digits.len() {
            2 => (hex_byte(&digits[0..2]), 0, 0),
            3 => {
                let grey = hex_byte(&digits[0..2]);
                (grey, grey, grey)
            }
            // The second pair is ignored: red and green both take the first.
            4 => {
                let first = hex_byte(&digits[0..2]);
                (first, first, 0)
            }
            6 => (
                hex_byte(&digits[0..2]),
                hex_byte(&digits[2..4]),
                hex_byte(&digits[4..6]),
            ),
            _ => (0, 0, 0),
        };

        Ok(Rgba {
            r: byte_to_channel(r),
            g: byte_to_channel(g),
            b: byte_to_channel(b),
            ..self
        }
        .with_alpha_override(alpha))
    }

    /// Quantizes r, g and b to bytes.
    ///
    /// Each channel is scaled by 255, rounded half-to-even and clamped to
    /// [0, 255]. NaN becomes 0.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }

    /// Encodes r, g and b as six uppercase hex digits, e.g. `"FF00FF"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("{r:02X}{g:02X}{b:02X}")
    }
}

/// Strips one leading `#`, keeps at most six characters and pads odd
/// lengths (other than 3) with a trailing `'0'`.
fn normalize(hex: &str) -> Vec<char> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let mut digits: Vec<char> = hex.chars().take(MAX_DIGITS).collect();
    if digits.len() % 2 != 0 && digits.len() != 3 {
        digits.push('0');
    }
    digits
}

/// Parses two hex digits, reading anything else as 0.
///
/// Whitespace and sign characters are not digits, so `" F"` reads as 0.
fn hex_byte(pair: &[char]) -> u8 {
    match (pair[0].to_digit(16), pair[1].to_digit(16)) {
        (Some(hi), Some(lo)) => (hi * 16 + lo) as u8,
        _ => 0,
    }
}

fn byte_to_channel(byte: u8) -> f32 {
    byte as f32 / 255.0
}

fn channel_to_byte(c: f32) -> u8 {
    (c * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}
