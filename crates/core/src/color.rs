//! RGBA color value and HSV conversions.
//!
//! [`Rgba`] is a plain `Copy` value with four `f32` channels, conventionally
//! in [0, 1]. Conversions never clamp and never mutate shared state: each one
//! takes the color by value and returns a new color.
//!
//! Hue is measured in degrees, saturation and value in [0, 1]. The HSV math
//! follows the usual chroma/sector construction without wrapping the hue, so
//! a hue outside [0, 360) contributes no chroma at all.

use serde::{Deserialize, Serialize};

/// RGBA color with components conventionally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Hue (degrees), saturation and value of a color.
///
/// Always derived from an [`Rgba`]; nothing stores or caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Replaces r, g and b with the color described by hue `h` (degrees),
    /// saturation `s` and value `v`.
    ///
    /// Alpha is kept unless `alpha` is a positive override. See
    /// [`hsv_to_rgb`] for the handling of out-of-range hues.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_hsv(self, h: f32, s: f32, v: f32, alpha: Option<f32>) -> Rgba {
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Rgba { r, g, b, ..self }.with_alpha_override(alpha)
    }

    /// Converts the RGB channels to hue, saturation and value. Alpha is ignored.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Hue in degrees. Recomputes the full HSV triple.
    pub fn hue(self) -> f32 {
        self.to_hsv().h
    }

    /// Saturation. Recomputes the full HSV triple.
    pub fn saturation(self) -> f32 {
        self.to_hsv().s
    }

    /// Value, also called vibrance. Recomputes the full HSV triple.
    pub fn value(self) -> f32 {
        self.to_hsv().v
    }

    /// Applies an optional alpha override: only a positive value replaces alpha.
    pub fn with_alpha_override(self, alpha: Option<f32>) -> Rgba {
        match alpha {
            Some(a) if a > 0.0 => Rgba { a, ..self },
            _ => self,
        }
    }
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Builds a color from this triple, keeping `base`'s alpha.
    pub fn to_rgba(self, base: Rgba) -> Rgba {
        base.from_hsv(self.h, self.s, self.v, None)
    }
}

impl From<Rgba> for Hsv {
    fn from(c: Rgba) -> Self {
        c.to_hsv()
    }
}

/// Converts HSV to RGB channels.
///
/// The hue selects one of six 60° sectors. Hues below 0 or at/above 360
/// (and NaN) match no sector, so the result is a grey of `v - s * v` in
/// every channel.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let chroma = s * v;
    let h_dash = h / 60.0;
    let x = chroma * (1.0 - ((h_dash % 2.0) - 1.0).abs());

    let (r, g, b) = match h_dash {
        d if (0.0..1.0).contains(&d) => (chroma, x, 0.0),
        d if (1.0..2.0).contains(&d) => (x, chroma, 0.0),
        d if (2.0..3.0).contains(&d) => (0.0, chroma, x),
        d if (3.0..4.0).contains(&d) => (0.0, x, chroma),
        d if (4.0..5.0).contains(&d) => (x, 0.0, chroma),
        d if (5.0..6.0).contains(&d) => (chroma, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let min = v - chroma;
    (r + min, g + min, b + min)
}

/// Converts RGB channels to HSV.
///
/// Achromatic input (all channels equal) has hue 0 and saturation 0. When two
/// channels tie for the maximum, red wins over green and green over blue.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let chroma = max - min;

    if chroma == 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let sector = if r == max {
        let h = (g - b) / chroma;
        if h < 0.0 {
            h + 6.0
        } else {
            h
        }
    } else if g == max {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    Hsv::new(sector * 60.0, chroma / max, max)
}
