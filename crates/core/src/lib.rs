#![deny(unsafe_code)]
//! Hex and HSV conversions for RGBA colors.
//!
//! Provides the [`Rgba`] color value, the derived [`Hsv`] triple, lenient
//! hex decoding/encoding and the HSV round trip. All conversions are pure;
//! the only side effect is an error log record when an empty hex string is
//! decoded with [`Rgba::from_hex`].

pub mod color;
pub mod error;
pub mod hex;

pub use color::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgba};
pub use error::ColorError;
