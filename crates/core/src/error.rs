//! Error types for colorext.

use thiserror::Error;

/// Errors produced by color conversions.
///
/// Conversions are lenient: malformed hex pairs decode as zero and
/// out-of-range numbers pass straight through. The only rejected input is a
/// hex string with no digits at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The hex string was empty or consisted of a lone `#`.
    #[error("hex string is empty")]
    EmptyHex,
}
