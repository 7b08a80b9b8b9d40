//! Error types for the render crate.

use thiserror::Error;

/// A color string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color `{input}`: expected #RRGGBB or #RRGGBBAA")]
pub struct ColorParseError {
    /// The rejected input.
    pub input: String,
}
