//! Error types for the grid container and its adapters.

use thiserror::Error;

/// Errors produced by adapters, the grid container and configuration.
#[derive(Error, Debug)]
pub enum GridError {
    /// An item or child position outside `[0, count)` was requested.
    #[error("index {index} out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    /// A layout parameter was given a value it cannot hold.
    #[error("invalid value for `{parameter}`: {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    /// A configuration document could not be parsed.
    #[error("failed to parse grid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration could not be written as TOML.
    #[error("failed to serialize grid configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A configuration file could not be read.
    #[error("failed to read grid configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A child id does not belong to this container.
    #[error("child does not belong to this grid")]
    UnknownChild,
}

impl GridError {
    /// Build an [`GridError::IndexOutOfRange`] error.
    pub fn out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    /// Build an [`GridError::InvalidConfiguration`] error.
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
