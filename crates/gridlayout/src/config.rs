//! Grid configuration.
//!
//! [`GridConfig`] carries every construction parameter of a
//! [`GridView`](crate::widget::GridView) and can be loaded from TOML:
//!
//! ```
//! use gridlayout::GridConfig;
//!
//! let config = GridConfig::from_toml_str(r##"
//! column_count = 3
//! horizontal_spacing = 10
//! horizontal_spacing_color = "#DDDDDD"
//! horizontal_edge_spacing = true
//!
//! [padding]
//! left = 4
//! right = 4
//! "##).unwrap();
//!
//! assert_eq!(config.column_count, 3);
//! assert_eq!(config.padding.horizontal(), 8);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use gridlayout_core::logging::targets;
use gridlayout_render::Color;

use crate::error::{GridError, Result};
use crate::widget::Padding;

/// All layout parameters of a grid container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns; at least 1.
    pub column_count: usize,
    /// Column width used when the width is unconstrained; 0 means unset.
    pub column_width: i32,
    /// Distance between columns.
    pub horizontal_spacing: i32,
    /// Distance between rows.
    pub vertical_spacing: i32,
    /// Fill for the gaps between columns.
    pub horizontal_spacing_color: Color,
    /// Fill for the gaps between rows.
    pub vertical_spacing_color: Color,
    /// Also put horizontal spacing before the first and after the last column.
    pub horizontal_edge_spacing: bool,
    /// Also put vertical spacing above the first and below the last row.
    pub vertical_edge_spacing: bool,
    /// Optional container background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub padding: Padding,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: 1,
            column_width: 0,
            horizontal_spacing: 0,
            vertical_spacing: 0,
            horizontal_spacing_color: Color::TRANSPARENT,
            vertical_spacing_color: Color::TRANSPARENT,
            horizontal_edge_spacing: false,
            vertical_edge_spacing: false,
            background: None,
            padding: Padding::default(),
        }
    }
}

impl GridConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded grid configuration");
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidConfiguration`] naming the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        validate_column_count(self.column_count)?;
        validate_non_negative("column_width", self.column_width)?;
        validate_non_negative("horizontal_spacing", self.horizontal_spacing)?;
        validate_non_negative("vertical_spacing", self.vertical_spacing)?;
        validate_padding(self.padding)
    }

    pub fn with_columns(mut self, column_count: usize) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_column_width(mut self, column_width: i32) -> Self {
        self.column_width = column_width;
        self
    }

    /// Set horizontal and vertical spacing (builder pattern).
    pub fn with_spacing(mut self, horizontal: i32, vertical: i32) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    /// Set both spacing colors (builder pattern).
    pub fn with_spacing_colors(mut self, horizontal: Color, vertical: Color) -> Self {
        self.horizontal_spacing_color = horizontal;
        self.vertical_spacing_color = vertical;
        self
    }

    /// Enable or disable edge spacing per axis (builder pattern).
    pub fn with_edge_spacing(mut self, horizontal: bool, vertical: bool) -> Self {
        self.horizontal_edge_spacing = horizontal;
        self.vertical_edge_spacing = vertical;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }
}

pub(crate) fn validate_column_count(column_count: usize) -> Result<()> {
    if column_count == 0 {
        return Err(GridError::invalid("column_count", "must be at least 1"));
    }
    if i32::try_from(column_count).is_err() {
        return Err(GridError::invalid("column_count", "too large"));
    }
    Ok(())
}

pub(crate) fn validate_non_negative(parameter: &'static str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(GridError::invalid(
            parameter,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_padding(padding: Padding) -> Result<()> {
    if padding.has_negative() {
        return Err(GridError::invalid(
            "padding",
            format!("sides must not be negative (got {padding:?})"),
        ));
    }
    Ok(())
}
