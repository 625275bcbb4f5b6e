//! Configuration types for svgfmt documents.
//!
//! All types implement [`serde::Deserialize`] and can be loaded from a TOML
//! string with [`DocumentConfig::from_toml_str`].
//!
//! # Overview
//!
//! - [`DocumentConfig`] - Top-level document configuration.
//! - [`StyleConfig`] - Document-wide visual options such as background color.
//!
//! # Example
//!
//! ```
//! # use svgfmt::config::DocumentConfig;
//! let config = DocumentConfig::from_toml_str(
//!     r##"
//!     indent = 2
//!
//!     [style]
//!     background_color = "#fafafa"
//!     "##,
//! )
//! .unwrap();
//! assert_eq!(config.indent(), 2);
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use serde::Deserialize;

use svgfmt_core::color::Color;

use crate::SvgFmtError;

const DEFAULT_INDENT: usize = 4;

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Top-level document configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Number of spaces written before each element line.
    #[serde(default = "default_indent")]
    indent: usize,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl DocumentConfig {
    /// Creates a new [`DocumentConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent` - Spaces written before each element line.
    /// * `style` - Document-wide visual options.
    pub fn new(indent: usize, style: StyleConfig) -> Self {
        Self { indent, style }
    }

    /// Parses a configuration from TOML text. Missing fields use their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SvgFmtError::Config`] if the text is not valid TOML or does
    /// not match the configuration layout.
    pub fn from_toml_str(source: &str) -> Result<Self, SvgFmtError> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the number of spaces written before each element line.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            style: StyleConfig::default(),
        }
    }
}

/// Document-wide visual options.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] covering the whole view box, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns a copy of this configuration with the given background color
    /// string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
