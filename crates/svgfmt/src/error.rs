//! Error types for svgfmt operations.

use std::fmt;

use thiserror::Error;

/// The main error type for svgfmt operations.
#[derive(Debug, Error)]
pub enum SvgFmtError {
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Color error: {0}")]
    Color(String),

    #[error("Format error: {0}")]
    Format(#[from] fmt::Error),
}
