//! svgfmt Core Types and Definitions
//!
//! This crate provides the value types and serializers behind svgfmt. It
//! includes:
//!
//! - **Format**: The single numeric formatting policy ([`format::Number`])
//! - **Colors**: RGBA colors with CSS color parsing ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Strokes, styles and shapes that serialize to SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod format;
pub mod geometry;
