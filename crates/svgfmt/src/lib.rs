//! svgfmt - Serialize vector drawing primitives to SVG.
//!
//! Shapes from [`draw`] each serialize to one SVG element. A [`Document`]
//! collects them and wraps them in the outer `<svg>` envelope.
//!
//! # Examples
//!
//! ```
//! use svgfmt::{Document, color::Color, draw::{Circle, Polygon, Rectangle, Styled, Text}};
//!
//! let svg = Document::new(200.0, 200.0)
//!     .with(Rectangle::new(0.0, 0.0, 10.0, 10.0).with_fill(Color::rgb(1.0, 1.0, 1.0)))
//!     .with(Text::new(0.0, 0.0, "clock"))
//!     .with(Polygon::triangle([0.0, 10.0, 10.0], [0.0, 0.0, 10.0]).open())
//!     .with(Circle::new(0.0, 0.0, 10.0))
//!     .render()
//!     .expect("Failed to render");
//!
//! assert!(svg.starts_with("<svg "));
//! assert!(svg.ends_with("</svg>\n"));
//! ```

pub mod config;

mod document;
mod error;

pub use svgfmt_core::{color, draw, format, geometry};

pub use document::Document;
pub use error::SvgFmtError;
