//! Filled shapes: rectangles, circles and polygons.
//!
//! Every shape here owns a [`Style`](crate::draw::Style) by value and writes
//! it as the element's `style` attribute. Builder methods consume the shape
//! and return it, so calls chain:
//!
//! ```
//! use svgfmt_core::color::Color;
//! use svgfmt_core::draw::{Circle, Styled, Translate};
//!
//! let circle = Circle::new(0.0, 0.0, 10.0)
//!     .with_fill(Color::BLUE)
//!     .with_opacity(0.5)
//!     .offset(5.0, 5.0);
//! assert_eq!(
//!     circle.to_string(),
//!     r#"<circle cx="5" cy="5" r="10" style="stroke: none; fill: rgb(0, 0, 255); fill-opacity: 0.5"/>"#
//! );
//! ```

mod circle;
mod polygon;
mod rectangle;

pub use circle::Circle;
pub use polygon::{PathData, Polygon};
pub use rectangle::Rectangle;
