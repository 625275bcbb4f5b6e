//! Drawable Components for SVG Output
//!
//! This module provides the style types and shapes that serialize to SVG
//! markup. All shapes implement the [`Drawable`] trait, which writes the
//! shape as a single self-closing SVG element, and [`std::fmt::Display`],
//! which delegates to it.
//!
//! # Quick Start
//!
//! ```
//! use svgfmt_core::color::Color;
//! use svgfmt_core::draw::{Polygon, Rectangle, Stroke, Styled};
//!
//! let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0)
//!     .with_fill(Color::RED)
//!     .with_stroke(Stroke::new(Color::BLACK, 2.0));
//! assert!(rect.to_string().starts_with("<rect "));
//!
//! let triangle = Polygon::triangle([0.0, 10.0, 10.0], [0.0, 0.0, 10.0]).open();
//! assert_eq!(triangle.path_data().to_string(), "M 0 0 10 0 10 10");
//! ```
pub mod envelope;

mod line;
mod shape;
mod stroke;
mod style;
mod text;

pub use line::LineSegment;
pub use shape::{Circle, PathData, Polygon, Rectangle};
pub use stroke::Stroke;
pub use style::{DEFAULT_OPACITY, Style};
pub use text::{Text, TextAlign};

use std::fmt;

use crate::color::Color;

/// Trait for shapes that serialize to a single SVG element.
///
/// Serialization only reads the shape, so it can be repeated any number of
/// times with identical output.
pub trait Drawable: fmt::Debug {
    /// Writes this shape as one SVG element, without indentation or a
    /// trailing newline.
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Estimated number of bytes [`Drawable::write_svg`] produces, used to
    /// size output buffers up front.
    fn size_hint(&self) -> usize {
        128
    }
}

/// Shapes that can be moved by a fixed distance.
///
/// Offsets are additive: `offset(a, b).offset(c, d)` ends where
/// `offset(a + c, b + d)` does.
pub trait Translate: Sized {
    /// Moves every position of the shape by `dx` and `dy`.
    fn offset(self, dx: f32, dy: f32) -> Self;
}

/// Shapes that carry a full [`Style`]: fill, stroke and opacity.
///
/// # Examples
///
/// ```
/// use svgfmt_core::color::Color;
/// use svgfmt_core::draw::{Circle, Polygon, Rectangle, Styled};
///
/// fn highlight<S: Styled>(shape: S) -> S {
///     shape.with_fill(Color::RED).with_opacity(0.5)
/// }
///
/// assert_eq!(highlight(Circle::new(0.0, 0.0, 1.0)).style().fill(), Color::RED);
/// assert_eq!(highlight(Polygon::default()).style().opacity(), 0.5);
/// assert_eq!(highlight(Rectangle::new(0.0, 0.0, 1.0, 1.0)).style().fill(), Color::RED);
/// ```
pub trait Styled: Sized {
    fn style(&self) -> &Style;

    fn style_mut(&mut self) -> &mut Style;

    /// Set the fill color
    fn with_fill(mut self, fill: Color) -> Self {
        self.style_mut().set_fill(fill);
        self
    }

    /// Set the outline
    fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.style_mut().set_stroke(stroke);
        self
    }

    /// Set the fill opacity
    fn with_opacity(mut self, opacity: f32) -> Self {
        self.style_mut().set_opacity(opacity);
        self
    }
}

/// Implements [`fmt::Display`] for drawables by delegating to
/// [`Drawable::write_svg`].
macro_rules! display_as_svg {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    $crate::draw::Drawable::write_svg(self, f)
                }
            }
        )+
    };
}

pub(crate) use display_as_svg;
