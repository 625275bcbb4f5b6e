//! Fill, stroke and opacity grouped into one `style` attribute value.

use std::fmt;

use crate::{color::Color, draw::Stroke, format::Number};

/// Fill opacity used when none is given: fully opaque.
pub const DEFAULT_OPACITY: f32 = 1.0;

/// The fill, stroke and opacity applied to a shape.
///
/// Formats as `<stroke>; fill: <color>; fill-opacity: <opacity>`, always in
/// that order. Opacity is written as given; values outside `0.0..=1.0` are
/// not clamped.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Fill | [`Color::WHITE`] |
/// | Stroke | [`Stroke::NONE`] |
/// | Opacity | [`DEFAULT_OPACITY`] |
///
/// # Examples
///
/// ```
/// use svgfmt_core::draw::Style;
///
/// assert_eq!(
///     Style::default().to_string(),
///     "stroke: none; fill: rgb(255, 255, 255); fill-opacity: 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    fill: Color,
    stroke: Stroke,
    opacity: f32,
}

impl Style {
    /// Creates a style with every property given explicitly.
    pub fn new(fill: Color, stroke: Stroke, opacity: f32) -> Self {
        Self {
            fill,
            stroke,
            opacity,
        }
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the stroke.
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Returns the fill opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the fill color.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Sets the stroke.
    pub fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
    }

    /// Sets the fill opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            stroke: Stroke::NONE,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; fill: {}; fill-opacity: {}",
            self.stroke,
            self.fill,
            Number(self.opacity)
        )
    }
}
