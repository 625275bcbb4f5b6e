//! Stroke definitions.
//!
//! A [`Stroke`] is a color and width pair describing an outline. A width of
//! exactly zero means no outline is drawn.
//!
//! # SVG Mapping
//!
//! | Width  | Output                                   |
//! |--------|------------------------------------------|
//! | `0`    | `stroke: none`                           |
//! | other  | `stroke: <color>; stroke-width: <width>` |

use std::fmt;

use crate::{color::Color, format::Number};

/// An outline color and width.
///
/// # Examples
///
/// ```
/// use svgfmt_core::color::Color;
/// use svgfmt_core::draw::Stroke;
///
/// assert_eq!(Stroke::default().to_string(), "stroke: none");
///
/// let stroke = Stroke::new(Color::RED, 1.5);
/// assert_eq!(stroke.to_string(), "stroke: rgb(255, 0, 0); stroke-width: 1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    color: Color,
    width: f32,
}

impl Stroke {
    /// The default stroke: black, zero width, not drawn.
    pub const NONE: Stroke = Stroke {
        color: Color::BLACK,
        width: 0.0,
    };

    /// Creates a new stroke with the given color and width.
    ///
    /// A width of `0.0` produces a stroke that is not drawn.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns a copy of this stroke with the given color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns a copy of this stroke with the given width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Returns true if this stroke is not drawn.
    ///
    /// Zero width is the sentinel for "no stroke", so this is an exact
    /// comparison rather than a tolerance check.
    pub fn is_none(&self) -> bool {
        self.width == 0.0
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("stroke: none")
        } else {
            write!(
                f,
                "stroke: {}; stroke-width: {}",
                self.color,
                Number(self.width)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = Stroke::default();
        assert_eq!(stroke.width(), 0.0);
        assert_eq!(stroke.color(), Color::BLACK);
        assert!(stroke.is_none());
        assert_eq!(stroke.to_string(), "stroke: none");
    }

    #[test]
    fn test_stroke_with_width() {
        let stroke = Stroke::new(Color::BLUE, 2.0);
        assert_eq!(
            stroke.to_string(),
            "stroke: rgb(0, 0, 255); stroke-width: 2"
        );
    }

    #[test]
    fn test_stroke_translucent_color() {
        let stroke = Stroke::new(Color::GREEN.with_alpha(0.5), 1.0);
        assert_eq!(
            stroke.to_string(),
            "stroke: rgba(0, 255, 0, 0.5); stroke-width: 1"
        );
    }

    #[test]
    fn test_stroke_builders() {
        let stroke = Stroke::NONE.with_color(Color::RED).with_width(3.0);
        assert_eq!(stroke.color(), Color::RED);
        assert_eq!(stroke.width(), 3.0);
        assert!(!stroke.is_none());
    }

    #[test]
    fn test_tiny_width_is_still_drawn() {
        let stroke = Stroke::new(Color::BLACK, 0.001);
        assert!(!stroke.is_none());
        assert_eq!(stroke.to_string(), "stroke: rgb(0, 0, 0); stroke-width: 0");
    }

    #[test]
    fn test_negative_zero_width_is_none() {
        assert!(Stroke::new(Color::RED, -0.0).is_none());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn color_strategy() -> impl Strategy<Value = Color> {
        (0.0f32..=255.0, 0.0f32..=255.0, 0.0f32..=255.0, 0.0f32..=1.0)
            .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
    }

    /// A zero-width stroke formats the same whatever its color.
    fn check_zero_width_ignores_color(color: Color) -> Result<(), TestCaseError> {
        prop_assert_eq!(
            Stroke::new(color, 0.0).to_string(),
            Stroke::default().to_string()
        );
        Ok(())
    }

    /// A drawn stroke always names both its color and its width.
    fn check_drawn_stroke_has_color_and_width(
        color: Color,
        width: f32,
    ) -> Result<(), TestCaseError> {
        let output = Stroke::new(color, width).to_string();
        let expected_prefix = format!("stroke: {color}; ");
        prop_assert!(output.starts_with(&expected_prefix), "{}", output);
        prop_assert!(output.contains("stroke-width: "), "{}", output);
        Ok(())
    }

    proptest! {
        #[test]
        fn zero_width_ignores_color(color in color_strategy()) {
            check_zero_width_ignores_color(color)?;
        }

        #[test]
        fn drawn_stroke_has_color_and_width(color in color_strategy(), width in 0.01f32..100.0) {
            check_drawn_stroke_has_color_and_width(color, width)?;
        }
    }
}
