//! Straight line segments.

use std::fmt;

use crate::{
    color::Color,
    draw::{Drawable, Translate, display_as_svg},
    format::Number,
    geometry::Point,
};

/// A stroked line between two points.
///
/// Line segments carry only a color and a width; they have no fill or
/// opacity.
///
/// # Examples
///
/// ```
/// use svgfmt_core::draw::LineSegment;
///
/// let line = LineSegment::new(0.0, 0.0, 10.0, 10.0);
/// assert_eq!(
///     line.to_string(),
///     r#"<path d="M 0 0 L 10 10" style="stroke: rgb(0, 0, 0); stroke-width: 1"/>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
    width: f32,
    color: Color,
}

impl LineSegment {
    /// Creates a black, 1px wide line from `(x1, y1)` to `(x2, y2)`.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            width: 1.0,
            color: Color::BLACK,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the line color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the line width
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

impl Translate for LineSegment {
    fn offset(mut self, dx: f32, dy: f32) -> Self {
        let delta = Point::new(dx, dy);
        self.start = self.start.add_point(delta);
        self.end = self.end.add_point(delta);
        self
    }
}

impl Drawable for LineSegment {
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            r#"<path d="M {} {} L {} {}" style="stroke: {}; stroke-width: {}"/>"#,
            Number(self.start.x()),
            Number(self.start.y()),
            Number(self.end.x()),
            Number(self.end.y()),
            self.color,
            Number(self.width)
        )
    }
}

display_as_svg!(LineSegment);

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_line_defaults() {
        let line = LineSegment::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(line.width(), 1.0);
        assert_eq!(line.color(), Color::BLACK);
        assert_eq!(line.start(), Point::new(1.0, 2.0));
        assert_eq!(line.end(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_line_styled_output() {
        let line = LineSegment::new(0.0, 5.0, 20.0, 5.0)
            .with_color(Color::RED.with_alpha(0.5))
            .with_width(2.5);

        assert_eq!(
            line.to_string(),
            r#"<path d="M 0 5 L 20 5" style="stroke: rgba(255, 0, 0, 0.5); stroke-width: 2.5"/>"#
        );
    }

    #[test]
    fn test_line_offset_moves_both_ends() {
        let line = LineSegment::new(0.0, 0.0, 10.0, 20.0).offset(1.5, -2.0);
        assert_approx_eq!(f32, line.start().x(), 1.5);
        assert_approx_eq!(f32, line.start().y(), -2.0);
        assert_approx_eq!(f32, line.end().x(), 11.5);
        assert_approx_eq!(f32, line.end().y(), 18.0);
    }

    #[test]
    fn test_zero_width_line_still_names_width() {
        let line = LineSegment::new(0.0, 0.0, 1.0, 1.0).with_width(0.0);
        assert!(line.to_string().contains("stroke-width: 0"));
    }
}
