use std::fmt;

use crate::{
    draw::{Drawable, Style, Styled, Translate, display_as_svg},
    format::Number,
};

/// An axis-aligned rectangle with optional rounded corners.
///
/// `x` and `y` are the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    border_radius: f32,
    style: Style,
}

impl Rectangle {
    /// Creates a rectangle with square corners and the default [`Style`].
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            border_radius: 0.0,
            style: Style::default(),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn border_radius(&self) -> f32 {
        self.border_radius
    }

    /// Set the vertical corner radius (`ry`)
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    /// Grows the rectangle by `dw` on the left and right and by `dh` on the
    /// top and bottom, keeping it centered on the same point.
    pub fn inflate(mut self, dw: f32, dh: f32) -> Self {
        self.x -= dw;
        self.y -= dh;
        self.width += 2.0 * dw;
        self.height += 2.0 * dh;
        self
    }
}

impl Styled for Rectangle {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}

impl Translate for Rectangle {
    fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }
}

impl Drawable for Rectangle {
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" ry="{}" style="{}"/>"#,
            Number(self.x),
            Number(self.y),
            Number(self.width),
            Number(self.height),
            Number(self.border_radius),
            self.style
        )
    }
}

display_as_svg!(Rectangle);

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{color::Color, draw::Stroke};

    #[test]
    fn test_rectangle_with_fill() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0).with_fill(Color::rgb(1.0, 1.0, 1.0));
        let output = rect.to_string();

        assert!(output.starts_with("<rect "));
        assert!(output.ends_with("/>"));
        assert!(output.contains(r#"x="0" y="0" width="10" height="10" ry="0""#));
        assert!(output.contains("fill: rgb(1, 1, 1)"));
    }

    #[test]
    fn test_rectangle_full_output() {
        let rect = Rectangle::new(1.5, 2.0, 30.0, 40.0)
            .with_stroke(Stroke::new(Color::RED, 2.0))
            .with_opacity(0.75)
            .with_border_radius(4.0);

        assert_eq!(
            rect.to_string(),
            r#"<rect x="1.5" y="2" width="30" height="40" ry="4" style="stroke: rgb(255, 0, 0); stroke-width: 2; fill: rgb(255, 255, 255); fill-opacity: 0.75"/>"#
        );
    }

    #[test]
    fn test_rectangle_offset() {
        let rect = Rectangle::new(10.0, 20.0, 5.0, 5.0).offset(-2.5, 4.0);
        assert_approx_eq!(f32, rect.x(), 7.5);
        assert_approx_eq!(f32, rect.y(), 24.0);
        assert_approx_eq!(f32, rect.width(), 5.0);
        assert_approx_eq!(f32, rect.height(), 5.0);
    }

    #[test]
    fn test_rectangle_inflate() {
        // The height grows by `dh` independently of the width. Older output
        // added both deltas to the width and left the height unchanged; that
        // was a bug and is intentionally not reproduced.
        let rect = Rectangle::new(0.0, 0.0, 10.0, 20.0).inflate(1.0, 3.0);
        assert_approx_eq!(f32, rect.x(), -1.0);
        assert_approx_eq!(f32, rect.y(), -3.0);
        assert_approx_eq!(f32, rect.width(), 12.0);
        assert_approx_eq!(f32, rect.height(), 26.0);
    }

    #[test]
    fn test_rectangle_negative_inflate_shrinks() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0).inflate(-2.0, -1.0);
        assert_eq!(
            rect.to_string(),
            r#"<rect x="2" y="1" width="6" height="8" ry="0" style="stroke: none; fill: rgb(255, 255, 255); fill-opacity: 1"/>"#
        );
    }

    #[test]
    fn test_rectangle_format_is_repeatable() {
        let rect = Rectangle::new(3.0, 4.0, 5.0, 6.0).with_fill(Color::GREEN);
        assert_eq!(rect.to_string(), rect.to_string());
    }

    #[test]
    fn test_rectangle_styles_are_independent() {
        let base = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let red = base.clone().with_fill(Color::RED);

        assert_eq!(base.style().fill(), Color::WHITE);
        assert_eq!(red.style().fill(), Color::RED);
    }
}
