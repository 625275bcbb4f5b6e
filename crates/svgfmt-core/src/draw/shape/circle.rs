use std::fmt;

use crate::{
    draw::{Drawable, Style, Styled, Translate, display_as_svg},
    format::Number,
};

/// A circle given by its center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    x: f32,
    y: f32,
    radius: f32,
    style: Style,
}

impl Circle {
    /// Creates a circle with the default [`Style`].
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            style: Style::default(),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Moves the center by `-dr` on both axes and grows the radius by `2 * dr`.
    ///
    /// The center shift mirrors [`Rectangle::inflate`](crate::draw::Rectangle::inflate),
    /// which treats `x`/`y` as the top-left corner of the shape's extent.
    pub fn inflate(mut self, dr: f32) -> Self {
        self.x -= dr;
        self.y -= dr;
        self.radius += 2.0 * dr;
        self
    }
}

impl Styled for Circle {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}

impl Translate for Circle {
    fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }
}

impl Drawable for Circle {
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" style="{}"/>"#,
            Number(self.x),
            Number(self.y),
            Number(self.radius),
            self.style
        )
    }
}

display_as_svg!(Circle);
