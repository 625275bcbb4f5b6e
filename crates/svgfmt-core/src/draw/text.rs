//! Text labels.
//!
//! A [`Text`] writes an SVG `<text>` element whose `style` carries the font
//! size, the fill color and the alignment directives of its [`TextAlign`].
//! Content is escaped so `&`, `<` and `>` cannot break the surrounding
//! markup.

use std::{fmt, str::FromStr};

use crate::{
    color::Color,
    draw::{Drawable, Translate, display_as_svg},
    format::Number,
    geometry::Point,
};

/// Horizontal alignment of text relative to its anchor point.
///
/// # SVG Mapping
///
/// | Variant  | Directives                                 |
/// |----------|--------------------------------------------|
/// | `Left`   | `text-anchor: start; text-align: left`     |
/// | `Right`  | `text-anchor: end; text-align: right`      |
/// | `Center` | `text-anchor: middle; text-align: center`  |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Returns the SVG style directives for this alignment
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Left => "text-anchor: start; text-align: left",
            Self::Right => "text-anchor: end; text-align: right",
            Self::Center => "text-anchor: middle; text-align: center",
        }
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(format!(
                "invalid text alignment `{s}`, valid values: left, right, center"
            )),
        }
    }
}

/// A single line of text anchored at a point.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `10` |
/// | Color | [`Color::BLACK`] |
/// | Alignment | [`TextAlign::Left`] |
///
/// # Examples
///
/// ```
/// use svgfmt_core::draw::{Text, TextAlign};
///
/// let label = Text::new(0.0, 0.0, "clock").with_align(TextAlign::Center);
/// assert_eq!(
///     label.to_string(),
///     r#"<text x="0" y="0" style="font-size: 10px; fill: rgb(0, 0, 0); text-anchor: middle; text-align: center">clock</text>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    content: String,
    size: f32,
    color: Color,
    align: TextAlign,
}

impl Text {
    pub fn new(x: f32, y: f32, content: impl Into<String>) -> Self {
        Self {
            position: Point::new(x, y),
            content: content.into(),
            size: 10.0,
            color: Color::BLACK,
            align: TextAlign::default(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the font size in pixels
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the horizontal alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

impl Translate for Text {
    fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.position = self.position.add_point(Point::new(dx, dy));
        self
    }
}

impl Drawable for Text {
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            r#"<text x="{}" y="{}" style="font-size: {}px; fill: {}; {}">{}</text>"#,
            Number(self.position.x()),
            Number(self.position.y()),
            Number(self.size),
            self.color,
            self.align.to_svg_value(),
            Escaped(&self.content)
        )
    }

    fn size_hint(&self) -> usize {
        self.content.len() + 128
    }
}

display_as_svg!(Text);

/// Writes text content with markup characters replaced by entities.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(index) = rest.find(['&', '<', '>']) {
            f.write_str(&rest[..index])?;
            let entity = match rest.as_bytes()[index] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                _ => "&gt;",
            };
            f.write_str(entity)?;
            rest = &rest[index + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_default_output() {
        let text = Text::new(0.0, 0.0, "clock");
        let output = text.to_string();

        assert!(output.contains("text-anchor: start; text-align: left"));
        assert!(output.contains(">clock</text>"));
        assert_eq!(
            output,
            r#"<text x="0" y="0" style="font-size: 10px; fill: rgb(0, 0, 0); text-anchor: start; text-align: left">clock</text>"#
        );
    }

    #[test]
    fn test_text_defaults() {
        let text = Text::new(1.0, 2.0, "a");
        assert_eq!(text.size(), 10.0);
        assert_eq!(text.color(), Color::BLACK);
        assert_eq!(text.align(), TextAlign::Left);
        assert_eq!(text.content(), "a");
    }

    #[test]
    fn test_text_styled_output() {
        let text = Text::new(5.0, 15.0, "total")
            .with_color(Color::BLUE)
            .with_size(12.5)
            .with_align(TextAlign::Right)
            .offset(1.0, 1.0);

        assert_eq!(
            text.to_string(),
            r#"<text x="6" y="16" style="font-size: 12.5px; fill: rgb(0, 0, 255); text-anchor: end; text-align: right">total</text>"#
        );
    }

    #[test]
    fn test_text_align_svg_values() {
        assert_eq!(
            TextAlign::Left.to_svg_value(),
            "text-anchor: start; text-align: left"
        );
        assert_eq!(
            TextAlign::Right.to_svg_value(),
            "text-anchor: end; text-align: right"
        );
        assert_eq!(
            TextAlign::Center.to_svg_value(),
            "text-anchor: middle; text-align: center"
        );
    }

    #[test]
    fn test_text_align_from_str() {
        assert_eq!(TextAlign::from_str("left").unwrap(), TextAlign::Left);
        assert_eq!(TextAlign::from_str("right").unwrap(), TextAlign::Right);
        assert_eq!(TextAlign::from_str("center").unwrap(), TextAlign::Center);

        let result = TextAlign::from_str("justify");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid text alignment `justify`"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let text = Text::new(0.0, 0.0, "a < b && c > d");
        assert!(
            text.to_string()
                .ends_with(">a &lt; b &amp;&amp; c &gt; d</text>")
        );
    }

    #[test]
    fn test_text_unicode_content() {
        let text = Text::new(0.0, 0.0, "héllo → wörld");
        assert!(text.to_string().ends_with(">héllo → wörld</text>"));
    }
}
