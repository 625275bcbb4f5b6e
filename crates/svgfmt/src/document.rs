//! Document assembly: shapes wrapped in the `<svg>` envelope.

use std::fmt::{self, Write};

use log::{debug, info};

use svgfmt_core::{
    color::Color,
    draw::{Drawable, Rectangle, Styled, envelope},
};

use crate::{SvgFmtError, config::DocumentConfig};

/// An ordered collection of shapes rendered inside one `<svg>` element.
///
/// Rendering writes the opening tag, then each shape on its own indented
/// line in insertion order, then the closing tag. Every line ends with a
/// newline.
///
/// # Examples
///
/// ```
/// use svgfmt::{Document, draw::LineSegment};
///
/// let mut document = Document::new(20.0, 20.0);
/// document.add(LineSegment::new(0.0, 0.0, 10.0, 10.0));
///
/// assert_eq!(
///     document.render().unwrap(),
///     concat!(
///         r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20">"#, "\n",
///         r#"    <path d="M 0 0 L 10 10" style="stroke: rgb(0, 0, 0); stroke-width: 1"/>"#, "\n",
///         "</svg>\n",
///     )
/// );
/// ```
#[derive(Debug)]
pub struct Document {
    width: f32,
    height: f32,
    indent: usize,
    background: Option<Color>,
    elements: Vec<Box<dyn Drawable>>,
}

impl Document {
    /// Creates an empty document with a `0 0 width height` view box and the
    /// default configuration.
    pub fn new(width: f32, height: f32) -> Self {
        let config = DocumentConfig::default();
        Self {
            width,
            height,
            indent: config.indent(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Creates an empty document using the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SvgFmtError::Color`] if the configured background color is
    /// not a valid color.
    pub fn with_config(
        width: f32,
        height: f32,
        config: &DocumentConfig,
    ) -> Result<Self, SvgFmtError> {
        let background = config
            .style()
            .background_color()
            .map_err(SvgFmtError::Color)?;

        Ok(Self {
            indent: config.indent(),
            background,
            ..Self::new(width, height)
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the number of shapes added so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends a shape.
    pub fn add(&mut self, element: impl Drawable + 'static) -> &mut Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Appends a shape (builder style).
    pub fn with(mut self, element: impl Drawable + 'static) -> Self {
        self.add(element);
        self
    }

    /// Renders the whole document to an SVG string.
    ///
    /// Rendering does not modify the document and can be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`SvgFmtError::Format`] if a shape fails to format.
    pub fn render(&self) -> Result<String, SvgFmtError> {
        info!(
            width = self.width,
            height = self.height,
            elements = self.elements.len();
            "Rendering document"
        );

        let background = self
            .background
            .map(|color| Rectangle::new(0.0, 0.0, self.width, self.height).with_fill(color));

        let capacity = self
            .elements
            .iter()
            .map(|element| element.size_hint() + self.indent + 1)
            .sum::<usize>()
            + 256;
        let mut out = String::with_capacity(capacity);

        out.push_str(&envelope::begin(self.width, self.height));
        out.push('\n');

        if let Some(rect) = &background {
            self.write_line(&mut out, rect)?;
        }
        for element in &self.elements {
            self.write_line(&mut out, element.as_ref())?;
        }

        out.push_str(envelope::end());
        out.push('\n');

        debug!(bytes = out.len(), capacity; "Document rendered");
        Ok(out)
    }

    fn write_line(&self, out: &mut String, element: &dyn Drawable) -> fmt::Result {
        write!(out, "{:indent$}", "", indent = self.indent)?;
        element.write_svg(out)?;
        out.push('\n');
        Ok(())
    }
}
