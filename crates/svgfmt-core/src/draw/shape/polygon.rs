use std::fmt;

use log::trace;

use crate::{
    draw::{Drawable, Style, Styled, Translate, display_as_svg},
    format::Number,
    geometry::Point,
};

/// Estimated bytes written per point, enough for two numbers with two
/// decimals and their separators. Longer output grows the buffer.
const BYTES_PER_POINT: usize = 24;

/// A polygon or polyline drawn as a single SVG `<path>`.
///
/// Points are joined in order. A closed polygon (the default) ends with a
/// `Z` command that draws the final edge back to the first point.
///
/// # Examples
///
/// ```
/// use svgfmt_core::draw::Polygon;
///
/// let square = Polygon::new([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
/// assert_eq!(square.path_data().to_string(), "M 0 0 10 0 10 10 0 10 Z");
///
/// let zigzag = Polygon::new([(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]).open();
/// assert_eq!(zigzag.path_data().to_string(), "M 0 0 5 5 10 0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    closed: bool,
    style: Style,
}

impl Polygon {
    /// Creates a closed polygon through the given points with the default
    /// [`Style`].
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            closed: true,
            style: Style::default(),
        }
    }

    /// Creates a closed three-point polygon.
    ///
    /// Takes the three x-coordinates followed by the three y-coordinates, so
    /// the corners are `(xs[0], ys[0])`, `(xs[1], ys[1])` and `(xs[2], ys[2])`.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgfmt_core::draw::Polygon;
    ///
    /// let triangle = Polygon::triangle([0.0, 10.0, 10.0], [0.0, 0.0, 10.0]);
    /// let same = Polygon::new([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    /// assert_eq!(triangle.to_string(), same.to_string());
    /// ```
    pub fn triangle(xs: [f32; 3], ys: [f32; 3]) -> Self {
        Self::new(xs.into_iter().zip(ys))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Leaves the outline open: no edge from the last point back to the first.
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Closes the outline again after [`Polygon::open`].
    pub fn close(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Returns the `d` attribute value for this polygon.
    ///
    /// The returned value borrows the points and writes them straight into
    /// whatever it is formatted into.
    pub fn path_data(&self) -> PathData<'_> {
        PathData {
            points: &self.points,
            closed: self.closed,
        }
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new(Vec::<Point>::new())
    }
}

impl Styled for Polygon {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}

impl Translate for Polygon {
    fn offset(mut self, dx: f32, dy: f32) -> Self {
        let delta = Point::new(dx, dy);
        for point in &mut self.points {
            *point = point.add_point(delta);
        }
        self
    }
}

impl Drawable for Polygon {
    fn write_svg(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        trace!(points = self.points.len(), closed = self.closed; "Writing polygon path");
        write!(
            out,
            r#"<path d="{}" style="{}"/>"#,
            self.path_data(),
            self.style
        )
    }

    fn size_hint(&self) -> usize {
        self.points.len() * BYTES_PER_POINT + 128
    }
}

display_as_svg!(Polygon);

/// Path data for a [`Polygon`]: `M x0 y0 x1 y1 ... xn yn`, followed by ` Z`
/// when closed.
///
/// Formats as an empty string when there are no points, whether or not the
/// polygon is closed.
#[derive(Debug, Clone, Copy)]
pub struct PathData<'a> {
    points: &'a [Point],
    closed: bool,
}

impl fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.points.split_first() else {
            return Ok(());
        };

        write!(f, "M {} {}", Number(first.x()), Number(first.y()))?;
        for point in rest {
            write!(f, " {} {}", Number(point.x()), Number(point.y()))?;
        }

        if self.closed {
            f.write_str(" Z")?;
        }

        Ok(())
    }
}
