//! The outer `<svg>` element that bounds a drawing.
//!
//! ```
//! use svgfmt_core::draw::envelope;
//!
//! assert_eq!(
//!     envelope::begin(200.0, 100.0),
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">"#
//! );
//! assert_eq!(envelope::end(), "</svg>");
//! ```

use crate::format::Number;

/// The SVG namespace declared on the opening tag.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Returns the opening `<svg>` tag with a `0 0 width height` view box.
pub fn begin(width: f32, height: f32) -> String {
    format!(
        r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="0 0 {} {}">"#,
        Number(width),
        Number(height)
    )
}

/// Returns the closing `</svg>` tag.
pub fn end() -> &'static str {
    "</svg>"
}
