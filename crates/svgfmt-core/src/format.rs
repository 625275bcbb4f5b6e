//! Numeric formatting policy for every number written to SVG output.
//!
//! All coordinates, sizes, color channels, opacities and widths are rendered
//! through [`Number`], so no element picks its own precision.
//!
//! Values are rounded to [`DECIMAL_PLACES`] fractional digits, then trailing
//! zeros and a dangling decimal point are removed:
//!
//! | Value     | Output  |
//! |-----------|---------|
//! | `10.0`    | `10`    |
//! | `0.5`     | `0.5`   |
//! | `1.256`   | `1.26`  |
//! | `-0.001`  | `0`     |
//!
//! # Examples
//!
//! ```
//! # use svgfmt_core::format::Number;
//! assert_eq!(Number(200.0).to_string(), "200");
//! assert_eq!(Number(0.25).to_string(), "0.25");
//! assert_eq!(Number(1.0 / 3.0).to_string(), "0.33");
//! ```

use std::fmt;

/// Number of fractional digits kept when formatting a number.
pub const DECIMAL_PLACES: usize = 2;

/// Display adapter applying the crate-wide numeric formatting policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f32);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}");
        }

        let fixed = format!("{:.*}", DECIMAL_PLACES, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };

        // Rounding can leave "-0" behind for small negative values.
        if trimmed == "-0" {
            f.write_str("0")
        } else {
            f.write_str(trimmed)
        }
    }
}
