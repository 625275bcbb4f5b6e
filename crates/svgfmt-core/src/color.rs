//! Color handling for svgfmt drawings
//!
//! This module provides the [`Color`] type: red, green and blue channels in
//! the `0..=255` range plus an alpha value in `0.0..=1.0`. Colors are plain
//! `Copy` values, so every shape holds its own copy and no two shapes ever
//! share one.
//!
//! CSS color strings are parsed with the `DynamicColor` type from the color
//! crate and converted to sRGB channels.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

use crate::format::Number;

/// An RGBA color with `0..=255` channels and a `0.0..=1.0` alpha.
///
/// Formats as `rgb(R, G, B)` when fully opaque and as `rgba(R, G, B, A)`
/// otherwise.
///
/// # Examples
///
/// ```
/// use svgfmt_core::color::Color;
///
/// assert_eq!(Color::RED.to_string(), "rgb(255, 0, 0)");
/// assert_eq!(Color::rgba(0.0, 0.0, 255.0, 0.5).to_string(), "rgba(0, 0, 255, 0.5)");
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(255.0, 255.0, 255.0);
    pub const RED: Color = Color::rgb(255.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 255.0);

    /// Creates an opaque color from `0..=255` channels.
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Creates a color from `0..=255` channels and a `0.0..=1.0` alpha.
    ///
    /// Values are stored as given; out-of-range channels are not clamped.
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a new `Color` from a CSS color string
    /// such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgfmt_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red, Color::RED);
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let color = DynamicColor::from_str(color_str)
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))?;
        let [red, green, blue, alpha] = color.to_alpha_color::<Srgb>().components;

        Ok(Self {
            red: (red * 255.0).round(),
            green: (green * 255.0).round(),
            blue: (blue * 255.0).round(),
            alpha,
        })
    }

    /// Returns a copy of this color with the given alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgfmt_core::color::Color;
    ///
    /// let tinted = Color::WHITE.with_alpha(0.25);
    /// assert_eq!(tinted.alpha(), 0.25);
    /// assert_eq!(Color::WHITE.alpha(), 1.0);
    /// ```
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub fn red(self) -> f32 {
        self.red
    }

    pub fn green(self) -> f32 {
        self.green
    }

    pub fn blue(self) -> f32 {
        self.blue
    }

    /// Returns the alpha component, where 1.0 is fully opaque.
    pub fn alpha(self) -> f32 {
        self.alpha
    }

    /// Returns true if the alpha term is omitted when formatting.
    pub fn is_opaque(self) -> bool {
        self.alpha == 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = (Number(self.red), Number(self.green), Number(self.blue));
        if self.is_opaque() {
            write!(f, "rgb({red}, {green}, {blue})")
        } else {
            write!(f, "rgba({red}, {green}, {blue}, {})", Number(self.alpha))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert_eq!(red, Ok(Color::RED));

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_new_with_alpha() {
        let color = Color::new("rgba(0, 128, 255, 0.5)").unwrap();
        assert_eq!(color.to_string(), "rgba(0, 128, 255, 0.5)");
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::default().to_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Color::WHITE.to_string(), "rgb(255, 255, 255)");
        assert_eq!(Color::RED.to_string(), "rgb(255, 0, 0)");
        assert_eq!(Color::GREEN.to_string(), "rgb(0, 255, 0)");
        assert_eq!(Color::BLUE.to_string(), "rgb(0, 0, 255)");
    }

    #[test]
    fn test_with_alpha_leaves_constant_untouched() {
        let tinted = Color::RED.with_alpha(0.5);
        assert_eq!(tinted.to_string(), "rgba(255, 0, 0, 0.5)");
        assert!(Color::RED.is_opaque());
    }

    #[test]
    fn test_zero_alpha_is_not_opaque() {
        assert_eq!(
            Color::rgba(1.0, 2.0, 3.0, 0.0).to_string(),
            "rgba(1, 2, 3, 0)"
        );
    }

    #[test]
    fn test_fractional_channels() {
        assert_eq!(
            Color::rgb(12.5, 0.333, 254.999).to_string(),
            "rgb(12.5, 0.33, 255)"
        );
    }
}
