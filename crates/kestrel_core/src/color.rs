//! Color types and utilities

use serde::{Deserialize, Serialize};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Build an opaque [`Color`] from 0-255 integer channels in const context.
///
/// ```rust
/// use kestrel_core::{rgb8, Color};
///
/// const OCEAN: Color = rgb8!(1, 70, 112);
/// assert_eq!(OCEAN.to_rgba8(), [1, 70, 112, 255]);
/// ```
#[macro_export]
macro_rules! rgb8 {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::rgb(
            $r as f32 / 255.0,
            $g as f32 / 255.0,
            $b as f32 / 255.0,
        )
    };
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 122.0 / 255.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Nearly transparent black that still receives touches on hosts which
    /// skip hit-testing for fully clear views.
    pub const CLEAR_INTERACTABLE: Color = Color::rgba(0.0, 0.0, 0.0, 0.001);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a grayscale color
    pub fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Multiply the current alpha by `factor`
    pub fn with_opacity(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether the color is visually clear (including interactable clear)
    pub fn is_clear(&self) -> bool {
        self.a < 0.01
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }

    /// Format as `#rrggbb`, or `rgba(r,g,b,a)` when translucent
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a < 1.0 {
            format!("rgba({},{},{},{:.3})", r, g, b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_opacity_multiplies_alpha() {
        let color = Color::WHITE.with_alpha(0.8).with_opacity(0.5);
        assert!((color.a - 0.4).abs() < f32::EPSILON);
        assert_eq!(Color::TRANSPARENT.with_opacity(0.95), Color::TRANSPARENT);
    }

    #[test]
    fn test_clear_detection() {
        assert!(Color::TRANSPARENT.is_clear());
        assert!(Color::CLEAR_INTERACTABLE.is_clear());
        assert!(!Color::BLUE.is_clear());
    }

    #[test]
    fn test_rgb8_macro_and_css() {
        let color = rgb8!(1, 70, 112);
        assert_eq!(color.to_css(), "#014670");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_css(), "rgba(0,0,0,0.500)");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":1.0,"b":1.0,"a":1.0}"#);
    }
}
