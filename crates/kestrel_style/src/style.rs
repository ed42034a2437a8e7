//! Style values
//!
//! Everything the resolver hands to the rendering layer. Values are built
//! fresh for every request and never cached.

use kestrel_core::{Color, Size};
use kestrel_theme::{Shadow, ShadowTokens, StandardColors};
use serde::Serialize;

/// System font weights
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

/// A system font at a size, with an optional weight
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct KeyboardFont {
    pub size: f32,
    pub weight: Option<FontWeight>,
}

impl KeyboardFont {
    pub fn system(size: f32) -> Self {
        Self { size, weight: None }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Key outline
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ButtonBorder {
    pub color: Color,
    pub width: f32,
}

impl ButtonBorder {
    pub fn standard() -> Self {
        Self {
            color: Color::BLACK.with_alpha(0.1),
            width: 0.5,
        }
    }

    pub fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            width: 0.0,
        }
    }
}

/// Resolved look of a single key
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub foreground_color: Color,
    pub font: KeyboardFont,
    pub corner_radius: f32,
    pub border: ButtonBorder,
    pub shadow: Shadow,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            foreground_color: Color::BLACK,
            font: KeyboardFont::system(23.0),
            corner_radius: 5.0,
            border: ButtonBorder::standard(),
            shadow: ShadowTokens::default().button,
        }
    }
}

impl ButtonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the foreground (text and image) color
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground_color = color;
        self
    }

    pub fn font(mut self, font: KeyboardFont) -> Self {
        self.font = font;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn border(mut self, border: ButtonBorder) -> Self {
        self.border = border;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn no_shadow(mut self) -> Self {
        self.shadow = Shadow::none();
        self
    }
}

/// Keyboard background
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Whatever the host draws behind a native keyboard
    Standard,
    Color(Color),
}

/// Popup shown above a key
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalloutStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub button_corner_radius: f32,
    pub corner_radius: f32,
    pub curve_size: Size,
    pub shadow: Shadow,
    pub text_color: Color,
}

impl CalloutStyle {
    pub fn standard(colors: &StandardColors) -> Self {
        Self {
            background_color: colors.callout_background,
            border_color: colors.callout_border,
            button_corner_radius: 5.0,
            corner_radius: 10.0,
            curve_size: Size::new(8.0, 15.0),
            shadow: ShadowTokens::default().callout,
            text_color: colors.callout_foreground,
        }
    }
}

/// Callout listing secondary actions of a long-pressed key
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActionCalloutStyle {
    pub callout: CalloutStyle,
    pub font: KeyboardFont,
    pub max_button_size: Size,
    pub selected_background_color: Color,
    pub selected_foreground_color: Color,
    pub vertical_offset: f32,
    pub vertical_text_padding: f32,
}

impl ActionCalloutStyle {
    pub fn standard(callout: CalloutStyle, colors: &StandardColors, vertical_offset: f32) -> Self {
        Self {
            callout,
            font: KeyboardFont::system(23.0),
            max_button_size: Size::new(50.0, 50.0),
            selected_background_color: colors.accent,
            selected_foreground_color: colors.accent_foreground,
            vertical_offset,
            vertical_text_padding: 6.0,
        }
    }
}

/// Callout echoing the character under the finger
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InputCalloutStyle {
    pub callout: CalloutStyle,
    pub callout_size: Size,
    pub font: KeyboardFont,
}

impl InputCalloutStyle {
    pub fn standard(callout: CalloutStyle) -> Self {
        Self {
            callout,
            callout_size: Size::new(0.0, 55.0),
            font: KeyboardFont::system(35.0).weight(FontWeight::Light),
        }
    }
}

/// Suggestion bar above the keys
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AutocompleteToolbarStyle {
    pub height: f32,
    pub item_font: KeyboardFont,
    pub item_text_color: Color,
    pub highlight_color: Color,
    pub highlight_corner_radius: f32,
    pub separator_color: Color,
    pub separator_width: f32,
}

impl AutocompleteToolbarStyle {
    pub fn standard(colors: &StandardColors) -> Self {
        Self {
            height: 50.0,
            item_font: KeyboardFont::system(16.0),
            item_text_color: colors.button_foreground,
            highlight_color: colors.autocomplete_highlight,
            highlight_corner_radius: 4.0,
            separator_color: colors.autocomplete_separator,
            separator_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let style = ButtonStyle::new()
            .background(Color::BLUE)
            .corner_radius(7.0)
            .border(ButtonBorder::none())
            .no_shadow();
        assert_eq!(style.background_color, Color::BLUE);
        assert_eq!(style.corner_radius, 7.0);
        assert_eq!(style.border.width, 0.0);
        assert!(style.shadow.is_none());
    }

    #[test]
    fn test_font_weight() {
        let font = KeyboardFont::system(16.0);
        assert_eq!(font.weight, None);
        assert_eq!(font.weight(FontWeight::Regular).weight, Some(FontWeight::Regular));
    }
}
