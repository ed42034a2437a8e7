//! Standard keyboard colors
//!
//! The native keyboard has two looks: a light one and a dark one, picked by
//! the color scheme. An unrecognized scheme gets the light look.

use crate::ColorScheme;
use kestrel_core::{rgb8, Color};

/// Complete set of standard colors for one appearance
#[derive(Clone, Debug, PartialEq)]
pub struct StandardColors {
    pub button_background: Color,
    /// Background of system keys like shift and backspace
    pub dark_button_background: Color,
    pub button_foreground: Color,
    pub keyboard_background: Color,
    pub callout_background: Color,
    pub callout_foreground: Color,
    pub callout_border: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub autocomplete_separator: Color,
    pub autocomplete_highlight: Color,
}

impl StandardColors {
    /// Colors of the light native keyboard
    pub fn light() -> Self {
        Self {
            button_background: Color::WHITE,
            dark_button_background: rgb8!(171, 176, 186),
            button_foreground: Color::BLACK,
            keyboard_background: rgb8!(209, 212, 218),
            callout_background: Color::WHITE,
            callout_foreground: Color::BLACK,
            callout_border: Color::BLACK.with_alpha(0.5),
            accent: Color::BLUE,
            accent_foreground: Color::WHITE,
            autocomplete_separator: Color::gray(0.5).with_alpha(0.5),
            autocomplete_highlight: Color::WHITE.with_alpha(0.5),
        }
    }

    /// Colors of the dark native keyboard
    pub fn dark() -> Self {
        Self {
            button_background: rgb8!(107, 107, 107),
            dark_button_background: rgb8!(71, 71, 71),
            button_foreground: Color::WHITE,
            keyboard_background: rgb8!(43, 43, 43),
            callout_background: rgb8!(107, 107, 107),
            callout_foreground: Color::WHITE,
            callout_border: Color::BLACK.with_alpha(0.5),
            accent: Color::BLUE,
            accent_foreground: Color::WHITE,
            autocomplete_separator: Color::gray(0.5).with_alpha(0.5),
            autocomplete_highlight: Color::gray(0.42).with_alpha(0.5),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        if scheme.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for StandardColors {
    fn default() -> Self {
        Self::light()
    }
}
