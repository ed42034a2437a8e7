//! Shadow tokens for keyboard buttons and callouts

use kestrel_core::Color;
use serde::Serialize;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Button,
    Callout,
    None,
}

/// A drop shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// True when the shadow would not be drawn
    pub fn is_none(&self) -> bool {
        self.color.is_clear() || (self.blur == 0.0 && self.offset_x == 0.0 && self.offset_y == 0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub button: Shadow,
    pub callout: Shadow,
    pub none: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Button => &self.button,
            ShadowToken::Callout => &self.callout,
            ShadowToken::None => &self.none,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        let base_color = Color::BLACK;
        Self {
            button: Shadow::new(0.0, 1.0, 0.0, 0.0, base_color.with_alpha(0.3)),
            callout: Shadow::new(0.0, 0.0, 5.0, 0.0, base_color.with_alpha(0.1)),
            none: Shadow::none(),
        }
    }
}
