//! Opacity tokens for keyboard buttons

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    /// Any button while the space bar is being dragged to move the cursor
    SpaceDrag,
    /// Unpressed button on a light, unthemed keyboard
    IdleLight,
    Opaque,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub space_drag: f32,
    pub idle_light: f32,
    pub opaque: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::SpaceDrag => self.space_drag,
            OpacityToken::IdleLight => self.idle_light,
            OpacityToken::Opaque => self.opaque,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            space_drag: 0.5,
            idle_light: 0.95,
            opaque: 1.0,
        }
    }
}
