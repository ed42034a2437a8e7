//! Style rules
//!
//! [`StyleRules`] has one method per style facet. [`StandardStyleRules`]
//! mimics the native keyboard; [`LayeredRules`] wraps any rules value and
//! lets individual facets be adjusted from the wrapped result:
//!
//! ```rust
//! use kestrel_context::KeyboardContext;
//! use kestrel_core::Color;
//! use kestrel_style::{KeyboardAction, LayeredRules, StandardStyleRules, StyleInput, StyleRules};
//!
//! let rules = LayeredRules::new(StandardStyleRules::default())
//!     .with_background_color(|input, base| {
//!         if input.action.is_input_action() { Color::rgb(1.0, 0.0, 0.0) } else { base }
//!     });
//!
//! let context = KeyboardContext::default();
//! let action = KeyboardAction::Character("a".into());
//! let style = rules.button_style(&StyleInput::new(&context, &action, false));
//! assert_eq!(style.background_color, Color::rgb(1.0, 0.0, 0.0).with_opacity(0.95));
//! ```

use crate::action::{is_lowercased_with_uppercase_variant, KeyboardAction};
use crate::layout::LayoutConfiguration;
use crate::style::{ButtonBorder, ButtonStyle, FontWeight, KeyboardFont};
use crate::table::{resolve_color, Facet};
use kestrel_context::{DeviceType, KeyboardContext, KeyboardType};
use kestrel_core::Color;
use kestrel_theme::{OpacityToken, OpacityTokens, Shadow, ShadowToken, ShadowTokens};

/// What a style is being resolved for
#[derive(Clone, Copy, Debug)]
pub struct StyleInput<'a> {
    pub context: &'a KeyboardContext,
    pub action: &'a KeyboardAction,
    pub is_pressed: bool,
}

impl<'a> StyleInput<'a> {
    pub fn new(context: &'a KeyboardContext, action: &'a KeyboardAction, is_pressed: bool) -> Self {
        Self {
            context,
            action,
            is_pressed,
        }
    }
}

/// One method per facet of a [`ButtonStyle`]
pub trait StyleRules {
    /// Background before opacity is applied
    fn background_color(&self, input: &StyleInput<'_>) -> Color;

    fn background_opacity(&self, input: &StyleInput<'_>) -> f32;

    fn foreground_color(&self, input: &StyleInput<'_>) -> Color;

    fn border(&self, input: &StyleInput<'_>) -> ButtonBorder;

    fn corner_radius(&self, input: &StyleInput<'_>) -> f32;

    fn shadow(&self, input: &StyleInput<'_>) -> Shadow;

    fn font_size(&self, input: &StyleInput<'_>) -> f32;

    fn font_weight(&self, input: &StyleInput<'_>) -> Option<FontWeight>;

    fn font(&self, input: &StyleInput<'_>) -> KeyboardFont {
        let font = KeyboardFont::system(self.font_size(input));
        match self.font_weight(input) {
            Some(weight) => font.weight(weight),
            None => font,
        }
    }

    fn button_style(&self, input: &StyleInput<'_>) -> ButtonStyle {
        let opacity = self.background_opacity(input);
        ButtonStyle::new()
            .background(self.background_color(input).with_opacity(opacity))
            .foreground(self.foreground_color(input))
            .font(self.font(input))
            .corner_radius(self.corner_radius(input))
            .border(self.border(input))
            .shadow(self.shadow(input))
    }
}

impl<R: StyleRules + ?Sized> StyleRules for Box<R> {
    fn background_color(&self, input: &StyleInput<'_>) -> Color {
        (**self).background_color(input)
    }

    fn background_opacity(&self, input: &StyleInput<'_>) -> f32 {
        (**self).background_opacity(input)
    }

    fn foreground_color(&self, input: &StyleInput<'_>) -> Color {
        (**self).foreground_color(input)
    }

    fn border(&self, input: &StyleInput<'_>) -> ButtonBorder {
        (**self).border(input)
    }

    fn corner_radius(&self, input: &StyleInput<'_>) -> f32 {
        (**self).corner_radius(input)
    }

    fn shadow(&self, input: &StyleInput<'_>) -> Shadow {
        (**self).shadow(input)
    }

    fn font_size(&self, input: &StyleInput<'_>) -> f32 {
        (**self).font_size(input)
    }

    fn font_weight(&self, input: &StyleInput<'_>) -> Option<FontWeight> {
        (**self).font_weight(input)
    }
}

/// Rules that reproduce the native keyboard look, with theme overrides
#[derive(Clone, Debug, Default)]
pub struct StandardStyleRules {
    pub opacity: OpacityTokens,
    pub shadows: ShadowTokens,
}

impl StandardStyleRules {
    fn pad_landscape_font_size(&self, input: &StyleInput<'_>) -> Option<f32> {
        let context = input.context;
        if context.device_type != DeviceType::Pad || !context.interface_orientation.is_landscape() {
            return None;
        }
        let action = input.action;
        if action.is_alphabetic_keyboard_type_action()
            || action.is_keyboard_type_action(&KeyboardType::Numeric)
        {
            Some(22.0)
        } else if action.is_keyboard_type_action(&KeyboardType::Symbolic) {
            Some(20.0)
        } else {
            None
        }
    }

    fn action_font_size(&self, action: &KeyboardAction) -> Option<f32> {
        match action {
            KeyboardAction::KeyboardType(keyboard_type) => Some(match keyboard_type {
                KeyboardType::Alphabetic(_) => 15.0,
                KeyboardType::Numeric => 16.0,
                KeyboardType::Symbolic => 14.0,
                _ => 14.0,
            }),
            KeyboardAction::Space => Some(16.0),
            _ => None,
        }
    }

    /// Georgian letters are drawn at regular weight on the alphabetic keyboard
    fn is_georgian_alphabetic(context: &KeyboardContext) -> bool {
        context.keyboard_type.is_alphabetic() && context.locale.matches_language("ka")
    }
}

impl StyleRules for StandardStyleRules {
    fn background_color(&self, input: &StyleInput<'_>) -> Color {
        resolve_color(Facet::Background, input.context, input.action, input.is_pressed)
    }

    fn background_opacity(&self, input: &StyleInput<'_>) -> f32 {
        let context = input.context;
        if context.is_space_drag_gesture_active {
            self.opacity.get(OpacityToken::SpaceDrag)
        } else if context.has_dark_color_scheme() || input.is_pressed {
            self.opacity.get(OpacityToken::Opaque)
        } else {
            self.opacity.get(OpacityToken::IdleLight)
        }
    }

    fn foreground_color(&self, input: &StyleInput<'_>) -> Color {
        resolve_color(Facet::Foreground, input.context, input.action, input.is_pressed)
    }

    fn border(&self, input: &StyleInput<'_>) -> ButtonBorder {
        match input.action {
            KeyboardAction::Emoji(_) | KeyboardAction::None => ButtonBorder::none(),
            _ => ButtonBorder::standard(),
        }
    }

    fn corner_radius(&self, input: &StyleInput<'_>) -> f32 {
        LayoutConfiguration::for_context(input.context).button_corner_radius
    }

    fn shadow(&self, input: &StyleInput<'_>) -> Shadow {
        if input.context.is_space_drag_gesture_active {
            return *self.shadows.get(ShadowToken::None);
        }
        match input.action {
            KeyboardAction::CharacterMargin(_) | KeyboardAction::Emoji(_) | KeyboardAction::None => {
                *self.shadows.get(ShadowToken::None)
            }
            _ => *self.shadows.get(ShadowToken::Button),
        }
    }

    fn font_size(&self, input: &StyleInput<'_>) -> f32 {
        if let Some(size) = self.pad_landscape_font_size(input) {
            return size;
        }
        let action = input.action;
        if action.button_image().is_some() {
            return 20.0;
        }
        if let Some(size) = self.action_font_size(action) {
            return size;
        }
        let text = action.button_text(input.context).unwrap_or_default();
        if action.is_input_action() && is_lowercased_with_uppercase_variant(&text) {
            return 26.0;
        }
        if action.is_system_action() || action.is_primary_action() {
            return 16.0;
        }
        23.0
    }

    fn font_weight(&self, input: &StyleInput<'_>) -> Option<FontWeight> {
        if Self::is_georgian_alphabetic(input.context) {
            return Some(FontWeight::Regular);
        }
        match input.action {
            KeyboardAction::Backspace => Some(FontWeight::Regular),
            KeyboardAction::Character(text) => {
                is_lowercased_with_uppercase_variant(text).then_some(FontWeight::Light)
            }
            action => action.button_image().map(|_| FontWeight::Light),
        }
    }
}

type Hook<T> = Box<dyn Fn(&StyleInput<'_>, T) -> T + Send + Sync>;

/// Rules that adjust selected facets of a wrapped rules value
///
/// Each hook receives the input and the wrapped rules' answer and returns
/// the final value. Facets without a hook pass through unchanged.
pub struct LayeredRules<R> {
    base: R,
    background_color: Option<Hook<Color>>,
    background_opacity: Option<Hook<f32>>,
    foreground_color: Option<Hook<Color>>,
    border: Option<Hook<ButtonBorder>>,
    corner_radius: Option<Hook<f32>>,
    shadow: Option<Hook<Shadow>>,
    font_size: Option<Hook<f32>>,
    font_weight: Option<Hook<Option<FontWeight>>>,
}

impl<R: StyleRules> LayeredRules<R> {
    pub fn new(base: R) -> Self {
        Self {
            base,
            background_color: None,
            background_opacity: None,
            foreground_color: None,
            border: None,
            corner_radius: None,
            shadow: None,
            font_size: None,
            font_weight: None,
        }
    }

    /// The wrapped rules
    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn with_background_color(
        mut self,
        hook: impl Fn(&StyleInput<'_>, Color) -> Color + Send + Sync + 'static,
    ) -> Self {
        self.background_color = Some(Box::new(hook));
        self
    }

    pub fn with_background_opacity(
        mut self,
        hook: impl Fn(&StyleInput<'_>, f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.background_opacity = Some(Box::new(hook));
        self
    }

    pub fn with_foreground_color(
        mut self,
        hook: impl Fn(&StyleInput<'_>, Color) -> Color + Send + Sync + 'static,
    ) -> Self {
        self.foreground_color = Some(Box::new(hook));
        self
    }

    pub fn with_border(
        mut self,
        hook: impl Fn(&StyleInput<'_>, ButtonBorder) -> ButtonBorder + Send + Sync + 'static,
    ) -> Self {
        self.border = Some(Box::new(hook));
        self
    }

    pub fn with_corner_radius(
        mut self,
        hook: impl Fn(&StyleInput<'_>, f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.corner_radius = Some(Box::new(hook));
        self
    }

    pub fn with_shadow(
        mut self,
        hook: impl Fn(&StyleInput<'_>, Shadow) -> Shadow + Send + Sync + 'static,
    ) -> Self {
        self.shadow = Some(Box::new(hook));
        self
    }

    pub fn with_font_size(
        mut self,
        hook: impl Fn(&StyleInput<'_>, f32) -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.font_size = Some(Box::new(hook));
        self
    }

    pub fn with_font_weight(
        mut self,
        hook: impl Fn(&StyleInput<'_>, Option<FontWeight>) -> Option<FontWeight> + Send + Sync + 'static,
    ) -> Self {
        self.font_weight = Some(Box::new(hook));
        self
    }
}

fn layer<T>(hook: &Option<Hook<T>>, input: &StyleInput<'_>, base: T) -> T {
    match hook {
        Some(hook) => hook(input, base),
        None => base,
    }
}

impl<R: StyleRules> StyleRules for LayeredRules<R> {
    fn background_color(&self, input: &StyleInput<'_>) -> Color {
        layer(&self.background_color, input, self.base.background_color(input))
    }

    fn background_opacity(&self, input: &StyleInput<'_>) -> f32 {
        layer(&self.background_opacity, input, self.base.background_opacity(input))
    }

    fn foreground_color(&self, input: &StyleInput<'_>) -> Color {
        layer(&self.foreground_color, input, self.base.foreground_color(input))
    }

    fn border(&self, input: &StyleInput<'_>) -> ButtonBorder {
        layer(&self.border, input, self.base.border(input))
    }

    fn corner_radius(&self, input: &StyleInput<'_>) -> f32 {
        layer(&self.corner_radius, input, self.base.corner_radius(input))
    }

    fn shadow(&self, input: &StyleInput<'_>) -> Shadow {
        layer(&self.shadow, input, self.base.shadow(input))
    }

    fn font_size(&self, input: &StyleInput<'_>) -> f32 {
        layer(&self.font_size, input, self.base.font_size(input))
    }

    fn font_weight(&self, input: &StyleInput<'_>) -> Option<FontWeight> {
        layer(&self.font_weight, input, self.base.font_weight(input))
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for LayeredRules<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layered: Vec<&str> = [
            ("background_color", self.background_color.is_some()),
            ("background_opacity", self.background_opacity.is_some()),
            ("foreground_color", self.foreground_color.is_some()),
            ("border", self.border.is_some()),
            ("corner_radius", self.corner_radius.is_some()),
            ("shadow", self.shadow.is_some()),
            ("font_size", self.font_size.is_some()),
            ("font_weight", self.font_weight.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();
        f.debug_struct("LayeredRules")
            .field("base", &self.base)
            .field("layered", &layered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_context::{KeyboardCase, Locale};

    fn font_size(context: &KeyboardContext, action: KeyboardAction) -> f32 {
        StandardStyleRules::default().font_size(&StyleInput::new(context, &action, false))
    }

    fn font_weight(context: &KeyboardContext, action: KeyboardAction) -> Option<FontWeight> {
        StandardStyleRules::default().font_weight(&StyleInput::new(context, &action, false))
    }

    #[test]
    fn test_font_sizes() {
        let context = KeyboardContext::default();
        assert_eq!(font_size(&context, KeyboardAction::Backspace), 20.0);
        assert_eq!(
            font_size(&context, KeyboardAction::KeyboardType(KeyboardType::Numeric)),
            16.0
        );
        assert_eq!(
            font_size(&context, KeyboardAction::KeyboardType(KeyboardType::default())),
            15.0
        );
        assert_eq!(font_size(&context, KeyboardAction::Space), 16.0);
        assert_eq!(font_size(&context, KeyboardAction::Character("a".into())), 26.0);
        assert_eq!(font_size(&context, KeyboardAction::Character("A".into())), 23.0);
        assert_eq!(font_size(&context, KeyboardAction::Escape), 16.0);
        assert_eq!(
            font_size(&context, KeyboardAction::Primary(Default::default())),
            16.0
        );
    }

    #[test]
    fn test_pad_landscape_font_override() {
        let context = KeyboardContext {
            device_type: DeviceType::Pad,
            interface_orientation: kestrel_context::InterfaceOrientation::LandscapeLeft,
            ..Default::default()
        };
        assert_eq!(
            font_size(&context, KeyboardAction::KeyboardType(KeyboardType::Numeric)),
            22.0
        );
        assert_eq!(
            font_size(&context, KeyboardAction::KeyboardType(KeyboardType::Symbolic)),
            20.0
        );
        assert_eq!(
            font_size(&context, KeyboardAction::KeyboardType(KeyboardType::Email)),
            20.0
        );
    }

    #[test]
    fn test_font_weights() {
        let context = KeyboardContext::default();
        assert_eq!(font_weight(&context, KeyboardAction::Backspace), Some(FontWeight::Regular));
        assert_eq!(
            font_weight(&context, KeyboardAction::Character("a".into())),
            Some(FontWeight::Light)
        );
        assert_eq!(font_weight(&context, KeyboardAction::Character("A".into())), None);
        assert_eq!(
            font_weight(&context, KeyboardAction::Shift(KeyboardCase::Lowercased)),
            Some(FontWeight::Light)
        );
        assert_eq!(font_weight(&context, KeyboardAction::Space), None);
    }

    #[test]
    fn test_georgian_alphabetic_is_regular() {
        let context = KeyboardContext {
            locale: Locale::parse("ka").unwrap(),
            ..Default::default()
        };
        assert_eq!(
            font_weight(&context, KeyboardAction::Character("ა".into())),
            Some(FontWeight::Regular)
        );
        assert_eq!(font_weight(&context, KeyboardAction::Space), Some(FontWeight::Regular));
    }

    #[test]
    fn test_layered_rules_see_base_value() {
        let rules = LayeredRules::new(StandardStyleRules::default())
            .with_corner_radius(|_, base| base * 2.0)
            .with_font_weight(|_, _| None);
        let context = KeyboardContext::default();
        let action = KeyboardAction::Backspace;
        let input = StyleInput::new(&context, &action, false);

        assert_eq!(rules.corner_radius(&input), 10.0);
        assert_eq!(rules.font_weight(&input), None);
        assert_eq!(rules.border(&input), ButtonBorder::standard());
    }

    #[test]
    fn test_layers_compose() {
        let inner = LayeredRules::new(StandardStyleRules::default())
            .with_font_size(|_, base| base + 1.0);
        let outer = LayeredRules::new(inner).with_font_size(|_, base| base * 2.0);
        let context = KeyboardContext::default();
        let action = KeyboardAction::Space;
        let input = StyleInput::new(&context, &action, false);
        assert_eq!(outer.font_size(&input), 34.0);
    }
}
