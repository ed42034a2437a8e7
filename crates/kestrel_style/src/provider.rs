//! Keyboard style provider
//!
//! Entry point for the rendering layer. Every method is a pure function of
//! the context passed in; nothing is cached between calls, so styles must be
//! requested again after every context change.

use crate::action::KeyboardAction;
use crate::layout::LayoutConfiguration;
use crate::rules::{StandardStyleRules, StyleInput, StyleRules};
use crate::style::{
    ActionCalloutStyle, AutocompleteToolbarStyle, Background, ButtonStyle, CalloutStyle,
    InputCalloutStyle,
};
use crate::table::standard_colors;
use kestrel_context::{DeviceType, KeyboardContext};
use kestrel_core::{EdgeInsets, Size};

/// Portrait screen of the largest phones, which sit flush with the bottom edge
const PRO_MAX_PORTRAIT_SCREEN: Size = Size::new(428.0, 926.0);
const SCREEN_TOLERANCE: f32 = 10.0;

/// Resolves button and container styles through a set of [`StyleRules`]
#[derive(Clone, Debug, Default)]
pub struct KeyboardStyleProvider<R = StandardStyleRules> {
    rules: R,
}

impl KeyboardStyleProvider {
    /// Provider with the native keyboard look
    pub fn standard() -> Self {
        Self::default()
    }
}

impl<R: StyleRules> KeyboardStyleProvider<R> {
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn button_style(
        &self,
        context: &KeyboardContext,
        action: &KeyboardAction,
        is_pressed: bool,
    ) -> ButtonStyle {
        self.rules
            .button_style(&StyleInput::new(context, action, is_pressed))
    }

    pub fn button_text(&self, context: &KeyboardContext, action: &KeyboardAction) -> Option<String> {
        action.button_text(context)
    }

    pub fn button_image(&self, action: &KeyboardAction) -> Option<&'static str> {
        action.button_image()
    }

    /// Extra bottom padding that visually centers some punctuation
    pub fn button_content_bottom_margin(&self, action: &KeyboardAction) -> f32 {
        match action {
            KeyboardAction::Character(text) => match text.as_str() {
                "-" | "/" | ":" | ";" | "@" => 3.0,
                "(" | ")" => 4.0,
                _ => 0.0,
            },
            _ => 0.0,
        }
    }

    pub fn button_image_scale_factor(&self, context: &KeyboardContext) -> f32 {
        match context.device_type {
            DeviceType::Pad => 1.2,
            _ => 1.0,
        }
    }

    /// Keyboard background for the active scheme
    pub fn background_style(&self, context: &KeyboardContext) -> Background {
        match context.selected_theme() {
            Some(theme) => Background::Color(theme.keyboard_background_color),
            None => Background::Standard,
        }
    }

    pub fn callout_style(&self, context: &KeyboardContext) -> CalloutStyle {
        let mut style = CalloutStyle::standard(&standard_colors(context));
        if let Some(theme) = context.selected_theme() {
            style.background_color = theme.callout_background_color;
            style.text_color = theme.callout_foreground_color;
        }
        let input_key = KeyboardAction::Character(String::new());
        style.button_corner_radius = self.button_style(context, &input_key, false).corner_radius;
        style
    }

    pub fn action_callout_style(&self, context: &KeyboardContext) -> ActionCalloutStyle {
        let vertical_offset = match context.device_type {
            DeviceType::Pad => 20.0,
            _ => 0.0,
        };
        ActionCalloutStyle::standard(
            self.callout_style(context),
            &standard_colors(context),
            vertical_offset,
        )
    }

    pub fn input_callout_style(&self, context: &KeyboardContext) -> InputCalloutStyle {
        InputCalloutStyle::standard(self.callout_style(context))
    }

    pub fn autocomplete_toolbar_style(&self, context: &KeyboardContext) -> AutocompleteToolbarStyle {
        AutocompleteToolbarStyle::standard(&standard_colors(context))
    }

    /// Insets around the whole keyboard
    pub fn keyboard_edge_insets(&self, context: &KeyboardContext) -> EdgeInsets {
        match context.device_type {
            DeviceType::Pad => EdgeInsets::bottom(4.0),
            DeviceType::Phone => {
                if context
                    .screen_size
                    .approx_eq(&PRO_MAX_PORTRAIT_SCREEN, SCREEN_TOLERANCE)
                {
                    EdgeInsets::ZERO
                } else {
                    EdgeInsets::bottom(-2.0)
                }
            }
            _ => EdgeInsets::ZERO,
        }
    }

    pub fn layout_configuration(&self, context: &KeyboardContext) -> LayoutConfiguration {
        LayoutConfiguration::for_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_margins() {
        let provider = KeyboardStyleProvider::standard();
        let margin = |text: &str| {
            provider.button_content_bottom_margin(&KeyboardAction::Character(text.to_string()))
        };
        assert_eq!(margin("@"), 3.0);
        assert_eq!(margin("("), 4.0);
        assert_eq!(margin("a"), 0.0);
        assert_eq!(provider.button_content_bottom_margin(&KeyboardAction::Space), 0.0);
    }

    #[test]
    fn test_edge_insets() {
        let provider = KeyboardStyleProvider::standard();
        let mut context = KeyboardContext {
            screen_size: Size::new(430.0, 932.0),
            ..Default::default()
        };
        assert_eq!(provider.keyboard_edge_insets(&context), EdgeInsets::ZERO);

        context.screen_size = Size::new(390.0, 844.0);
        assert_eq!(provider.keyboard_edge_insets(&context), EdgeInsets::bottom(-2.0));

        context.device_type = DeviceType::Pad;
        assert_eq!(provider.keyboard_edge_insets(&context), EdgeInsets::bottom(4.0));

        context.device_type = DeviceType::Mac;
        assert_eq!(provider.keyboard_edge_insets(&context), EdgeInsets::ZERO);
    }

    #[test]
    fn test_image_scale() {
        let provider = KeyboardStyleProvider::standard();
        let pad = KeyboardContext {
            device_type: DeviceType::Pad,
            ..Default::default()
        };
        assert_eq!(provider.button_image_scale_factor(&pad), 1.2);
        assert_eq!(provider.button_image_scale_factor(&KeyboardContext::default()), 1.0);
    }
}
