//! Keyboard context state
//!
//! [`KeyboardContext`] is a plain value. It is only mutated through
//! [`ContextStore`](crate::ContextStore), which owns the single copy the
//! keyboard renders from.

use crate::host::{TextInputMode, TraitCollection};
use crate::keyboard::{
    AutocapitalizationType, CustomView, DeviceType, InterfaceOrientation, KeyboardAppearance,
    KeyboardType, SpaceLongPressBehavior,
};
use crate::locale::Locale;
use crate::proxy::ProxyHandle;
use kestrel_core::Size;
use kestrel_theme::{ColorScheme, Theme};

/// Everything the keyboard knows about itself and its host
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardContext {
    pub autocapitalization_type_override: Option<AutocapitalizationType>,
    pub color_scheme: ColorScheme,
    pub current_custom_view: CustomView,
    pub current_selected_font_id: u32,
    pub device_type: DeviceType,
    pub has_dictation_key: bool,
    pub has_full_access: bool,
    pub interface_orientation: InterfaceOrientation,
    pub is_auto_capitalization_enabled: bool,
    pub is_keyboard_floating: bool,
    pub is_space_drag_gesture_active: bool,
    pub keyboard_type: KeyboardType,
    pub locale: Locale,
    pub locales: Vec<Locale>,
    pub locale_presentation_locale: Option<Locale>,
    pub needs_input_mode_switch_key: bool,
    pub original_text_document_proxy: ProxyHandle,
    pub prefers_autocomplete: bool,
    pub primary_language: Option<String>,
    pub screen_size: Size,
    pub selected_dark_theme: Option<Theme>,
    pub selected_light_theme: Option<Theme>,
    pub show_keyboard: bool,
    pub space_long_press_behavior: SpaceLongPressBehavior,
    pub text_input_mode: Option<TextInputMode>,
    pub text_input_proxy: Option<ProxyHandle>,
    pub trait_collection: TraitCollection,
}

impl Default for KeyboardContext {
    fn default() -> Self {
        let locale = Locale::default();
        Self {
            autocapitalization_type_override: None,
            color_scheme: ColorScheme::Light,
            current_custom_view: CustomView::SelectFont,
            current_selected_font_id: 1,
            device_type: DeviceType::Phone,
            has_dictation_key: false,
            has_full_access: false,
            interface_orientation: InterfaceOrientation::Portrait,
            is_auto_capitalization_enabled: true,
            is_keyboard_floating: false,
            is_space_drag_gesture_active: false,
            keyboard_type: KeyboardType::default(),
            locales: vec![locale.clone()],
            locale,
            locale_presentation_locale: None,
            needs_input_mode_switch_key: false,
            original_text_document_proxy: ProxyHandle::placeholder(),
            prefers_autocomplete: true,
            primary_language: None,
            screen_size: Size::ZERO,
            selected_dark_theme: None,
            selected_light_theme: None,
            show_keyboard: true,
            space_long_press_behavior: SpaceLongPressBehavior::MoveInputCursor,
            text_input_mode: None,
            text_input_proxy: None,
            trait_collection: TraitCollection::default(),
        }
    }
}

impl KeyboardContext {
    /// The proxy text is routed to
    pub fn text_document_proxy(&self) -> &ProxyHandle {
        self.text_input_proxy
            .as_ref()
            .unwrap_or(&self.original_text_document_proxy)
    }

    pub fn keyboard_appearance(&self) -> KeyboardAppearance {
        self.text_document_proxy()
            .traits()
            .keyboard_appearance()
            .unwrap_or_default()
    }

    /// The override when set, else what the text field asks for
    pub fn autocapitalization_type(&self) -> Option<AutocapitalizationType> {
        self.autocapitalization_type_override
            .or_else(|| self.text_document_proxy().traits().autocapitalization_type())
    }

    pub fn has_dark_color_scheme(&self) -> bool {
        self.color_scheme == ColorScheme::Dark
    }

    /// The theme picked for the active color scheme. An unrecognized scheme
    /// never has one.
    pub fn selected_theme(&self) -> Option<&Theme> {
        match self.color_scheme {
            ColorScheme::Light => self.selected_light_theme.as_ref(),
            ColorScheme::Dark => self.selected_dark_theme.as_ref(),
            ColorScheme::Unrecognized => None,
        }
    }

    pub fn has_keyboard_type(&self, keyboard_type: &KeyboardType) -> bool {
        &self.keyboard_type == keyboard_type
    }

    pub fn has_keyboard_locale(&self, locale: &Locale) -> bool {
        &self.locale == locale
    }

    pub fn has_multiple_locales(&self) -> bool {
        self.locales.len() > 1
    }
}
