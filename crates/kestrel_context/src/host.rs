//! Host facts
//!
//! The host input controller owns the text field, the screen and the trait
//! environment. [`HostSnapshot`] captures everything the synchronizer reads
//! from it at one point in time, with missing facts replaced by defaults:
//! portrait orientation, a zero screen size and an unspecified interface
//! style.

use crate::keyboard::InterfaceOrientation;
use crate::proxy::ProxyHandle;
use kestrel_core::Size;
use kestrel_theme::ColorScheme;
use serde::{Deserialize, Serialize};

/// Interface style reported by the host trait environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInterfaceStyle {
    #[default]
    Unspecified,
    Light,
    Dark,
    /// Raw value of a style this crate does not know
    Unrecognized(i64),
}

impl UserInterfaceStyle {
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            UserInterfaceStyle::Dark => ColorScheme::Dark,
            UserInterfaceStyle::Unspecified | UserInterfaceStyle::Light => ColorScheme::Light,
            UserInterfaceStyle::Unrecognized(_) => ColorScheme::Unrecognized,
        }
    }
}

/// Trait environment of the keyboard view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitCollection {
    pub user_interface_style: UserInterfaceStyle,
    pub display_scale: f32,
}

impl Default for TraitCollection {
    fn default() -> Self {
        Self {
            user_interface_style: UserInterfaceStyle::Unspecified,
            display_scale: 1.0,
        }
    }
}

/// Input mode the user picked in the system keyboard switcher
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputMode {
    pub primary_language: Option<String>,
}

/// The host input controller, as seen by the synchronizer
pub trait InputController {
    fn original_text_document_proxy(&self) -> ProxyHandle;

    fn text_input_proxy(&self) -> Option<ProxyHandle> {
        None
    }

    fn has_dictation_key(&self) -> bool {
        false
    }

    fn has_full_access(&self) -> bool {
        false
    }

    /// `None` when the keyboard view is not attached to a window
    fn orientation(&self) -> Option<InterfaceOrientation> {
        None
    }

    fn needs_input_mode_switch_key(&self) -> bool {
        false
    }

    fn primary_language(&self) -> Option<String> {
        None
    }

    /// `None` when the keyboard view is not attached to a window
    fn screen_size(&self) -> Option<Size> {
        None
    }

    fn text_input_mode(&self) -> Option<TextInputMode> {
        None
    }

    fn trait_collection(&self) -> Option<TraitCollection> {
        None
    }

    /// Current width of the keyboard view
    fn view_width(&self) -> f32;
}

/// Host facts captured at one point in time
#[derive(Clone, Debug, PartialEq)]
pub struct HostSnapshot {
    pub original_text_document_proxy: ProxyHandle,
    pub text_input_proxy: Option<ProxyHandle>,
    pub has_dictation_key: bool,
    pub has_full_access: bool,
    pub orientation: InterfaceOrientation,
    pub needs_input_mode_switch_key: bool,
    pub primary_language: Option<String>,
    pub screen_size: Size,
    pub text_input_mode: Option<TextInputMode>,
    pub trait_collection: TraitCollection,
    pub view_width: f32,
}

impl HostSnapshot {
    /// Read every fact from the controller, filling in defaults
    pub fn capture(controller: &(impl InputController + ?Sized)) -> Self {
        Self {
            original_text_document_proxy: controller.original_text_document_proxy(),
            text_input_proxy: controller.text_input_proxy(),
            has_dictation_key: controller.has_dictation_key(),
            has_full_access: controller.has_full_access(),
            orientation: controller.orientation().unwrap_or_default(),
            needs_input_mode_switch_key: controller.needs_input_mode_switch_key(),
            primary_language: controller.primary_language(),
            screen_size: controller.screen_size().unwrap_or(Size::ZERO),
            text_input_mode: controller.text_input_mode(),
            trait_collection: controller.trait_collection().unwrap_or_default(),
            view_width: controller.view_width(),
        }
    }

    /// The proxy text is routed to: the input proxy when present, else the
    /// original one
    pub fn text_document_proxy(&self) -> &ProxyHandle {
        self.text_input_proxy
            .as_ref()
            .unwrap_or(&self.original_text_document_proxy)
    }

    /// Whether the text field wants suggestions. Traits the field does not
    /// report count as wanting them.
    pub fn proxy_prefers_autocomplete(&self) -> bool {
        let traits = self.text_document_proxy().traits();
        let keyboard = traits
            .keyboard_type()
            .map_or(true, |kind| kind.prefers_autocomplete());
        let return_key = traits
            .return_key_type()
            .map_or(true, |kind| kind.prefers_autocomplete());
        keyboard && return_key
    }
}

impl Default for HostSnapshot {
    fn default() -> Self {
        Self {
            original_text_document_proxy: ProxyHandle::placeholder(),
            text_input_proxy: None,
            has_dictation_key: false,
            has_full_access: false,
            orientation: InterfaceOrientation::Portrait,
            needs_input_mode_switch_key: false,
            primary_language: None,
            screen_size: Size::ZERO,
            text_input_mode: None,
            trait_collection: TraitCollection::default(),
            view_width: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{ProxyKeyboardType, ReturnKeyType};
    use crate::proxy::StaticProxy;

    struct DetachedController;

    impl InputController for DetachedController {
        fn original_text_document_proxy(&self) -> ProxyHandle {
            ProxyHandle::placeholder()
        }

        fn view_width(&self) -> f32 {
            320.0
        }
    }

    #[test]
    fn test_missing_facts_use_defaults() {
        let snapshot = HostSnapshot::capture(&DetachedController);
        assert_eq!(snapshot.orientation, InterfaceOrientation::Portrait);
        assert_eq!(snapshot.screen_size, Size::ZERO);
        assert_eq!(snapshot.trait_collection.user_interface_style.color_scheme(), ColorScheme::Light);
        assert_eq!(snapshot.view_width, 320.0);
    }

    #[test]
    fn test_input_proxy_takes_precedence() {
        let input = ProxyHandle::new(StaticProxy {
            return_key_type: Some(ReturnKeyType::Go),
            ..Default::default()
        });
        let snapshot = HostSnapshot {
            text_input_proxy: Some(input.clone()),
            ..Default::default()
        };
        assert_eq!(snapshot.text_document_proxy(), &input);
        assert!(!snapshot.proxy_prefers_autocomplete());
    }

    #[test]
    fn test_unreported_traits_prefer_autocomplete() {
        assert!(HostSnapshot::default().proxy_prefers_autocomplete());

        let snapshot = HostSnapshot {
            original_text_document_proxy: ProxyHandle::new(StaticProxy {
                keyboard_type: Some(ProxyKeyboardType::NumberPad),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!snapshot.proxy_prefers_autocomplete());
    }

    #[test]
    fn test_unrecognized_style() {
        assert_eq!(
            UserInterfaceStyle::Unrecognized(7).color_scheme(),
            ColorScheme::Unrecognized
        );
    }
}
