//! Kestrel configuration file handling (kestrel.toml)
//!
//! ```toml
//! [context]
//! device_type = "pad"
//! color_scheme = "dark"
//! keyboard_type = "alphabetic:uppercased"
//! locales = ["en-US", "sv-SE"]
//! dark_theme = "dark-and-red"
//!
//! [host]
//! has_full_access = true
//! screen_size = { width = 820.0, height = 1180.0 }
//! view_width = 820.0
//! trait_collection = { user_interface_style = "dark" }
//! proxy = { return_key_type = "search" }
//! ```
//!
//! `[context]` is the state before any host sync. A sync overwrites every
//! host-derived field, so `color_scheme` only lasts until the first sync
//! replaces it with the scheme of `[host] trait_collection`.

use anyhow::{anyhow, Context, Result};
use kestrel_context::{
    ContextError, ContextStore, DeviceType, HostSnapshot, InterfaceOrientation, KeyboardContext,
    KeyboardType, Locale, ProxyHandle, StaticProxy, TextInputMode, TraitCollection,
};
use kestrel_core::Size;
use kestrel_theme::{ColorScheme, Theme};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KestrelConfig {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// Starting state of the keyboard context
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    #[serde(default)]
    pub device_type: DeviceType,
    #[serde(default)]
    pub orientation: InterfaceOrientation,
    /// Starting scheme only. A host sync replaces it with the scheme of
    /// `[host] trait_collection`.
    #[serde(default)]
    pub color_scheme: ColorScheme,
    /// `Display` form of a keyboard type, e.g. `numeric`
    #[serde(default = "default_keyboard_type")]
    pub keyboard_type: String,
    /// Defaults to the first of `locales`
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,
    #[serde(default)]
    pub light_theme: Option<String>,
    #[serde(default)]
    pub dark_theme: Option<String>,
    #[serde(default)]
    pub space_drag: bool,
}

fn default_keyboard_type() -> String {
    KeyboardType::default().to_string()
}

fn default_locales() -> Vec<Locale> {
    vec![Locale::default()]
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            device_type: DeviceType::default(),
            orientation: InterfaceOrientation::default(),
            color_scheme: ColorScheme::default(),
            keyboard_type: default_keyboard_type(),
            locale: None,
            locales: default_locales(),
            light_theme: None,
            dark_theme: None,
            space_drag: false,
        }
    }
}

/// Facts the host reports on every sync
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Traits of the text field being edited
    #[serde(default)]
    pub proxy: StaticProxy,
    #[serde(default)]
    pub has_dictation_key: bool,
    #[serde(default)]
    pub has_full_access: bool,
    #[serde(default)]
    pub orientation: InterfaceOrientation,
    #[serde(default)]
    pub needs_input_mode_switch_key: bool,
    #[serde(default)]
    pub primary_language: Option<String>,
    #[serde(default = "default_screen_size")]
    pub screen_size: Size,
    /// Defaults to the screen width
    #[serde(default)]
    pub view_width: Option<f32>,
    #[serde(default)]
    pub trait_collection: TraitCollection,
}

fn default_screen_size() -> Size {
    Size::new(390.0, 844.0)
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            proxy: StaticProxy::default(),
            has_dictation_key: false,
            has_full_access: false,
            orientation: InterfaceOrientation::default(),
            needs_input_mode_switch_key: false,
            primary_language: None,
            screen_size: default_screen_size(),
            view_width: None,
            trait_collection: TraitCollection::default(),
        }
    }
}

impl KestrelConfig {
    /// Load a configuration file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: KestrelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Build the keyboard context described by `[context]`
    pub fn keyboard_context(&self) -> Result<KeyboardContext> {
        let config = &self.context;
        let keyboard_type: KeyboardType = config
            .keyboard_type
            .parse()
            .map_err(|message: String| anyhow!(message))
            .context("Invalid [context] keyboard_type")?;

        let mut locales = config.locales.clone();
        let locale = match &config.locale {
            Some(locale) => locale.clone(),
            None => locales.first().cloned().unwrap_or_default(),
        };
        if locales.is_empty() {
            locales.push(locale.clone());
        }

        Ok(KeyboardContext {
            device_type: config.device_type,
            interface_orientation: config.orientation,
            color_scheme: config.color_scheme,
            keyboard_type,
            locale,
            locales,
            selected_light_theme: resolve_theme(config.light_theme.as_deref())
                .context("Invalid [context] light_theme")?,
            selected_dark_theme: resolve_theme(config.dark_theme.as_deref())
                .context("Invalid [context] dark_theme")?,
            is_space_drag_gesture_active: config.space_drag,
            ..Default::default()
        })
    }

    pub fn store(&self) -> Result<ContextStore> {
        Ok(ContextStore::new(self.keyboard_context()?))
    }

    /// Snapshot of the host described by `[host]`
    pub fn host_snapshot(&self) -> HostSnapshot {
        let host = &self.host;
        HostSnapshot {
            original_text_document_proxy: ProxyHandle::new(host.proxy.clone()),
            text_input_proxy: None,
            has_dictation_key: host.has_dictation_key,
            has_full_access: host.has_full_access,
            orientation: host.orientation,
            needs_input_mode_switch_key: host.needs_input_mode_switch_key,
            primary_language: host.primary_language.clone(),
            screen_size: host.screen_size,
            text_input_mode: host.primary_language.clone().map(|language| TextInputMode {
                primary_language: Some(language),
            }),
            trait_collection: host.trait_collection.clone(),
            view_width: host.view_width.unwrap_or(host.screen_size.width),
        }
    }
}

fn resolve_theme(name: Option<&str>) -> Result<Option<Theme>, ContextError> {
    name.map(|name| name.parse::<&'static Theme>().map(|theme| *theme))
        .transpose()
        .map_err(ContextError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_context::{ContextSynchronizer, ReturnKeyType, UserInterfaceStyle};
    use kestrel_theme::catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: KestrelConfig = toml::from_str("").unwrap();
        let context = config.keyboard_context().unwrap();
        assert_eq!(context.locale, Locale::default());
        assert_eq!(context.locales, vec![Locale::default()]);
        assert_eq!(context.keyboard_type, KeyboardType::default());
        assert_eq!(context.selected_light_theme, None);
        assert_eq!(config.host_snapshot().view_width, 390.0);
    }

    #[test]
    fn test_full_file() {
        let config: KestrelConfig = toml::from_str(
            r#"
            [context]
            device_type = "pad"
            color_scheme = "dark"
            keyboard_type = "numeric"
            locales = ["sv-SE", "en-US"]
            dark_theme = "dark-and-red"

            [host]
            has_full_access = true
            screen_size = { width = 820.0, height = 1180.0 }
            view_width = 320.0
            trait_collection = { user_interface_style = "dark" }
            proxy = { return_key_type = "search" }
            "#,
        )
        .unwrap();

        let context = config.keyboard_context().unwrap();
        assert_eq!(context.device_type, DeviceType::Pad);
        assert_eq!(context.keyboard_type, KeyboardType::Numeric);
        assert_eq!(context.locale, Locale::parse("sv-SE").unwrap());
        assert_eq!(context.selected_dark_theme, Some(catalog::DARK_AND_RED));

        let snapshot = config.host_snapshot();
        assert!(snapshot.has_full_access);
        assert_eq!(snapshot.view_width, 320.0);
        assert_eq!(
            snapshot.trait_collection.user_interface_style,
            UserInterfaceStyle::Dark
        );
        assert_eq!(
            snapshot.text_document_proxy().traits().return_key_type(),
            Some(ReturnKeyType::Search)
        );
    }

    #[test]
    fn test_host_sync_replaces_configured_scheme() {
        let config: KestrelConfig = toml::from_str("[context]\ncolor_scheme = \"dark\"").unwrap();
        let mut store = config.store().unwrap();
        assert_eq!(store.context().color_scheme, ColorScheme::Dark);

        ContextSynchronizer::sync(&mut store, &config.host_snapshot());
        assert_eq!(store.context().color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let config: KestrelConfig = toml::from_str("[context]\nlight_theme = \"plaid\"").unwrap();
        let error = config.keyboard_context().unwrap_err();
        assert!(format!("{error:#}").contains("plaid"));
    }

    #[test]
    fn test_invalid_keyboard_type_is_rejected() {
        let config: KestrelConfig =
            toml::from_str("[context]\nkeyboard_type = \"telegraph\"").unwrap();
        assert!(config.keyboard_context().is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<KestrelConfig>("[context]\nfont = 3").is_err());
    }
}
