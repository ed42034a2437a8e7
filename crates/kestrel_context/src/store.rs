//! Context store
//!
//! [`ContextStore`] owns the [`KeyboardContext`] and is its only write path.
//! Every setter compares before writing: assigning a value equal to the
//! current one (proxies by identity) is not a write and is never published.
//!
//! Writes are published to observers as a [`ContextChanges`] record. Outside
//! a transaction each write is published on its own; inside
//! [`ContextStore::transaction`] they are collected and published once when
//! the outermost transaction ends. A field written inside a transaction and
//! restored to its starting value before the end is not published.
//!
//! ```rust
//! use kestrel_context::{ContextField, ContextStore, KeyboardType};
//! use std::sync::{Arc, Mutex};
//!
//! let mut store = ContextStore::default();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! store.subscribe(move |changes, _context| {
//!     sink.lock().unwrap().push(changes.fields().to_vec());
//! });
//!
//! store.transaction(|store| {
//!     store.set_keyboard_type(KeyboardType::Numeric);
//!     store.set_has_full_access(true);
//! });
//! store.set_keyboard_type(KeyboardType::Numeric); // unchanged, not published
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec![vec![ContextField::KeyboardType, ContextField::HasFullAccess]]
//! );
//! ```

use crate::context::KeyboardContext;
use crate::host::{TextInputMode, TraitCollection};
use crate::keyboard::{
    AutocapitalizationType, CustomView, DeviceType, InterfaceOrientation, KeyboardType,
    SpaceLongPressBehavior,
};
use crate::locale::Locale;
use crate::proxy::ProxyHandle;
use kestrel_core::{ObserverId, ObserverRegistry, Size};
use kestrel_theme::{ColorScheme, Theme};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

/// A field of [`KeyboardContext`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextField {
    AutocapitalizationTypeOverride,
    ColorScheme,
    CurrentCustomView,
    CurrentSelectedFontId,
    DeviceType,
    HasDictationKey,
    HasFullAccess,
    InterfaceOrientation,
    IsAutoCapitalizationEnabled,
    IsKeyboardFloating,
    IsSpaceDragGestureActive,
    KeyboardType,
    Locale,
    Locales,
    LocalePresentationLocale,
    NeedsInputModeSwitchKey,
    OriginalTextDocumentProxy,
    PrefersAutocomplete,
    PrimaryLanguage,
    ScreenSize,
    SelectedDarkTheme,
    SelectedLightTheme,
    ShowKeyboard,
    SpaceLongPressBehavior,
    TextInputMode,
    TextInputProxy,
    TraitCollection,
}

impl ContextField {
    /// Whether the field holds different values in `before` and `after`
    pub fn differs(self, before: &KeyboardContext, after: &KeyboardContext) -> bool {
        macro_rules! compare {
            ($($variant:ident => $field:ident),* $(,)?) => {
                match self {
                    $(ContextField::$variant => before.$field != after.$field,)*
                }
            };
        }
        compare! {
            AutocapitalizationTypeOverride => autocapitalization_type_override,
            ColorScheme => color_scheme,
            CurrentCustomView => current_custom_view,
            CurrentSelectedFontId => current_selected_font_id,
            DeviceType => device_type,
            HasDictationKey => has_dictation_key,
            HasFullAccess => has_full_access,
            InterfaceOrientation => interface_orientation,
            IsAutoCapitalizationEnabled => is_auto_capitalization_enabled,
            IsKeyboardFloating => is_keyboard_floating,
            IsSpaceDragGestureActive => is_space_drag_gesture_active,
            KeyboardType => keyboard_type,
            Locale => locale,
            Locales => locales,
            LocalePresentationLocale => locale_presentation_locale,
            NeedsInputModeSwitchKey => needs_input_mode_switch_key,
            OriginalTextDocumentProxy => original_text_document_proxy,
            PrefersAutocomplete => prefers_autocomplete,
            PrimaryLanguage => primary_language,
            ScreenSize => screen_size,
            SelectedDarkTheme => selected_dark_theme,
            SelectedLightTheme => selected_light_theme,
            ShowKeyboard => show_keyboard,
            SpaceLongPressBehavior => space_long_press_behavior,
            TextInputMode => text_input_mode,
            TextInputProxy => text_input_proxy,
            TraitCollection => trait_collection,
        }
    }
}

type FieldSet = SmallVec<[ContextField; 8]>;

/// One published batch of writes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContextChanges {
    fields: FieldSet,
    generation: u64,
}

impl ContextChanges {
    /// Changed fields, in the order they were first written
    pub fn fields(&self) -> &[ContextField] {
        &self.fields
    }

    pub fn contains(&self, field: ContextField) -> bool {
        self.fields.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Store generation after this batch was committed
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

type ContextObserver = dyn FnMut(&ContextChanges, &KeyboardContext) + Send;

/// Owner of the keyboard context
pub struct ContextStore {
    context: KeyboardContext,
    observers: ObserverRegistry<ContextObserver>,
    pending: FieldSet,
    /// State at the start of the outermost open transaction
    baseline: Option<KeyboardContext>,
    depth: usize,
    generation: u64,
}

macro_rules! field_setters {
    ($($(#[$meta:meta])* $setter:ident($field:ident: $ty:ty) => $variant:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $setter(&mut self, $field: $ty) -> bool {
                if self.context.$field == $field {
                    return false;
                }
                self.context.$field = $field;
                self.record(ContextField::$variant);
                true
            }
        )*
    };
}

impl ContextStore {
    pub fn new(context: KeyboardContext) -> Self {
        Self {
            context,
            observers: ObserverRegistry::new(),
            pending: SmallVec::new(),
            baseline: None,
            depth: 0,
            generation: 0,
        }
    }

    /// Read-only view of the current state
    pub fn context(&self) -> &KeyboardContext {
        &self.context
    }

    /// Number of batches published so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Register an observer for published changes
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&ContextChanges, &KeyboardContext) + Send + 'static,
    ) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Run `update` with publishing deferred until the outermost transaction
    /// ends
    pub fn transaction<R>(&mut self, update: impl FnOnce(&mut Self) -> R) -> R {
        self.begin();
        let result = update(self);
        self.finish();
        result
    }

    /// Like [`transaction`](Self::transaction), returning the published batch.
    /// `None` when nothing changed or when nested in another transaction.
    pub fn apply(&mut self, update: impl FnOnce(&mut Self)) -> Option<ContextChanges> {
        self.begin();
        update(self);
        self.finish()
    }

    fn begin(&mut self) {
        if self.depth == 0 {
            self.baseline = Some(self.context.clone());
        }
        self.depth += 1;
    }

    fn finish(&mut self) -> Option<ContextChanges> {
        self.depth = self.depth.saturating_sub(1);
        if self.depth > 0 {
            return None;
        }
        self.commit()
    }

    fn record(&mut self, field: ContextField) {
        trace!(?field, "context field written");
        if !self.pending.contains(&field) {
            self.pending.push(field);
        }
        if self.depth == 0 {
            self.commit();
        }
    }

    fn commit(&mut self) -> Option<ContextChanges> {
        if let Some(baseline) = self.baseline.take() {
            let context = &self.context;
            self.pending.retain(|field| {
                let changed = field.differs(&baseline, context);
                if !changed {
                    trace!(?field, "field restored within transaction");
                }
                changed
            });
        }
        if self.pending.is_empty() {
            return None;
        }
        self.generation += 1;
        let changes = ContextChanges {
            fields: std::mem::take(&mut self.pending),
            generation: self.generation,
        };
        debug!(
            generation = changes.generation,
            fields = ?changes.fields(),
            "context changes committed"
        );

        let context = &self.context;
        self.observers.notify(|observer| observer(&changes, context));
        Some(changes)
    }

    field_setters! {
        set_autocapitalization_type_override(autocapitalization_type_override: Option<AutocapitalizationType>) => AutocapitalizationTypeOverride;
        set_color_scheme(color_scheme: ColorScheme) => ColorScheme;
        set_current_custom_view(current_custom_view: CustomView) => CurrentCustomView;
        set_current_selected_font_id(current_selected_font_id: u32) => CurrentSelectedFontId;
        set_device_type(device_type: DeviceType) => DeviceType;
        set_has_dictation_key(has_dictation_key: bool) => HasDictationKey;
        set_has_full_access(has_full_access: bool) => HasFullAccess;
        set_interface_orientation(interface_orientation: InterfaceOrientation) => InterfaceOrientation;
        set_is_auto_capitalization_enabled(is_auto_capitalization_enabled: bool) => IsAutoCapitalizationEnabled;
        set_is_keyboard_floating(is_keyboard_floating: bool) => IsKeyboardFloating;
        /// Set while the space bar is dragged to move the input cursor
        set_is_space_drag_gesture_active(is_space_drag_gesture_active: bool) => IsSpaceDragGestureActive;
        set_keyboard_type(keyboard_type: KeyboardType) => KeyboardType;
        set_locale_presentation_locale(locale_presentation_locale: Option<Locale>) => LocalePresentationLocale;
        set_needs_input_mode_switch_key(needs_input_mode_switch_key: bool) => NeedsInputModeSwitchKey;
        /// Proxies are compared by identity
        set_original_text_document_proxy(original_text_document_proxy: ProxyHandle) => OriginalTextDocumentProxy;
        set_prefers_autocomplete(prefers_autocomplete: bool) => PrefersAutocomplete;
        set_primary_language(primary_language: Option<String>) => PrimaryLanguage;
        set_screen_size(screen_size: Size) => ScreenSize;
        set_show_keyboard(show_keyboard: bool) => ShowKeyboard;
        set_space_long_press_behavior(space_long_press_behavior: SpaceLongPressBehavior) => SpaceLongPressBehavior;
        set_text_input_mode(text_input_mode: Option<TextInputMode>) => TextInputMode;
        /// Proxies are compared by identity
        set_text_input_proxy(text_input_proxy: Option<ProxyHandle>) => TextInputProxy;
        set_trait_collection(trait_collection: TraitCollection) => TraitCollection;
    }

    /// Pick the theme used while the light scheme is active
    pub fn set_selected_light_theme(&mut self, theme: Option<Theme>) -> bool {
        if self.context.selected_light_theme == theme {
            return false;
        }
        debug!(theme = theme.map(|theme| theme.name), "light theme selected");
        self.context.selected_light_theme = theme;
        self.record(ContextField::SelectedLightTheme);
        true
    }

    /// Pick the theme used while the dark scheme is active
    pub fn set_selected_dark_theme(&mut self, theme: Option<Theme>) -> bool {
        if self.context.selected_dark_theme == theme {
            return false;
        }
        debug!(theme = theme.map(|theme| theme.name), "dark theme selected");
        self.context.selected_dark_theme = theme;
        self.record(ContextField::SelectedDarkTheme);
        true
    }

    /// Switch the active locale. It does not have to be one of `locales`.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if self.context.locale == locale {
            return false;
        }
        debug!(from = %self.context.locale, to = %locale, "locale changed");
        self.context.locale = locale;
        self.record(ContextField::Locale);
        true
    }

    /// Replace the locale rotation. An empty list is rejected.
    pub fn set_locales(&mut self, locales: Vec<Locale>) -> bool {
        if locales.is_empty() {
            warn!("ignoring empty locale list");
            return false;
        }
        if self.context.locales == locales {
            return false;
        }
        self.context.locales = locales;
        self.record(ContextField::Locales);
        true
    }

    /// Advance to the locale after the current one in `locales`, wrapping to
    /// the first. A locale missing from the list also moves to the first.
    pub fn select_next_locale(&mut self) -> bool {
        let locales = &self.context.locales;
        let Some(first) = locales.first() else {
            warn!("no locales to select from");
            return false;
        };
        let next = locales
            .iter()
            .position(|locale| *locale == self.context.locale)
            .and_then(|position| locales.get(position + 1))
            .unwrap_or(first)
            .clone();
        self.set_locale(next)
    }

    pub fn has_keyboard_locale(&self, locale: &Locale) -> bool {
        self.context.has_keyboard_locale(locale)
    }

    pub fn has_multiple_locales(&self) -> bool {
        self.context.has_multiple_locales()
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new(KeyboardContext::default())
    }
}

impl std::fmt::Debug for ContextStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextStore")
            .field("context", &self.context)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn locales(ids: &[&str]) -> Vec<Locale> {
        ids.iter().map(|id| Locale::parse(id).unwrap()).collect()
    }

    fn recorded(store: &mut ContextStore) -> Arc<Mutex<Vec<ContextChanges>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        store.subscribe(move |changes, _| sink.lock().unwrap().push(changes.clone()));
        log
    }

    #[test]
    fn test_equal_write_is_not_published() {
        let mut store = ContextStore::default();
        let log = recorded(&mut store);

        assert!(!store.set_has_full_access(false));
        assert!(store.set_has_full_access(true));
        assert!(!store.set_has_full_access(true));

        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_transaction_publishes_once() {
        let mut store = ContextStore::default();
        let log = recorded(&mut store);

        store.transaction(|store| {
            store.set_device_type(DeviceType::Pad);
            store.transaction(|store| store.set_show_keyboard(false));
            store.set_device_type(DeviceType::Phone);
            store.set_device_type(DeviceType::Pad);
        });

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(
            log[0].fields(),
            &[ContextField::DeviceType, ContextField::ShowKeyboard]
        );
        assert_eq!(log[0].generation(), 1);
    }

    #[test]
    fn test_empty_transaction_keeps_generation() {
        let mut store = ContextStore::default();
        assert_eq!(store.apply(|store| {
            store.set_show_keyboard(true);
        }), None);
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_restored_field_is_not_published() {
        let mut store = ContextStore::default();
        let log = recorded(&mut store);

        let changes = store.apply(|store| {
            store.set_has_full_access(true);
            store.set_show_keyboard(false);
            store.set_has_full_access(false);
        });

        assert_eq!(
            changes.map(|changes| changes.fields().to_vec()),
            Some(vec![ContextField::ShowKeyboard])
        );
        assert_eq!(log.lock().unwrap().len(), 1);

        assert_eq!(
            store.apply(|store| {
                store.set_locale(Locale::parse("fr").unwrap());
                store.transaction(|store| store.set_locale(Locale::default()));
            }),
            None
        );
        assert_eq!(store.generation(), 1);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_field_differs_by_proxy_identity() {
        let before = KeyboardContext::default();
        let mut after = before.clone();
        assert!(!ContextField::OriginalTextDocumentProxy.differs(&before, &after));

        after.original_text_document_proxy =
            ProxyHandle::new(crate::proxy::StaticProxy::default());
        assert!(ContextField::OriginalTextDocumentProxy.differs(&before, &after));
        assert!(!ContextField::Locale.differs(&before, &after));
    }

    #[test]
    fn test_select_next_locale_rotates() {
        let mut store = ContextStore::default();
        store.set_locales(locales(&["en", "fr", "de"]));

        store.set_locale(Locale::parse("fr").unwrap());
        store.select_next_locale();
        assert_eq!(store.context().locale.identifier(), "de");

        store.select_next_locale();
        assert_eq!(store.context().locale.identifier(), "en");

        store.set_locale(Locale::parse("sv").unwrap());
        store.select_next_locale();
        assert_eq!(store.context().locale.identifier(), "en");
    }

    #[test]
    fn test_empty_locales_rejected() {
        let mut store = ContextStore::default();
        let before = store.context().locales.clone();
        assert!(!store.set_locales(Vec::new()));
        assert_eq!(store.context().locales, before);
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_select_next_locale_with_empty_list_is_noop() {
        let mut store = ContextStore::new(KeyboardContext {
            locales: Vec::new(),
            ..Default::default()
        });
        let locale = store.context().locale.clone();
        assert!(!store.select_next_locale());
        assert_eq!(store.context().locale, locale);
    }

    #[test]
    fn test_proxy_setter_uses_identity() {
        let mut store = ContextStore::default();
        let placeholder = ProxyHandle::placeholder();
        assert!(!store.set_original_text_document_proxy(placeholder));

        let other = ProxyHandle::new(crate::proxy::StaticProxy::default());
        assert!(store.set_original_text_document_proxy(other.clone()));
        assert!(!store.set_original_text_document_proxy(other));
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = ContextStore::default();
        let count = Arc::new(Mutex::new(0));
        let counter = count.clone();
        let id = store.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        store.set_show_keyboard(false);
        assert!(store.unsubscribe(id));
        store.set_show_keyboard(true);

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(store.generation(), 2);
    }
}
