//! Kestrel Style Resolver
//!
//! Computes how every key and container of the keyboard looks, from the
//! current [`KeyboardContext`](kestrel_context::KeyboardContext), the key's
//! [`KeyboardAction`] and whether it is pressed.
//!
//! Resolution is deterministic and side-effect free. Colors come from a
//! single precedence table ([`table::COLOR_TABLE`]): a theme selected for the
//! active color scheme wins, otherwise the native palette is used. The rest
//! of the facets (fonts, borders, shadows, corner radius) are answered by
//! [`StyleRules`], which can be customized by wrapping in [`LayeredRules`].
//!
//! # Example
//!
//! ```rust
//! use kestrel_context::KeyboardContext;
//! use kestrel_style::{Background, KeyboardAction, KeyboardStyleProvider};
//! use kestrel_theme::catalog;
//!
//! let provider = KeyboardStyleProvider::standard();
//! let context = KeyboardContext {
//!     selected_light_theme: Some(catalog::LEAF),
//!     ..Default::default()
//! };
//!
//! let style = provider.button_style(&context, &KeyboardAction::Backspace, false);
//! assert_eq!(style.foreground_color, catalog::LEAF.primary_foreground_color);
//! assert_eq!(
//!     provider.background_style(&context),
//!     Background::Color(catalog::LEAF.keyboard_background_color)
//! );
//! ```

pub mod action;
pub mod layout;
pub mod provider;
pub mod rules;
pub mod style;
pub mod table;

pub use action::{ActionCategory, ActionParseError, EmojiCategory, KeyboardAction};
pub use layout::LayoutConfiguration;
pub use provider::KeyboardStyleProvider;
pub use rules::{LayeredRules, StandardStyleRules, StyleInput, StyleRules};
pub use style::{
    ActionCalloutStyle, AutocompleteToolbarStyle, Background, ButtonBorder, ButtonStyle,
    CalloutStyle, FontWeight, InputCalloutStyle, KeyboardFont,
};
