//! Kestrel Theme System
//!
//! Named keyboard palettes plus the standard platform tokens used when no
//! palette is selected.
//!
//! # Overview
//!
//! - **Catalog**: a fixed list of immutable [`Theme`] palettes, looked up by
//!   name with [`Theme::named`] or enumerated with [`Theme::all`]
//! - **Color schemes**: [`ColorScheme`] selects which of the user's light or
//!   dark picks applies
//! - **Standard tokens**: [`StandardColors`], [`ShadowTokens`] and
//!   [`OpacityTokens`] describe the native keyboard look
//!
//! # Quick Start
//!
//! ```rust
//! use kestrel_theme::{catalog, ColorScheme, StandardColors, Theme};
//!
//! let theme = Theme::named("ocean-blue").expect("theme is in the catalog");
//! assert_eq!(theme, &catalog::OCEAN_BLUE);
//!
//! let standard = StandardColors::for_scheme(ColorScheme::Dark);
//! assert_ne!(standard.button_background, theme.primary_background_color);
//! ```
//!
//! Themes never change after process start. Selecting one is an assignment
//! into the keyboard context, not a mutation of the catalog.

pub mod catalog;
pub mod error;
pub mod scheme;
pub mod theme;
pub mod tokens;

pub use error::ThemeError;
pub use scheme::ColorScheme;
pub use theme::Theme;
pub use tokens::*;
