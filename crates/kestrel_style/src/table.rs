//! Color resolution table
//!
//! Key colors are looked up in [`COLOR_TABLE`], keyed by facet, whether a
//! theme is selected for the active scheme, the action category and the
//! pressed state. The first matching row wins; `None` in a key column
//! matches anything.
//!
//! Actions whose color never depends on state (`None`, character margins,
//! emoji) are answered by [`all_states_color`] before the table is consulted.

use crate::action::{ActionCategory, KeyboardAction};
use kestrel_context::KeyboardContext;
use kestrel_core::Color;
use kestrel_theme::{StandardColors, Theme};

/// Which color of a key is being resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    Background,
    Foreground,
}

/// Where a resolved color comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSource {
    ThemePrimary,
    ThemeSecondary,
    ThemeForeground,
    StandardButtonBackground,
    StandardDarkButtonBackground,
    StandardForeground,
    White,
    Blue,
    /// Pick by whether the color scheme is dark
    ByScheme {
        dark: &'static ColorSource,
        light: &'static ColorSource,
    },
    /// Whatever the same key resolves to while pressed. Followed by
    /// [`lookup`], never returned from it.
    SameAsPressed,
}

/// One row of [`COLOR_TABLE`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionRow {
    pub facet: Facet,
    pub themed: bool,
    pub category: Option<ActionCategory>,
    pub pressed: Option<bool>,
    pub source: ColorSource,
}

const fn row(
    facet: Facet,
    themed: bool,
    category: Option<ActionCategory>,
    pressed: Option<bool>,
    source: ColorSource,
) -> ResolutionRow {
    ResolutionRow {
        facet,
        themed,
        category,
        pressed,
        source,
    }
}

use ActionCategory::{Other, Primary, System, UppercasedShift};
use ColorSource::*;
use Facet::{Background, Foreground};

const IDLE: Option<bool> = Some(false);
const PRESSED: Option<bool> = Some(true);
const ANY: Option<bool> = None;

pub const COLOR_TABLE: &[ResolutionRow] = &[
    // Themed keys use the palette regardless of state
    row(Background, true, Some(UppercasedShift), ANY, ThemeSecondary),
    row(Background, true, Some(System), ANY, ThemeSecondary),
    row(Background, true, Some(Primary), ANY, ThemeSecondary),
    row(Background, true, Some(Other), ANY, ThemePrimary),
    // Native look, idle
    row(Background, false, Some(UppercasedShift), IDLE, SameAsPressed),
    row(Background, false, Some(System), IDLE, StandardDarkButtonBackground),
    row(Background, false, Some(Primary), IDLE, Blue),
    row(Background, false, Some(Other), IDLE, StandardButtonBackground),
    // Native look, pressed
    row(
        Background,
        false,
        Some(System),
        PRESSED,
        ByScheme {
            dark: &StandardButtonBackground,
            light: &White,
        },
    ),
    row(
        Background,
        false,
        Some(Primary),
        PRESSED,
        ByScheme {
            dark: &StandardDarkButtonBackground,
            light: &White,
        },
    ),
    row(Background, false, None, PRESSED, StandardDarkButtonBackground),
    // Foreground
    row(Foreground, true, None, ANY, ThemeForeground),
    row(Foreground, false, Some(Primary), IDLE, White),
    row(
        Foreground,
        false,
        Some(Primary),
        PRESSED,
        ByScheme {
            dark: &White,
            light: &StandardForeground,
        },
    ),
    row(Foreground, false, None, ANY, StandardForeground),
];

fn find_row(
    facet: Facet,
    themed: bool,
    category: ActionCategory,
    is_pressed: bool,
) -> Option<&'static ResolutionRow> {
    COLOR_TABLE.iter().find(|row| {
        row.facet == facet
            && row.themed == themed
            && row.category.map_or(true, |expected| expected == category)
            && row.pressed.map_or(true, |expected| expected == is_pressed)
    })
}

/// Source of the first row matching the key, with `SameAsPressed`
/// followed to the pressed row
pub fn lookup(
    facet: Facet,
    themed: bool,
    category: ActionCategory,
    is_pressed: bool,
) -> Option<ColorSource> {
    match find_row(facet, themed, category, is_pressed)?.source {
        SameAsPressed if !is_pressed => {
            find_row(facet, themed, category, true).map(|row| row.source)
        }
        source => Some(source),
    }
}

impl ColorSource {
    /// Turn the source into a color. Theme sources only appear on themed
    /// rows, so `theme` is always present for them.
    pub fn color(self, theme: Option<&Theme>, standard: &StandardColors, dark_scheme: bool) -> Color {
        match (self, theme) {
            (ThemePrimary, Some(theme)) => theme.primary_background_color,
            (ThemeSecondary, Some(theme)) => theme.secondary_background_color,
            (ThemeForeground, Some(theme)) => theme.primary_foreground_color,
            (ThemePrimary | ThemeSecondary | ThemeForeground, None) => {
                debug_assert!(false, "{self:?} resolved without a theme");
                standard.button_background
            }
            (source, _) => source.standard_color(theme, standard, dark_scheme),
        }
    }

    fn standard_color(self, theme: Option<&Theme>, standard: &StandardColors, dark_scheme: bool) -> Color {
        match self {
            StandardButtonBackground => standard.button_background,
            StandardDarkButtonBackground => standard.dark_button_background,
            StandardForeground => standard.button_foreground,
            White => Color::WHITE,
            Blue => Color::BLUE,
            ByScheme { dark, light } => {
                let source = if dark_scheme { *dark } else { *light };
                source.color(theme, standard, dark_scheme)
            }
            SameAsPressed | ThemePrimary | ThemeSecondary | ThemeForeground => {
                debug_assert!(false, "{self:?} has no standard color");
                standard.button_background
            }
        }
    }
}

/// Standard colors for the context's color scheme
pub fn standard_colors(context: &KeyboardContext) -> StandardColors {
    StandardColors::for_scheme(context.color_scheme)
}

/// Colors that do not depend on theme or state
pub fn all_states_color(facet: Facet, action: &KeyboardAction) -> Option<Color> {
    match (facet, action) {
        (_, KeyboardAction::None) => Some(Color::TRANSPARENT),
        (_, KeyboardAction::CharacterMargin(_)) => Some(Color::CLEAR_INTERACTABLE),
        (Facet::Background, KeyboardAction::Emoji(_)) => Some(Color::CLEAR_INTERACTABLE),
        _ => None,
    }
}

/// Resolve a key color through the table. Opacity is not applied.
pub fn resolve_color(
    facet: Facet,
    context: &KeyboardContext,
    action: &KeyboardAction,
    is_pressed: bool,
) -> Color {
    if let Some(color) = all_states_color(facet, action) {
        return color;
    }

    let theme = context.selected_theme();
    let themed = theme.is_some();
    let category = action.category();
    let standard = standard_colors(context);
    let dark_scheme = context.has_dark_color_scheme();

    match lookup(facet, themed, category, is_pressed) {
        Some(source) => source.color(theme, &standard, dark_scheme),
        None => {
            tracing::warn!(?facet, themed, ?category, is_pressed, "no color rule matched");
            match facet {
                Facet::Background => standard.button_background,
                Facet::Foreground => standard.button_foreground,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [ActionCategory; 4] = [UppercasedShift, System, Primary, Other];

    #[test]
    fn test_table_is_total() {
        for facet in [Background, Foreground] {
            for themed in [true, false] {
                for category in CATEGORIES {
                    for pressed in [true, false] {
                        assert!(
                            lookup(facet, themed, category, pressed).is_some(),
                            "{facet:?} themed={themed} {category:?} pressed={pressed}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_lookup_never_returns_deferred_source() {
        for facet in [Background, Foreground] {
            for themed in [true, false] {
                for category in CATEGORIES {
                    for pressed in [true, false] {
                        assert_ne!(lookup(facet, themed, category, pressed), Some(SameAsPressed));
                    }
                }
            }
        }
    }

    #[test]
    fn test_theme_sources_only_on_themed_rows() {
        for row in COLOR_TABLE {
            let theme_source = matches!(row.source, ThemePrimary | ThemeSecondary | ThemeForeground);
            assert!(!theme_source || row.themed, "{row:?}");
        }
    }

    #[test]
    fn test_idle_uppercased_shift_follows_pressed_row() {
        assert_eq!(
            lookup(Background, false, UppercasedShift, false),
            Some(StandardDarkButtonBackground)
        );
    }

    #[test]
    fn test_by_scheme() {
        let standard = StandardColors::light();
        let source = ByScheme {
            dark: &White,
            light: &StandardForeground,
        };
        assert_eq!(source.color(None, &standard, true), Color::WHITE);
        assert_eq!(source.color(None, &standard, false), standard.button_foreground);
    }
}
