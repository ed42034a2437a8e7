//! Theme palette

use crate::catalog;
use crate::ThemeError;
use kestrel_core::Color;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A named keyboard palette
///
/// Two themes are equal when their names and all six colors are equal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub keyboard_background_color: Color,
    pub primary_background_color: Color,
    pub secondary_background_color: Color,
    pub primary_foreground_color: Color,
    pub callout_background_color: Color,
    pub callout_foreground_color: Color,
}

impl Theme {
    /// Every palette in the catalog, in presentation order
    pub fn all() -> &'static [Theme] {
        catalog::all()
    }

    /// Look up a palette by its catalog name
    pub fn named(name: &str) -> Option<&'static Theme> {
        catalog::named(name)
    }

    /// Human readable name, e.g. `Ocean Blue` for `ocean-blue`
    pub fn display_name(&self) -> String {
        self.name
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl std::str::FromStr for &'static Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::named(s).ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}
