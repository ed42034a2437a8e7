//! Light/dark color scheme

use crate::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Color scheme driving default colors and theme selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
    /// A platform value this crate does not know about. Resolves like an
    /// unthemed light keyboard everywhere.
    #[serde(other)]
    Unrecognized,
}

impl ColorScheme {
    /// Whether this is the dark scheme
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn id(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::Unrecognized => "unrecognized",
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(ThemeError::UnknownScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_serde_value_is_unrecognized() {
        let scheme: ColorScheme = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(scheme, ColorScheme::Unrecognized);
        assert!(!scheme.is_dark());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }
}
