//! Keyboard locales
//!
//! Identifiers are normalized on construction so `en_us` and `en-US` name the
//! same locale:
//!
//! - `_` becomes `-` (some hosts report `en_US`)
//! - whitespace is trimmed
//! - the language subtag is lowercased, two letter regions are uppercased,
//!   four letter scripts are title cased

use crate::ContextError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A normalized BCP 47 style locale identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and normalize an identifier
    pub fn parse(identifier: &str) -> Result<Self, ContextError> {
        let normalized = normalize_locale(identifier);
        let valid = !normalized.is_empty()
            && normalized
                .split('-')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(ContextError::InvalidLocale(identifier.to_string()));
        }
        Ok(Self(normalized))
    }

    /// The full identifier, e.g. `en-US`
    pub fn identifier(&self) -> &str {
        &self.0
    }

    /// The language subtag, e.g. `en` for `en-US`
    pub fn language_code(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Whether this locale is written in the given language
    pub fn matches_language(&self, language: &str) -> bool {
        self.language_code().eq_ignore_ascii_case(language)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en-US".to_string())
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = ContextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Normalize a locale identifier without validating it
pub fn normalize_locale(s: &str) -> String {
    let cleaned = s.trim().replace('_', "-");
    cleaned
        .split('-')
        .enumerate()
        .map(|(position, part)| {
            if position == 0 {
                part.to_ascii_lowercase()
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                part.to_ascii_uppercase()
            } else if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                    }
                    None => String::new(),
                }
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_locale(" en_us "), "en-US");
        assert_eq!(normalize_locale("ZH-hant-tw"), "zh-Hant-TW");
        assert_eq!(normalize_locale("es-419"), "es-419");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Locale::parse(""),
            Err(ContextError::InvalidLocale(String::new()))
        );
        assert!(Locale::parse("en--US").is_err());
        assert!(Locale::parse("en US").is_err());
    }

    #[test]
    fn test_language_code() {
        let georgian = Locale::parse("ka_GE").unwrap();
        assert_eq!(georgian.identifier(), "ka-GE");
        assert_eq!(georgian.language_code(), "ka");
        assert!(georgian.matches_language("KA"));
        assert_eq!(Locale::default().language_code(), "en");
    }

    #[test]
    fn test_serde_normalizes() {
        let locale: Locale = serde_json::from_str("\"fr_fr\"").unwrap();
        assert_eq!(locale.identifier(), "fr-FR");
        assert!(serde_json::from_str::<Locale>("\"\"").is_err());
    }
}
