//! Keyboard and text-field vocabulary
//!
//! Enumerations shared by the context, the host snapshot and the style
//! resolver. Values that come from the host text field (`ProxyKeyboardType`,
//! `ReturnKeyType`, ...) are kept apart from the keyboard's own state
//! (`KeyboardType`, `KeyboardCase`).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Device family the keyboard is running on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    #[default]
    Phone,
    Pad,
    Mac,
    Tv,
    Watch,
}

/// Screen orientation reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    Unknown,
}

impl InterfaceOrientation {
    pub fn is_landscape(self) -> bool {
        matches!(
            self,
            InterfaceOrientation::LandscapeLeft | InterfaceOrientation::LandscapeRight
        )
    }

    pub fn is_portrait(self) -> bool {
        matches!(
            self,
            InterfaceOrientation::Portrait | InterfaceOrientation::PortraitUpsideDown
        )
    }
}

/// Letter case of an alphabetic keyboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardCase {
    Auto,
    #[default]
    Lowercased,
    Uppercased,
    CapsLocked,
}

impl KeyboardCase {
    /// Uppercased and caps locked both produce capital letters
    pub fn is_uppercased(self) -> bool {
        matches!(self, KeyboardCase::Uppercased | KeyboardCase::CapsLocked)
    }

    pub fn id(self) -> &'static str {
        match self {
            KeyboardCase::Auto => "auto",
            KeyboardCase::Lowercased => "lowercased",
            KeyboardCase::Uppercased => "uppercased",
            KeyboardCase::CapsLocked => "caps_locked",
        }
    }
}

impl FromStr for KeyboardCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(KeyboardCase::Auto),
            "lowercased" | "lower" => Ok(KeyboardCase::Lowercased),
            "uppercased" | "upper" => Ok(KeyboardCase::Uppercased),
            "caps_locked" | "capslocked" => Ok(KeyboardCase::CapsLocked),
            other => Err(format!("unknown keyboard case `{other}`")),
        }
    }
}

/// The keyboard currently presented to the user
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardType {
    Alphabetic(KeyboardCase),
    Numeric,
    Symbolic,
    Email,
    Emojis,
    Images,
    Dictation,
    Url,
    Custom(String),
}

impl Default for KeyboardType {
    fn default() -> Self {
        KeyboardType::Alphabetic(KeyboardCase::Lowercased)
    }
}

impl KeyboardType {
    pub fn is_alphabetic(&self) -> bool {
        matches!(self, KeyboardType::Alphabetic(_))
    }

    /// Only the three text keyboards show autocomplete suggestions
    pub fn prefers_autocomplete(&self) -> bool {
        matches!(
            self,
            KeyboardType::Alphabetic(_) | KeyboardType::Numeric | KeyboardType::Symbolic
        )
    }
}

impl Display for KeyboardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyboardType::Alphabetic(case) => write!(f, "alphabetic:{}", case.id()),
            KeyboardType::Numeric => f.write_str("numeric"),
            KeyboardType::Symbolic => f.write_str("symbolic"),
            KeyboardType::Email => f.write_str("email"),
            KeyboardType::Emojis => f.write_str("emojis"),
            KeyboardType::Images => f.write_str("images"),
            KeyboardType::Dictation => f.write_str("dictation"),
            KeyboardType::Url => f.write_str("url"),
            KeyboardType::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}

/// Parses the `Display` form, e.g. `numeric`, `alphabetic:uppercased` or
/// `custom:kaomoji`. A bare `alphabetic` is lowercased.
impl FromStr for KeyboardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, argument) = match s.split_once(':') {
            Some((kind, argument)) => (kind, Some(argument)),
            None => (s, None),
        };
        match (kind, argument) {
            ("alphabetic", None) => Ok(KeyboardType::default()),
            ("alphabetic", Some(case)) => Ok(KeyboardType::Alphabetic(case.parse()?)),
            ("numeric", None) => Ok(KeyboardType::Numeric),
            ("symbolic", None) => Ok(KeyboardType::Symbolic),
            ("email", None) => Ok(KeyboardType::Email),
            ("emojis", None) => Ok(KeyboardType::Emojis),
            ("images", None) => Ok(KeyboardType::Images),
            ("dictation", None) => Ok(KeyboardType::Dictation),
            ("url", None) => Ok(KeyboardType::Url),
            ("custom", Some(name)) => Ok(KeyboardType::Custom(name.to_string())),
            _ => Err(format!("unknown keyboard type `{s}`")),
        }
    }
}

/// Autocapitalization requested by the text field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutocapitalizationType {
    None,
    Words,
    Sentences,
    AllCharacters,
}

/// Light or dark keyboard requested by the text field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardAppearance {
    #[default]
    Default,
    Light,
    Dark,
}

/// Keyboard type requested by the text field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyKeyboardType {
    #[default]
    Default,
    AsciiCapable,
    NumbersAndPunctuation,
    Url,
    NumberPad,
    PhonePad,
    NamePhonePad,
    EmailAddress,
    DecimalPad,
    Twitter,
    WebSearch,
    AsciiCapableNumberPad,
}

impl ProxyKeyboardType {
    /// Free-text fields want suggestions; numeric and address fields do not
    pub fn prefers_autocomplete(self) -> bool {
        matches!(
            self,
            ProxyKeyboardType::Default
                | ProxyKeyboardType::AsciiCapable
                | ProxyKeyboardType::NamePhonePad
                | ProxyKeyboardType::Twitter
                | ProxyKeyboardType::WebSearch
        )
    }
}

/// Return key requested by the text field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKeyType {
    #[default]
    Default,
    Continue,
    Done,
    EmergencyCall,
    Go,
    Google,
    Join,
    Next,
    Route,
    Search,
    Send,
    Yahoo,
}

impl ReturnKeyType {
    /// Search and navigation fields submit immediately, so suggestions are off
    pub fn prefers_autocomplete(self) -> bool {
        !matches!(
            self,
            ReturnKeyType::Go
                | ReturnKeyType::Google
                | ReturnKeyType::Route
                | ReturnKeyType::Search
                | ReturnKeyType::Yahoo
                | ReturnKeyType::EmergencyCall
        )
    }

    pub fn id(self) -> &'static str {
        match self {
            ReturnKeyType::Default => "default",
            ReturnKeyType::Continue => "continue",
            ReturnKeyType::Done => "done",
            ReturnKeyType::EmergencyCall => "emergency_call",
            ReturnKeyType::Go => "go",
            ReturnKeyType::Google => "google",
            ReturnKeyType::Join => "join",
            ReturnKeyType::Next => "next",
            ReturnKeyType::Route => "route",
            ReturnKeyType::Search => "search",
            ReturnKeyType::Send => "send",
            ReturnKeyType::Yahoo => "yahoo",
        }
    }
}

impl FromStr for ReturnKeyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [ReturnKeyType; 12] = [
            ReturnKeyType::Default,
            ReturnKeyType::Continue,
            ReturnKeyType::Done,
            ReturnKeyType::EmergencyCall,
            ReturnKeyType::Go,
            ReturnKeyType::Google,
            ReturnKeyType::Join,
            ReturnKeyType::Next,
            ReturnKeyType::Route,
            ReturnKeyType::Search,
            ReturnKeyType::Send,
            ReturnKeyType::Yahoo,
        ];
        ALL.into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown return key type `{s}`"))
    }
}

/// What a long press on the space bar does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceLongPressBehavior {
    #[default]
    MoveInputCursor,
    OpenLocaleContextMenu,
}

/// App-specific panel shown in place of the keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomView {
    #[default]
    SelectFont,
    SelectSymbol,
    SelectKaomojis,
    SelectOrganizer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_type_autocomplete() {
        assert!(KeyboardType::Alphabetic(KeyboardCase::Uppercased).prefers_autocomplete());
        assert!(KeyboardType::Numeric.prefers_autocomplete());
        assert!(KeyboardType::Symbolic.prefers_autocomplete());
        assert!(!KeyboardType::Emojis.prefers_autocomplete());
        assert!(!KeyboardType::Custom("kaomoji".into()).prefers_autocomplete());
    }

    #[test]
    fn test_proxy_autocomplete() {
        assert!(ProxyKeyboardType::Twitter.prefers_autocomplete());
        assert!(!ProxyKeyboardType::EmailAddress.prefers_autocomplete());
        assert!(!ReturnKeyType::Search.prefers_autocomplete());
        assert!(ReturnKeyType::Send.prefers_autocomplete());
    }

    #[test]
    fn test_keyboard_type_round_trips_display() {
        for keyboard_type in [
            KeyboardType::Alphabetic(KeyboardCase::CapsLocked),
            KeyboardType::Numeric,
            KeyboardType::Custom("fonts".into()),
        ] {
            assert_eq!(keyboard_type.to_string().parse::<KeyboardType>(), Ok(keyboard_type));
        }
        assert_eq!("alphabetic".parse::<KeyboardType>(), Ok(KeyboardType::default()));
        assert!("qwerty".parse::<KeyboardType>().is_err());
    }

    #[test]
    fn test_orientation() {
        assert!(InterfaceOrientation::LandscapeRight.is_landscape());
        assert!(!InterfaceOrientation::Unknown.is_landscape());
        assert!(!InterfaceOrientation::Unknown.is_portrait());
    }
}
