//! Keyboard actions
//!
//! A [`KeyboardAction`] is the semantic role of a key. Styling only cares
//! about which [`ActionCategory`] an action falls in, plus the label or
//! symbol it shows.

use kestrel_context::{KeyboardCase, KeyboardContext, KeyboardType, ReturnKeyType};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Emoji keyboard section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiCategory {
    Frequent,
    Smileys,
    Animals,
    Foods,
    Activities,
    Travels,
    Objects,
    Symbols,
    Flags,
}

impl EmojiCategory {
    pub const ALL: [EmojiCategory; 9] = [
        EmojiCategory::Frequent,
        EmojiCategory::Smileys,
        EmojiCategory::Animals,
        EmojiCategory::Foods,
        EmojiCategory::Activities,
        EmojiCategory::Travels,
        EmojiCategory::Objects,
        EmojiCategory::Symbols,
        EmojiCategory::Flags,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EmojiCategory::Frequent => "frequent",
            EmojiCategory::Smileys => "smileys",
            EmojiCategory::Animals => "animals",
            EmojiCategory::Foods => "foods",
            EmojiCategory::Activities => "activities",
            EmojiCategory::Travels => "travels",
            EmojiCategory::Objects => "objects",
            EmojiCategory::Symbols => "symbols",
            EmojiCategory::Flags => "flags",
        }
    }

    /// Emoji shown on the category tab
    pub fn display_emoji(self) -> &'static str {
        match self {
            EmojiCategory::Frequent => "🕓",
            EmojiCategory::Smileys => "😀",
            EmojiCategory::Animals => "🐻",
            EmojiCategory::Foods => "🍔",
            EmojiCategory::Activities => "⚽️",
            EmojiCategory::Travels => "🚗",
            EmojiCategory::Objects => "💡",
            EmojiCategory::Symbols => "💱",
            EmojiCategory::Flags => "🏳️",
        }
    }
}

/// The semantic role of a key
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardAction {
    Backspace,
    CapsLock,
    Character(String),
    /// Invisible padding at the row edges that types its character
    CharacterMargin(String),
    Command,
    Control,
    Custom(String),
    Dictation,
    DismissKeyboard,
    Emoji(String),
    EmojiCategory(EmojiCategory),
    Escape,
    Function,
    KeyboardType(KeyboardType),
    MoveCursorBackward,
    MoveCursorForward,
    NewLine,
    NextKeyboard,
    NextLocale,
    None,
    Option,
    Primary(ReturnKeyType),
    Settings,
    Shift(KeyboardCase),
    Space,
    Tab,
}

/// How an action is colored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    UppercasedShift,
    System,
    Primary,
    Other,
}

impl KeyboardAction {
    pub fn category(&self) -> ActionCategory {
        if self.is_uppercased_shift_action() {
            ActionCategory::UppercasedShift
        } else if self.is_system_action() {
            ActionCategory::System
        } else if self.is_primary_action() {
            ActionCategory::Primary
        } else {
            ActionCategory::Other
        }
    }

    pub fn is_uppercased_shift_action(&self) -> bool {
        matches!(self, KeyboardAction::Shift(case) if case.is_uppercased())
    }

    pub fn is_system_action(&self) -> bool {
        matches!(
            self,
            KeyboardAction::Backspace
                | KeyboardAction::CapsLock
                | KeyboardAction::Command
                | KeyboardAction::Control
                | KeyboardAction::Dictation
                | KeyboardAction::DismissKeyboard
                | KeyboardAction::Escape
                | KeyboardAction::Function
                | KeyboardAction::KeyboardType(_)
                | KeyboardAction::MoveCursorBackward
                | KeyboardAction::MoveCursorForward
                | KeyboardAction::NewLine
                | KeyboardAction::NextKeyboard
                | KeyboardAction::NextLocale
                | KeyboardAction::Option
                | KeyboardAction::Settings
                | KeyboardAction::Shift(_)
                | KeyboardAction::Tab
        )
    }

    pub fn is_primary_action(&self) -> bool {
        matches!(self, KeyboardAction::Primary(_))
    }

    /// Actions that type something
    pub fn is_input_action(&self) -> bool {
        matches!(
            self,
            KeyboardAction::Character(_)
                | KeyboardAction::CharacterMargin(_)
                | KeyboardAction::Emoji(_)
        )
    }

    pub fn is_alphabetic_keyboard_type_action(&self) -> bool {
        matches!(self, KeyboardAction::KeyboardType(kind) if kind.is_alphabetic())
    }

    pub fn is_keyboard_type_action(&self, keyboard_type: &KeyboardType) -> bool {
        matches!(self, KeyboardAction::KeyboardType(kind) if kind == keyboard_type)
    }

    /// Label shown on the key, if it shows text
    pub fn button_text(&self, context: &KeyboardContext) -> Option<String> {
        match self {
            KeyboardAction::Character(text) | KeyboardAction::Emoji(text) => Some(text.clone()),
            KeyboardAction::EmojiCategory(category) => Some(category.display_emoji().to_string()),
            KeyboardAction::Escape => Some("esc".to_string()),
            KeyboardAction::Function => Some("fn".to_string()),
            KeyboardAction::KeyboardType(kind) => keyboard_type_text(kind).map(str::to_string),
            KeyboardAction::NextLocale => Some(context.locale.language_code().to_uppercase()),
            KeyboardAction::Primary(return_key) => Some(return_key_text(*return_key).to_string()),
            KeyboardAction::Space => Some("space".to_string()),
            _ => None,
        }
    }

    /// Symbol name of the key's image, if it shows one
    pub fn button_image(&self) -> Option<&'static str> {
        match self {
            KeyboardAction::Backspace => Some("delete.left"),
            KeyboardAction::CapsLock => Some("capslock.fill"),
            KeyboardAction::Command => Some("command"),
            KeyboardAction::Control => Some("control"),
            KeyboardAction::Dictation => Some("mic"),
            KeyboardAction::DismissKeyboard => Some("keyboard.chevron.compact.down"),
            KeyboardAction::KeyboardType(kind) => keyboard_type_image(kind),
            KeyboardAction::MoveCursorBackward => Some("arrow.left"),
            KeyboardAction::MoveCursorForward => Some("arrow.right"),
            KeyboardAction::NewLine => Some("arrow.turn.down.left"),
            KeyboardAction::NextKeyboard => Some("globe"),
            KeyboardAction::Option => Some("option"),
            KeyboardAction::Settings => Some("gearshape"),
            KeyboardAction::Shift(case) => Some(match case {
                KeyboardCase::Auto | KeyboardCase::Lowercased => "shift",
                KeyboardCase::Uppercased => "shift.fill",
                KeyboardCase::CapsLocked => "capslock.fill",
            }),
            KeyboardAction::Tab => Some("arrow.right.to.line"),
            _ => None,
        }
    }
}

fn keyboard_type_text(keyboard_type: &KeyboardType) -> Option<&'static str> {
    match keyboard_type {
        KeyboardType::Alphabetic(_) => Some("ABC"),
        KeyboardType::Numeric => Some("123"),
        KeyboardType::Symbolic => Some("#+="),
        _ => None,
    }
}

fn keyboard_type_image(keyboard_type: &KeyboardType) -> Option<&'static str> {
    match keyboard_type {
        KeyboardType::Email => Some("at"),
        KeyboardType::Emojis => Some("face.smiling"),
        KeyboardType::Images => Some("photo"),
        KeyboardType::Dictation => Some("mic"),
        KeyboardType::Url => Some("link"),
        _ => None,
    }
}

fn return_key_text(return_key: ReturnKeyType) -> &'static str {
    match return_key {
        ReturnKeyType::Default => "return",
        ReturnKeyType::Continue => "continue",
        ReturnKeyType::Done => "done",
        ReturnKeyType::EmergencyCall => "emergency",
        ReturnKeyType::Go => "go",
        ReturnKeyType::Google => "Google",
        ReturnKeyType::Join => "join",
        ReturnKeyType::Next => "next",
        ReturnKeyType::Route => "route",
        ReturnKeyType::Search => "search",
        ReturnKeyType::Send => "send",
        ReturnKeyType::Yahoo => "Yahoo",
    }
}

/// Failure to parse a [`KeyboardAction`] from its text form
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),

    #[error("action `{action}` needs an argument, e.g. `{action}:{example}`")]
    MissingArgument {
        action: &'static str,
        example: &'static str,
    },

    #[error("invalid argument for `{action}`: {reason}")]
    InvalidArgument { action: &'static str, reason: String },
}

impl Display for KeyboardAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyboardAction::Backspace => f.write_str("backspace"),
            KeyboardAction::CapsLock => f.write_str("caps_lock"),
            KeyboardAction::Character(text) => write!(f, "character:{text}"),
            KeyboardAction::CharacterMargin(text) => write!(f, "character_margin:{text}"),
            KeyboardAction::Command => f.write_str("command"),
            KeyboardAction::Control => f.write_str("control"),
            KeyboardAction::Custom(name) => write!(f, "custom:{name}"),
            KeyboardAction::Dictation => f.write_str("dictation"),
            KeyboardAction::DismissKeyboard => f.write_str("dismiss_keyboard"),
            KeyboardAction::Emoji(text) => write!(f, "emoji:{text}"),
            KeyboardAction::EmojiCategory(category) => write!(f, "emoji_category:{}", category.id()),
            KeyboardAction::Escape => f.write_str("escape"),
            KeyboardAction::Function => f.write_str("function"),
            KeyboardAction::KeyboardType(kind) => write!(f, "keyboard_type:{kind}"),
            KeyboardAction::MoveCursorBackward => f.write_str("move_cursor_backward"),
            KeyboardAction::MoveCursorForward => f.write_str("move_cursor_forward"),
            KeyboardAction::NewLine => f.write_str("new_line"),
            KeyboardAction::NextKeyboard => f.write_str("next_keyboard"),
            KeyboardAction::NextLocale => f.write_str("next_locale"),
            KeyboardAction::None => f.write_str("none"),
            KeyboardAction::Option => f.write_str("option"),
            KeyboardAction::Primary(return_key) => write!(f, "primary:{}", return_key.id()),
            KeyboardAction::Settings => f.write_str("settings"),
            KeyboardAction::Shift(case) => write!(f, "shift:{}", case.id()),
            KeyboardAction::Space => f.write_str("space"),
            KeyboardAction::Tab => f.write_str("tab"),
        }
    }
}

/// Parses the `Display` form. `character:` and `character_margin:` may be
/// followed by an empty argument; `shift` and `primary` default to
/// lowercased and the default return key.
impl FromStr for KeyboardAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name, Some(argument)),
            None => (s, None),
        };

        let action = match (name, argument) {
            ("backspace", None) => KeyboardAction::Backspace,
            ("caps_lock", None) => KeyboardAction::CapsLock,
            ("character" | "char", Some(text)) => KeyboardAction::Character(text.to_string()),
            ("character_margin", Some(text)) => KeyboardAction::CharacterMargin(text.to_string()),
            ("command", None) => KeyboardAction::Command,
            ("control", None) => KeyboardAction::Control,
            ("custom", Some(name)) => KeyboardAction::Custom(name.to_string()),
            ("dictation", None) => KeyboardAction::Dictation,
            ("dismiss_keyboard", None) => KeyboardAction::DismissKeyboard,
            ("emoji", Some(text)) => KeyboardAction::Emoji(text.to_string()),
            ("emoji_category", Some(id)) => EmojiCategory::ALL
                .into_iter()
                .find(|category| category.id() == id)
                .map(KeyboardAction::EmojiCategory)
                .ok_or_else(|| ActionParseError::InvalidArgument {
                    action: "emoji_category",
                    reason: format!("unknown category `{id}`"),
                })?,
            ("escape", None) => KeyboardAction::Escape,
            ("function", None) => KeyboardAction::Function,
            ("keyboard_type", Some(kind)) => {
                KeyboardAction::KeyboardType(kind.parse().map_err(|reason| {
                    ActionParseError::InvalidArgument {
                        action: "keyboard_type",
                        reason,
                    }
                })?)
            }
            ("move_cursor_backward", None) => KeyboardAction::MoveCursorBackward,
            ("move_cursor_forward", None) => KeyboardAction::MoveCursorForward,
            ("new_line", None) => KeyboardAction::NewLine,
            ("next_keyboard", None) => KeyboardAction::NextKeyboard,
            ("next_locale", None) => KeyboardAction::NextLocale,
            ("none", None) => KeyboardAction::None,
            ("option", None) => KeyboardAction::Option,
            ("primary", None) => KeyboardAction::Primary(ReturnKeyType::Default),
            ("primary", Some(kind)) => {
                KeyboardAction::Primary(kind.parse().map_err(|reason| {
                    ActionParseError::InvalidArgument {
                        action: "primary",
                        reason,
                    }
                })?)
            }
            ("settings", None) => KeyboardAction::Settings,
            ("shift", None) => KeyboardAction::Shift(KeyboardCase::Lowercased),
            ("shift", Some(case)) => KeyboardAction::Shift(case.parse().map_err(|reason| {
                ActionParseError::InvalidArgument {
                    action: "shift",
                    reason,
                }
            })?),
            ("space", None) => KeyboardAction::Space,
            ("tab", None) => KeyboardAction::Tab,
            ("character" | "char", None) => {
                return Err(ActionParseError::MissingArgument {
                    action: "character",
                    example: "a",
                })
            }
            ("keyboard_type", None) => {
                return Err(ActionParseError::MissingArgument {
                    action: "keyboard_type",
                    example: "numeric",
                })
            }
            _ => return Err(ActionParseError::UnknownAction(s.to_string())),
        };
        Ok(action)
    }
}

/// Whether the text is lowercase and changes when uppercased, e.g. `a` but
/// not `A` or `1`
pub fn is_lowercased_with_uppercase_variant(text: &str) -> bool {
    text.to_lowercase() == text && text.to_uppercase() != text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            KeyboardAction::Shift(KeyboardCase::CapsLocked).category(),
            ActionCategory::UppercasedShift
        );
        assert_eq!(
            KeyboardAction::Shift(KeyboardCase::Lowercased).category(),
            ActionCategory::System
        );
        assert_eq!(KeyboardAction::Backspace.category(), ActionCategory::System);
        assert_eq!(
            KeyboardAction::Primary(ReturnKeyType::Go).category(),
            ActionCategory::Primary
        );
        assert_eq!(KeyboardAction::Space.category(), ActionCategory::Other);
        assert_eq!(
            KeyboardAction::Character("a".into()).category(),
            ActionCategory::Other
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("space".parse::<KeyboardAction>(), Ok(KeyboardAction::Space));
        assert_eq!("char:a".parse::<KeyboardAction>(), Ok(KeyboardAction::Character("a".into())));
        assert_eq!("character:".parse::<KeyboardAction>(), Ok(KeyboardAction::Character(String::new())));
        assert_eq!(
            "keyboard_type:numeric".parse::<KeyboardAction>(),
            Ok(KeyboardAction::KeyboardType(KeyboardType::Numeric))
        );
        assert_eq!(
            "shift:caps_locked".parse::<KeyboardAction>(),
            Ok(KeyboardAction::Shift(KeyboardCase::CapsLocked))
        );
        assert_eq!(
            "primary:search".parse::<KeyboardAction>(),
            Ok(KeyboardAction::Primary(ReturnKeyType::Search))
        );
        assert!(matches!(
            "character".parse::<KeyboardAction>(),
            Err(ActionParseError::MissingArgument { .. })
        ));
        assert!(matches!(
            "hyperspace".parse::<KeyboardAction>(),
            Err(ActionParseError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for action in [
            KeyboardAction::Shift(KeyboardCase::Uppercased),
            KeyboardAction::Primary(ReturnKeyType::EmergencyCall),
            KeyboardAction::EmojiCategory(EmojiCategory::Foods),
            KeyboardAction::KeyboardType(KeyboardType::Alphabetic(KeyboardCase::Auto)),
            KeyboardAction::CharacterMargin("q".into()),
        ] {
            assert_eq!(action.to_string().parse::<KeyboardAction>(), Ok(action));
        }
    }

    #[test]
    fn test_button_text_and_image() {
        let context = KeyboardContext::default();
        assert_eq!(KeyboardAction::NextLocale.button_text(&context).as_deref(), Some("EN"));
        assert_eq!(
            KeyboardAction::KeyboardType(KeyboardType::Symbolic).button_text(&context).as_deref(),
            Some("#+=")
        );
        assert_eq!(KeyboardAction::Backspace.button_text(&context), None);
        assert_eq!(KeyboardAction::Backspace.button_image(), Some("delete.left"));
        assert_eq!(
            KeyboardAction::Shift(KeyboardCase::Uppercased).button_image(),
            Some("shift.fill")
        );
        assert_eq!(KeyboardAction::Space.button_image(), None);
    }

    #[test]
    fn test_lowercased_with_uppercase_variant() {
        assert!(is_lowercased_with_uppercase_variant("a"));
        assert!(is_lowercased_with_uppercase_variant("é"));
        assert!(!is_lowercased_with_uppercase_variant("A"));
        assert!(!is_lowercased_with_uppercase_variant("1"));
        assert!(!is_lowercased_with_uppercase_variant(""));
    }
}
