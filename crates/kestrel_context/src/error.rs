use kestrel_theme::ThemeError;
use thiserror::Error;

/// Errors raised while building or feeding a keyboard context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("invalid locale identifier `{0}`")]
    InvalidLocale(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// The receiving synchronizer was dropped before the request was posted
    #[error("context synchronizer is no longer receiving requests")]
    SynchronizerClosed,
}

/// Result type for context operations
pub type Result<T> = std::result::Result<T, ContextError>;
