use thiserror::Error;

/// Theme lookup errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No palette in the catalog carries this name
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    /// The color scheme name is not `light` or `dark`
    #[error("unknown color scheme `{0}` (expected `light` or `dark`)")]
    UnknownScheme(String),
}
