//! Standard design tokens
//!
//! The values a keyboard falls back to when no theme is selected:
//! - Colors of the native keyboard in light and dark appearance
//! - Button and callout shadows
//! - Button opacities

mod color;
mod opacity;
mod shadow;

pub use color::*;
pub use opacity::*;
pub use shadow::*;
