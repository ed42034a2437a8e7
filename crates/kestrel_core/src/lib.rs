//! Kestrel Core
//!
//! Foundational primitives shared by the Kestrel keyboard crates:
//!
//! - **Colors**: RGBA values with opacity scaling, used by themes and styles
//! - **Geometry**: screen sizes and edge insets reported by the host
//! - **Observers**: a registry of change callbacks keyed by stable ids
//!
//! # Example
//!
//! ```rust
//! use kestrel_core::{Color, ObserverRegistry};
//!
//! let mut observers: ObserverRegistry<dyn FnMut(&Color) + Send> = ObserverRegistry::new();
//! let id = observers.subscribe(Box::new(|color: &Color| {
//!     assert_eq!(color.a, 0.5);
//! }));
//!
//! let faded = Color::WHITE.with_opacity(0.5);
//! observers.notify(|observer| observer(&faded));
//! assert!(observers.unsubscribe(id));
//! ```

pub mod color;
pub mod geometry;
pub mod observer;

pub use color::Color;
pub use geometry::{EdgeInsets, Size};
pub use observer::{ObserverId, ObserverRegistry};
