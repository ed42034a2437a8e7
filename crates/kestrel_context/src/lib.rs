//! Kestrel Keyboard Context
//!
//! The live state of a keyboard and the machinery that keeps it in step with
//! the host application.
//!
//! - [`KeyboardContext`]: plain state struct (locale, keyboard type, themes,
//!   host traits, ...)
//! - [`ContextStore`]: the single writer. Setters only write values that
//!   differ and publish [`ContextChanges`] to observers
//! - [`ContextSynchronizer`]: reconciles the store against [`HostSnapshot`]s,
//!   either directly or from requests posted through a [`SyncHandle`]
//!
//! # Example
//!
//! ```rust
//! use kestrel_context::{ContextStore, ContextSynchronizer, HostSnapshot, InterfaceOrientation};
//! use kestrel_core::Size;
//!
//! let mut store = ContextStore::default();
//! let mut synchronizer = ContextSynchronizer::new();
//!
//! let handle = synchronizer.handle();
//! std::thread::spawn(move || {
//!     let snapshot = HostSnapshot {
//!         orientation: InterfaceOrientation::LandscapeLeft,
//!         screen_size: Size::new(844.0, 390.0),
//!         ..Default::default()
//!     };
//!     handle.request_sync(snapshot).unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! let changes = synchronizer.drain(&mut store).expect("orientation changed");
//! assert_eq!(changes.generation(), 1);
//! assert!(store.context().interface_orientation.is_landscape());
//! ```

pub mod context;
pub mod error;
pub mod host;
pub mod keyboard;
pub mod locale;
pub mod proxy;
pub mod store;
pub mod sync;

pub use context::KeyboardContext;
pub use error::{ContextError, Result};
pub use host::{HostSnapshot, InputController, TextInputMode, TraitCollection, UserInterfaceStyle};
pub use keyboard::{
    AutocapitalizationType, CustomView, DeviceType, InterfaceOrientation, KeyboardAppearance,
    KeyboardCase, KeyboardType, ProxyKeyboardType, ReturnKeyType, SpaceLongPressBehavior,
};
pub use locale::Locale;
pub use proxy::{ProxyHandle, StaticProxy, TextDocumentProxy};
pub use store::{ContextChanges, ContextField, ContextStore};
pub use sync::{ContextSynchronizer, SyncHandle, SyncRequest};
