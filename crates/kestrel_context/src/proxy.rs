//! Text document proxies
//!
//! A proxy is the host's handle to the text field being edited. The context
//! only reads its traits. Two handles are the same proxy when they point to
//! the same allocation; equal traits do not make two proxies equal.

use crate::keyboard::{AutocapitalizationType, KeyboardAppearance, ProxyKeyboardType, ReturnKeyType};
use serde::Deserialize;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Read-only view of the text field the keyboard is typing into
pub trait TextDocumentProxy: fmt::Debug + Send + Sync {
    fn autocapitalization_type(&self) -> Option<AutocapitalizationType> {
        None
    }

    fn keyboard_type(&self) -> Option<ProxyKeyboardType> {
        None
    }

    fn return_key_type(&self) -> Option<ReturnKeyType> {
        None
    }

    fn keyboard_appearance(&self) -> Option<KeyboardAppearance> {
        None
    }
}

/// Shared, identity-compared handle to a [`TextDocumentProxy`]
#[derive(Clone)]
pub struct ProxyHandle(Arc<dyn TextDocumentProxy>);

static PLACEHOLDER: OnceLock<ProxyHandle> = OnceLock::new();

impl ProxyHandle {
    pub fn new(proxy: impl TextDocumentProxy + 'static) -> Self {
        Self(Arc::new(proxy))
    }

    pub fn from_arc(proxy: Arc<dyn TextDocumentProxy>) -> Self {
        Self(proxy)
    }

    /// The proxy used before the host has provided one. Every call returns
    /// the same instance.
    pub fn placeholder() -> Self {
        PLACEHOLDER
            .get_or_init(|| ProxyHandle::new(StaticProxy::default()))
            .clone()
    }

    /// Identity comparison
    pub fn same(&self, other: &ProxyHandle) -> bool {
        Arc::as_ptr(&self.0) as *const () == Arc::as_ptr(&other.0) as *const ()
    }

    pub fn traits(&self) -> &dyn TextDocumentProxy {
        self.0.as_ref()
    }
}

impl PartialEq for ProxyHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for ProxyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProxyHandle")
            .field(&(Arc::as_ptr(&self.0) as *const ()))
            .finish()
    }
}

/// A proxy with fixed traits, used for configuration files and tests
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaticProxy {
    pub autocapitalization_type: Option<AutocapitalizationType>,
    pub keyboard_type: Option<ProxyKeyboardType>,
    pub return_key_type: Option<ReturnKeyType>,
    pub keyboard_appearance: Option<KeyboardAppearance>,
}

impl TextDocumentProxy for StaticProxy {
    fn autocapitalization_type(&self) -> Option<AutocapitalizationType> {
        self.autocapitalization_type
    }

    fn keyboard_type(&self) -> Option<ProxyKeyboardType> {
        self.keyboard_type
    }

    fn return_key_type(&self) -> Option<ReturnKeyType> {
        self.return_key_type
    }

    fn keyboard_appearance(&self) -> Option<KeyboardAppearance> {
        self.keyboard_appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_value() {
        let a = ProxyHandle::new(StaticProxy::default());
        let b = ProxyHandle::new(StaticProxy::default());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_placeholder_is_stable() {
        assert_eq!(ProxyHandle::placeholder(), ProxyHandle::placeholder());
    }

    #[test]
    fn test_static_traits() {
        let proxy = ProxyHandle::new(StaticProxy {
            return_key_type: Some(ReturnKeyType::Search),
            ..Default::default()
        });
        assert_eq!(proxy.traits().return_key_type(), Some(ReturnKeyType::Search));
        assert_eq!(proxy.traits().keyboard_type(), None);
    }
}
