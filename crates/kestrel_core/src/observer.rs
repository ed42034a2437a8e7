//! Observer registry
//!
//! Callbacks are registered against a stable [`ObserverId`] and invoked in
//! registration order when the owner publishes. Removing an observer never
//! invalidates the ids of the others.
//!
//! The registry is generic over the (unsized) callback type so owners can
//! pass borrowed state to observers without cloning it:
//!
//! ```rust
//! use kestrel_core::ObserverRegistry;
//!
//! type Listener = dyn FnMut(&str, usize) + Send;
//!
//! let mut registry: ObserverRegistry<Listener> = ObserverRegistry::new();
//! registry.subscribe(Box::new(|name: &str, len: usize| assert_eq!(name.len(), len)));
//!
//! let name = String::from("kestrel");
//! registry.notify(|listener| listener(&name, name.len()));
//! ```

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for a registered observer
    pub struct ObserverId;
}

/// Dispatches notifications to registered observers
pub struct ObserverRegistry<F: ?Sized> {
    observers: SlotMap<ObserverId, Box<F>>,
    order: Vec<ObserverId>,
}

impl<F: ?Sized> ObserverRegistry<F> {
    pub fn new() -> Self {
        Self {
            observers: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register an observer
    pub fn subscribe(&mut self, observer: Box<F>) -> ObserverId {
        let id = self.observers.insert(observer);
        self.order.push(id);
        tracing::trace!(?id, "observer subscribed");
        id
    }

    /// Remove an observer. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        if self.observers.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        tracing::trace!(?id, "observer unsubscribed");
        true
    }

    /// Invoke `call` once per observer, in registration order
    pub fn notify(&mut self, mut call: impl FnMut(&mut F)) {
        for id in &self.order {
            if let Some(observer) = self.observers.get_mut(*id) {
                call(observer.as_mut());
            }
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<F: ?Sized> Default for ObserverRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> std::fmt::Debug for ObserverRegistry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Listener = dyn FnMut(u32) + Send;

    #[test]
    fn test_notify_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry: ObserverRegistry<Listener> = ObserverRegistry::new();

        let first = log.clone();
        registry.subscribe(Box::new(move |value| first.lock().unwrap().push(("first", value))));
        let second = log.clone();
        registry.subscribe(Box::new(move |value| second.lock().unwrap().push(("second", value))));

        registry.notify(|listener| listener(7));
        assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut registry: ObserverRegistry<Listener> = ObserverRegistry::new();

        let counter = count.clone();
        let id = registry.subscribe(Box::new(move |_| *counter.lock().unwrap() += 1));
        registry.notify(|listener| listener(1));
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.notify(|listener| listener(2));

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(registry.is_empty());
    }
}
