//! Host synchronization
//!
//! [`ContextSynchronizer`] reconciles the store against a [`HostSnapshot`].
//! Each fact is compared with the stored value and written only when it
//! differs, so syncing twice with the same snapshot publishes nothing the
//! second time.
//!
//! Hosts on other threads post requests through a [`SyncHandle`]. Requests
//! queue until the store owner calls [`ContextSynchronizer::drain`], which
//! applies them in arrival order as one batch.

use crate::error::{ContextError, Result};
use crate::host::{HostSnapshot, InputController};
use crate::store::{ContextChanges, ContextStore};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

/// A queued synchronization
#[derive(Clone, Debug)]
pub enum SyncRequest {
    /// Full reconciliation against the snapshot
    Sync(HostSnapshot),
    /// Floating check after the keyboard view was laid out
    AfterLayout(HostSnapshot),
}

/// Cloneable sender side of a [`ContextSynchronizer`]
#[derive(Clone, Debug)]
pub struct SyncHandle {
    sender: UnboundedSender<SyncRequest>,
}

impl SyncHandle {
    pub fn post(&self, request: SyncRequest) -> Result<()> {
        self.sender
            .send(request)
            .map_err(|_| ContextError::SynchronizerClosed)
    }

    pub fn request_sync(&self, snapshot: HostSnapshot) -> Result<()> {
        self.post(SyncRequest::Sync(snapshot))
    }

    pub fn request_sync_after_layout(&self, snapshot: HostSnapshot) -> Result<()> {
        self.post(SyncRequest::AfterLayout(snapshot))
    }
}

/// Applies host facts to a [`ContextStore`]
#[derive(Debug)]
pub struct ContextSynchronizer {
    sender: UnboundedSender<SyncRequest>,
    receiver: UnboundedReceiver<SyncRequest>,
}

impl ContextSynchronizer {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// A handle hosts can use from any thread
    pub fn handle(&self) -> SyncHandle {
        SyncHandle {
            sender: self.sender.clone(),
        }
    }

    /// Apply every pending request in arrival order, publishing once
    pub fn drain(&mut self, store: &mut ContextStore) -> Option<ContextChanges> {
        let receiver = &mut self.receiver;
        store.apply(|store| {
            let mut applied = 0usize;
            while let Ok(request) = receiver.try_recv() {
                match &request {
                    SyncRequest::Sync(snapshot) => apply_snapshot(store, snapshot),
                    SyncRequest::AfterLayout(snapshot) => apply_after_layout(store, snapshot),
                }
                applied += 1;
            }
            trace!(applied, "drained sync requests");
        })
    }

    /// Reconcile the store against a snapshot
    pub fn sync(store: &mut ContextStore, snapshot: &HostSnapshot) -> Option<ContextChanges> {
        store.apply(|store| apply_snapshot(store, snapshot))
    }

    /// Capture the controller and reconcile against it
    pub fn sync_with(
        store: &mut ContextStore,
        controller: &(impl InputController + ?Sized),
    ) -> Option<ContextChanges> {
        Self::sync(store, &HostSnapshot::capture(controller))
    }

    /// Recompute floating after layout. A rotation since the last sync
    /// triggers a full reconciliation.
    pub fn sync_after_layout(
        store: &mut ContextStore,
        snapshot: &HostSnapshot,
    ) -> Option<ContextChanges> {
        store.apply(|store| apply_after_layout(store, snapshot))
    }
}

impl Default for ContextSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_snapshot(store: &mut ContextStore, host: &HostSnapshot) {
    store.set_original_text_document_proxy(host.original_text_document_proxy.clone());
    store.set_text_input_proxy(host.text_input_proxy.clone());
    store.set_has_dictation_key(host.has_dictation_key);
    store.set_has_full_access(host.has_full_access);
    store.set_interface_orientation(host.orientation);
    store.set_needs_input_mode_switch_key(host.needs_input_mode_switch_key);

    let prefers_autocomplete =
        store.context().keyboard_type.prefers_autocomplete() && host.proxy_prefers_autocomplete();
    store.set_prefers_autocomplete(prefers_autocomplete);

    store.set_primary_language(host.primary_language.clone());
    store.set_screen_size(host.screen_size);
    store.set_text_input_mode(host.text_input_mode.clone());
    store.set_trait_collection(host.trait_collection.clone());
    store.set_color_scheme(host.trait_collection.user_interface_style.color_scheme());
}

fn apply_after_layout(store: &mut ContextStore, host: &HostSnapshot) {
    let is_floating = host.view_width < store.context().screen_size.width / 2.0;
    store.set_is_keyboard_floating(is_floating);

    if host.orientation == store.context().interface_orientation {
        return;
    }
    debug!(
        from = ?store.context().interface_orientation,
        to = ?host.orientation,
        "orientation changed during layout, syncing"
    );
    apply_snapshot(store, host);
}
