use kestrel_context::{
    ContextChanges, ContextField, ContextStore, ContextSynchronizer, HostSnapshot,
    InputController, InterfaceOrientation, KeyboardType, ProxyHandle, ProxyKeyboardType,
    ReturnKeyType, StaticProxy, TraitCollection, UserInterfaceStyle,
};
use kestrel_core::Size;
use kestrel_theme::ColorScheme;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

fn observe(store: &mut ContextStore) -> Arc<Mutex<Vec<ContextChanges>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    store.subscribe(move |changes, _| sink.lock().unwrap().push(changes.clone()));
    log
}

struct FakeController {
    proxy: ProxyHandle,
    dark: bool,
}

impl InputController for FakeController {
    fn original_text_document_proxy(&self) -> ProxyHandle {
        self.proxy.clone()
    }

    fn has_full_access(&self) -> bool {
        true
    }

    fn orientation(&self) -> Option<InterfaceOrientation> {
        Some(InterfaceOrientation::Portrait)
    }

    fn screen_size(&self) -> Option<Size> {
        Some(Size::new(428.0, 926.0))
    }

    fn trait_collection(&self) -> Option<TraitCollection> {
        let style = if self.dark {
            UserInterfaceStyle::Dark
        } else {
            UserInterfaceStyle::Light
        };
        Some(TraitCollection {
            user_interface_style: style,
            ..Default::default()
        })
    }

    fn view_width(&self) -> f32 {
        428.0
    }
}

#[test]
fn second_sync_with_same_snapshot_publishes_nothing() {
    let mut store = ContextStore::default();
    let log = observe(&mut store);
    let controller = FakeController {
        proxy: ProxyHandle::new(StaticProxy::default()),
        dark: true,
    };

    let first = ContextSynchronizer::sync_with(&mut store, &controller).expect("first sync writes");
    assert!(first.contains(ContextField::OriginalTextDocumentProxy));
    assert!(first.contains(ContextField::ColorScheme));
    let generation = store.generation();

    assert_eq!(ContextSynchronizer::sync_with(&mut store, &controller), None);
    assert_eq!(store.generation(), generation);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn sync_publishes_one_batch_with_every_changed_field() {
    let mut store = ContextStore::default();
    let log = observe(&mut store);
    let controller = FakeController {
        proxy: ProxyHandle::new(StaticProxy::default()),
        dark: false,
    };

    ContextSynchronizer::sync_with(&mut store, &controller);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(
        log[0].fields(),
        &[
            ContextField::OriginalTextDocumentProxy,
            ContextField::HasFullAccess,
            ContextField::ScreenSize,
            ContextField::TraitCollection,
        ]
    );
}

#[test]
fn new_proxy_with_equal_traits_is_still_a_change() {
    let mut store = ContextStore::default();
    let first = HostSnapshot {
        original_text_document_proxy: ProxyHandle::new(StaticProxy::default()),
        ..Default::default()
    };
    ContextSynchronizer::sync(&mut store, &first);

    let second = HostSnapshot {
        original_text_document_proxy: ProxyHandle::new(StaticProxy::default()),
        ..Default::default()
    };
    let changes = ContextSynchronizer::sync(&mut store, &second).expect("proxy replaced");
    assert_eq!(changes.fields(), &[ContextField::OriginalTextDocumentProxy]);
}

#[test]
fn prefers_autocomplete_combines_keyboard_and_text_field() {
    let mut store = ContextStore::default();
    let search_field = HostSnapshot {
        original_text_document_proxy: ProxyHandle::new(StaticProxy {
            return_key_type: Some(ReturnKeyType::Search),
            ..Default::default()
        }),
        ..Default::default()
    };
    ContextSynchronizer::sync(&mut store, &search_field);
    assert!(!store.context().prefers_autocomplete);

    let twitter_field = HostSnapshot {
        original_text_document_proxy: ProxyHandle::new(StaticProxy {
            keyboard_type: Some(ProxyKeyboardType::Twitter),
            ..Default::default()
        }),
        ..Default::default()
    };
    ContextSynchronizer::sync(&mut store, &twitter_field);
    assert!(store.context().prefers_autocomplete);

    store.set_keyboard_type(KeyboardType::Emojis);
    ContextSynchronizer::sync(&mut store, &twitter_field);
    assert!(!store.context().prefers_autocomplete);
}

#[test]
fn unrecognized_interface_style_maps_to_unrecognized_scheme() {
    let mut store = ContextStore::default();
    let host = HostSnapshot {
        trait_collection: TraitCollection {
            user_interface_style: UserInterfaceStyle::Unrecognized(3),
            ..Default::default()
        },
        ..Default::default()
    };
    ContextSynchronizer::sync(&mut store, &host);
    assert_eq!(store.context().color_scheme, ColorScheme::Unrecognized);
    assert_eq!(store.context().selected_theme(), None);
}

#[test]
fn drain_applies_requests_in_order_as_one_batch() {
    let mut store = ContextStore::default();
    let log = observe(&mut store);
    let mut synchronizer = ContextSynchronizer::new();
    let handle = synchronizer.handle();

    let portrait = HostSnapshot {
        screen_size: Size::new(390.0, 844.0),
        view_width: 390.0,
        ..Default::default()
    };
    let landscape = HostSnapshot {
        orientation: InterfaceOrientation::LandscapeRight,
        screen_size: Size::new(844.0, 390.0),
        view_width: 844.0,
        ..Default::default()
    };

    let poster = handle.clone();
    let first = portrait.clone();
    std::thread::spawn(move || poster.request_sync(first).unwrap())
        .join()
        .unwrap();
    handle.request_sync_after_layout(landscape).unwrap();

    let changes = synchronizer.drain(&mut store).expect("requests changed the store");
    assert_eq!(
        changes.fields(),
        &[
            ContextField::ScreenSize,
            ContextField::InterfaceOrientation,
        ]
    );
    assert_eq!(store.context().screen_size, Size::new(844.0, 390.0));
    assert_eq!(log.lock().unwrap().len(), 1);

    assert_eq!(synchronizer.drain(&mut store), None);
}

#[test]
fn drain_that_ends_where_it_started_publishes_nothing() {
    let mut store = ContextStore::default();
    let baseline = HostSnapshot {
        screen_size: Size::new(390.0, 844.0),
        view_width: 390.0,
        ..Default::default()
    };
    ContextSynchronizer::sync(&mut store, &baseline).expect("baseline sync writes");
    let log = observe(&mut store);
    let generation = store.generation();

    let mut synchronizer = ContextSynchronizer::new();
    let handle = synchronizer.handle();
    handle
        .request_sync(HostSnapshot {
            has_full_access: true,
            has_dictation_key: true,
            ..baseline.clone()
        })
        .unwrap();
    handle.request_sync(baseline).unwrap();

    assert_eq!(synchronizer.drain(&mut store), None);
    assert!(!store.context().has_full_access);
    assert!(!store.context().has_dictation_key);
    assert_eq!(store.generation(), generation);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn repeated_layout_sync_publishes_once() {
    let mut store = ContextStore::default();
    let phone = HostSnapshot {
        screen_size: Size::new(390.0, 844.0),
        view_width: 390.0,
        ..Default::default()
    };
    ContextSynchronizer::sync(&mut store, &phone);
    let log = observe(&mut store);

    let narrow = HostSnapshot {
        view_width: 180.0,
        ..phone
    };
    let changes = ContextSynchronizer::sync_after_layout(&mut store, &narrow)
        .expect("narrow view floats the keyboard");
    assert_eq!(changes.fields(), &[ContextField::IsKeyboardFloating]);
    let generation = store.generation();

    assert_eq!(ContextSynchronizer::sync_after_layout(&mut store, &narrow), None);
    assert_eq!(store.generation(), generation);
    assert_eq!(log.lock().unwrap().len(), 1);
}
