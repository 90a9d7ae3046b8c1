#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::storage::{MemoryStore, ThemeStore};

#[test]
fn resolve_prefers_explicit_dark() {
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    assert_eq!(Theme::resolve(Some("dark"), true), Theme::Dark);
}

#[test]
fn resolve_explicit_light_overrides_system() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
}

#[test]
fn resolve_falls_back_to_system_only_when_unset() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn resolve_treats_garbage_as_light() {
    assert_eq!(Theme::resolve(Some("purple"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some(""), true), Theme::Light);
}

#[test]
fn read_preference_defaults_to_light_off_browser() {
    let store = MemoryStore::default();
    assert_eq!(read_preference(&store), Theme::Light);
}

#[test]
fn dark_preference_survives_reload() {
    let store = MemoryStore::default();
    save_preference(&store, Theme::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(read_preference(&store), Theme::Dark);
}

#[test]
fn toggle_twice_restores_original_value() {
    let store = MemoryStore::default();
    let start = read_preference(&store);

    let once = toggle(&store, start);
    assert_eq!(once, start.toggled());
    assert_eq!(read_preference(&store), once);

    let twice = toggle(&store, once);
    assert_eq!(twice, start);
    assert_eq!(read_preference(&store), start);
}

#[test]
fn toggle_writes_plain_string_values() {
    let store = MemoryStore::default();
    toggle(&store, Theme::Light);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
    toggle(&store, Theme::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
