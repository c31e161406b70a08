use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn stored_preference_wins_over_os() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn os_preference_used_when_unset() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn unknown_stored_value_counts_as_unset() {
    assert_eq!(resolve(Some("true"), true), Theme::Dark);
    assert_eq!(resolve(Some(""), false), Theme::Light);
}

#[test]
fn attribute_is_dark_or_absent() {
    assert_eq!(Theme::Dark.attribute(), Some("dark"));
    assert_eq!(Theme::Light.attribute(), None);
}

#[test]
fn checkbox_maps_to_theme() {
    assert_eq!(Theme::from_checked(true), Theme::Dark);
    assert_eq!(Theme::from_checked(false), Theme::Light);
}

// =============================================================
// ThemeService
// =============================================================

#[test]
fn service_reads_initial_theme_from_store() {
    let store = MemoryThemeStore::new(Some("dark"));
    let service = ThemeService::new(store, false);
    assert_eq!(service.get(), Theme::Dark);
}

#[test]
fn set_persists_every_time() {
    let store = MemoryThemeStore::new(None);
    let mut service = ThemeService::new(store.clone(), false);
    service.set(Theme::Light);
    assert_eq!(store.read().as_deref(), Some("light"));
    service.set(Theme::Dark);
    assert_eq!(store.read().as_deref(), Some("dark"));
}

#[test]
fn subscribe_fires_immediately_and_on_change() {
    let mut service = ThemeService::new(MemoryThemeStore::new(None), false);
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::new(Cell::new(Theme::Light));
    let (calls_cb, seen_cb) = (Rc::clone(&calls), Rc::clone(&seen));
    service.subscribe(move |theme| {
        calls_cb.set(calls_cb.get() + 1);
        seen_cb.set(theme);
    });
    assert_eq!(calls.get(), 1);
    service.set(Theme::Dark);
    assert_eq!(calls.get(), 2);
    assert_eq!(seen.get(), Theme::Dark);
}

#[test]
fn toggle_on_then_off_restores_prior_state() {
    let store = MemoryThemeStore::new(Some("light"));
    let mut service = ThemeService::new(store.clone(), true);
    let attribute = Rc::new(RefCell::new(None::<&'static str>));
    let attr_cb = Rc::clone(&attribute);
    service.subscribe(move |theme| *attr_cb.borrow_mut() = theme.attribute());

    let before = (*attribute.borrow(), store.read());

    service.set(Theme::from_checked(true));
    assert_eq!(*attribute.borrow(), Some("dark"));
    assert_eq!(store.read().as_deref(), Some("dark"));

    service.set(Theme::from_checked(false));
    assert_eq!((*attribute.borrow(), store.read()), before);
}
