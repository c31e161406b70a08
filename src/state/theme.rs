//! Theme preference service.
//!
//! DESIGN
//! ======
//! The preference lives behind a [`ThemeStore`] so the browser build can use
//! `localStorage` while tests use [`MemoryThemeStore`]. Consumers read with
//! [`ThemeService::get`] and react to changes via [`ThemeService::subscribe`];
//! the document attribute is just one subscriber.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized counts as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Value of the `data-theme` attribute; light means the attribute is absent.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => None,
        }
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the active theme: stored preference, then OS preference, then light.
pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if os_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Raw string persistence for the preference.
pub trait ThemeStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
}

/// In-memory store; clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new(initial: Option<&str>) -> Self {
        Self { value: Rc::new(RefCell::new(initial.map(str::to_owned))) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

type Subscriber = Box<dyn Fn(Theme)>;

pub struct ThemeService {
    store: Box<dyn ThemeStore>,
    current: Theme,
    subscribers: Vec<Subscriber>,
}

impl ThemeService {
    /// Resolve the initial theme from `store` and the OS preference.
    pub fn new(store: impl ThemeStore + 'static, os_prefers_dark: bool) -> Self {
        let current = resolve(store.read().as_deref(), os_prefers_dark);
        Self { store: Box::new(store), current, subscribers: Vec::new() }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`. Storage is written on every call, even when
    /// the value is unchanged.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.write(theme.as_str());
        for subscriber in &self.subscribers {
            subscriber(theme);
        }
    }

    /// Register `f` and immediately call it with the current theme.
    pub fn subscribe(&mut self, f: impl Fn(Theme) + 'static) {
        f(self.current);
        self.subscribers.push(Box::new(f));
    }
}
