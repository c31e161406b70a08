//! Browser side of the theme preference.
//!
//! Reads the stored preference from `localStorage`, queries the OS color
//! scheme, and applies the `data-theme` attribute on the `<html>` element.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a missing window, blocked storage or a failed
//! write all degrade to the in-memory theme. Native builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{STORAGE_KEY, Theme, ThemeStore};

/// [`ThemeStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = STORAGE_KEY;
            None
        }
    }

    fn write(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.set_item(STORAGE_KEY, value).is_err() {
                    leptos::logging::warn!("could not persist theme preference");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}

/// Whether the OS reports `prefers-color-scheme: dark`.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Set `data-theme="dark"` on `<html>`, or remove the attribute for light.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let result = match theme.attribute() {
            Some(value) => el.set_attribute("data-theme", value),
            None => el.remove_attribute("data-theme"),
        };
        if result.is_err() {
            leptos::logging::warn!("could not apply theme attribute");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
