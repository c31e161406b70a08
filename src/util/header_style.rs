//! Fixed-header styling driven by scroll position and theme.

#[cfg(test)]
#[path = "header_style_test.rs"]
mod header_style_test;

use crate::config::SCROLL_THRESHOLD_PX;
use crate::state::theme::Theme;

const SCROLLED_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

/// Whether `scroll_y` is past the threshold. Exactly at the threshold is "top".
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

pub fn header_style(scroll_y: f64, theme: Theme) -> HeaderStyle {
    let scrolled = is_scrolled(scroll_y);
    let background = match (theme, scrolled) {
        (Theme::Light, true) => "rgba(255, 255, 255, 0.98)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.95)",
        (Theme::Dark, true) => "rgba(17, 24, 39, 0.98)",
        (Theme::Dark, false) => "rgba(17, 24, 39, 0.95)",
    };
    HeaderStyle {
        background,
        box_shadow: if scrolled { SCROLLED_SHADOW } else { "none" },
    }
}

/// Current vertical scroll offset of the window; `0.0` outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
