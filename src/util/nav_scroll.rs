//! In-page navigation: fragment resolution and smooth scrolling.

#[cfg(test)]
#[path = "nav_scroll_test.rs"]
mod nav_scroll_test;

use crate::config::HEADER_OFFSET_PX;

/// Element id named by a `#fragment` href. Non-fragment hrefs and a bare `#`
/// resolve to nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a target at `offset_top` just below the header.
pub fn scroll_top_for(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET_PX
}

/// Smooth-scroll to the element referenced by `href`. Missing targets are
/// skipped silently.
pub fn scroll_to_fragment(href: &str) {
    let Some(id) = fragment_id(href) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window
            .document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_top_for(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
