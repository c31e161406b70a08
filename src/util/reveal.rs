//! Viewport reveal animations for content cards and skill level bars.
//!
//! ARCHITECTURE
//! ============
//! [`reveal_plan`] decides what happens to an element once it intersects;
//! [`RevealWatcher`] owns the browser `IntersectionObserver` and the pending
//! level-bar timers. Dropping the watcher disconnects the observer and
//! cancels those timers, so nothing fires against a torn-down page.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::LEVEL_BAR_DELAY_MS;

/// Elements that start hidden and fade in when scrolled into view.
pub const REVEAL_SELECTOR: &str = ".experience-card, .project-card, .skill-category, .level-bar";

pub const LEVEL_BAR_CLASS: &str = "level-bar";

/// Fraction of the element that must be visible.
pub const THRESHOLD: f64 = 0.1;

/// Shrinks the viewport's bottom edge so elements reveal a little later.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HIDDEN_STYLE: [(&str, &str); 2] = [("opacity", "0"), ("transform", "translateY(30px)")];
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// What to do with an element that just became visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    pub styles: [(&'static str, &'static str); 2],
    /// Revealing is one-way; the element leaves the observer afterwards.
    pub stop_observing: bool,
    /// Width to apply after the delay, for level bars only.
    pub delayed_width: Option<(u32, String)>,
}

/// Width for a `data-level` value, clamped to 0–100. Unparseable levels give `None`.
pub fn level_width(data_level: Option<&str>) -> Option<String> {
    let level: f64 = data_level?.trim().parse().ok()?;
    if !level.is_finite() {
        return None;
    }
    Some(format!("{}%", level.clamp(0.0, 100.0)))
}

pub fn reveal_plan(is_level_bar: bool, data_level: Option<&str>) -> RevealPlan {
    let delayed_width = if is_level_bar {
        level_width(data_level).map(|width| (LEVEL_BAR_DELAY_MS, width))
    } else {
        None
    };
    RevealPlan { styles: REVEALED_STYLE, stop_observing: true, delayed_width }
}

#[cfg(feature = "csr")]
pub use browser::RevealWatcher;

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{HIDDEN_STYLE, LEVEL_BAR_CLASS, REVEAL_SELECTOR, ROOT_MARGIN, THRESHOLD, reveal_plan};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live reveal observer plus the timers it has scheduled.
    ///
    /// Each element is unobserved once revealed, so there is at most one
    /// pending timer per level bar.
    pub struct RevealWatcher {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
        _pending: Rc<RefCell<Vec<Timeout>>>,
    }

    impl RevealWatcher {
        /// Pre-hide every revealable element and start observing it.
        ///
        /// Returns `None` if there is no document or the observer cannot be created.
        pub fn install() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let pending: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));

            let pending_cb = Rc::clone(&pending);
            let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        reveal(&observer, &entry.target(), &pending_cb);
                    }
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));
            options.set_root_margin(ROOT_MARGIN);
            let observer =
                match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                    Ok(observer) => observer,
                    Err(e) => {
                        leptos::logging::warn!("reveal observer unavailable: {e:?}");
                        return None;
                    }
                };

            let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
            for i in 0..nodes.length() {
                let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                    continue;
                };
                set_styles(&el, &HIDDEN_STYLE);
                observer.observe(&el);
            }

            Some(Self { observer, _callback: callback, _pending: pending })
        }
    }

    impl Drop for RevealWatcher {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn reveal(observer: &IntersectionObserver, target: &Element, pending: &Rc<RefCell<Vec<Timeout>>>) {
        let Some(el) = target.dyn_ref::<HtmlElement>() else {
            return;
        };
        let plan = reveal_plan(
            el.class_list().contains(LEVEL_BAR_CLASS),
            el.get_attribute("data-level").as_deref(),
        );
        set_styles(el, &plan.styles);
        if plan.stop_observing {
            observer.unobserve(target);
        }
        if let Some((delay_ms, width)) = plan.delayed_width {
            let bar = el.clone();
            pending.borrow_mut().push(Timeout::new(delay_ms, move || {
                if bar.style().set_property("width", &width).is_err() {
                    leptos::logging::warn!("could not set level bar width");
                }
            }));
        }
    }

    fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
        let style = el.style();
        for (name, value) in styles {
            if style.set_property(name, value).is_err() {
                leptos::logging::warn!("could not set {name} on revealed element");
            }
        }
    }
}
