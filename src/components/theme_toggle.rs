//! Dark mode checkbox.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::state::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <label class="theme-switch" title="Toggle dark mode">
            <input
                type="checkbox"
                id="dark-mode-toggle"
                prop:checked=move || ctx.theme.get().is_dark()
                on:change=move |ev| ctx.set(Theme::from_checked(event_target_checked(&ev)))
            />
            <span class="slider"></span>
        </label>
    }
}
