//! Fixed header with the mobile menu toggle, section links and theme switch.

use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{OWNER, SECTIONS};
use crate::util::header_style::{header_style, scroll_y};
use crate::util::nav_scroll::scroll_to_fragment;

/// Site header.
///
/// The menu toggle and the menu share one `active` flag. Clicking a link
/// closes the menu and smooth-scrolls to the section under the header. The
/// header background follows the scroll position and theme on every scroll
/// event.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = expect_context::<ThemeContext>().theme;
    let menu_open = RwSignal::new(false);
    let scroll = RwSignal::new(scroll_y());

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| scroll.set(scroll_y()));
        on_cleanup(move || handle.remove());
    }

    let style = Memo::new(move |_| header_style(scroll.get(), theme.get()));

    let links = SECTIONS
        .iter()
        .map(|&(id, label)| {
            let href = format!("#{id}");
            let target = href.clone();
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            menu_open.set(false);
                            scroll_to_fragment(&target);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav
            class="navbar"
            style:background=move || style.get().background
            style:box-shadow=move || style.get().box_shadow
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo">{OWNER}</a>
                <ul class="nav-menu" class:active=move || menu_open.get()>
                    {links}
                </ul>
                <ThemeToggle/>
                <button
                    class="nav-toggle"
                    class:active=move || menu_open.get()
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
