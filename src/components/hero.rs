//! Landing section.

use leptos::prelude::*;

use crate::content::{OWNER, TAGLINE};
use crate::util::nav_scroll::scroll_to_fragment;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">"Hi, I'm " <span class="highlight">{OWNER}</span></h1>
                <p class="hero-subtitle">{TAGLINE}</p>
                <div class="hero-buttons">
                    <a
                        href="#projects"
                        class="btn btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_fragment("#projects");
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn-secondary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_fragment("#contact");
                        }
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
