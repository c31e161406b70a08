use leptos::prelude::*;

use crate::content::OWNER;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{format!("\u{a9} {OWNER}. Built with Rust and Leptos.")}</p>
        </footer>
    }
}
