//! Work history cards.

use leptos::prelude::*;

use crate::content::EXPERIENCE;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let cards = EXPERIENCE
        .iter()
        .map(|entry| {
            view! {
                <article class="experience-card">
                    <div class="experience-header">
                        <h3>{entry.role}</h3>
                        <span class="experience-period">{entry.period}</span>
                    </div>
                    <p class="experience-company">{entry.company}</p>
                    <ul>
                        {entry.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect::<Vec<_>>()}
                    </ul>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="experience" class="experience">
            <div class="container">
                <h2 class="section-title">"Experience"</h2>
                <div class="experience-list">{cards}</div>
            </div>
        </section>
    }
}
