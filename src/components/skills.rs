//! Skill categories with level bars.
//!
//! Level bars render at zero width; the reveal observer widens each one to
//! its `data-level` once it scrolls into view.

use leptos::prelude::*;

use crate::content::SKILLS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let categories = SKILLS
        .iter()
        .map(|category| {
            let skills = category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <div class="skill-item">
                            <span class="skill-name">{skill.name}</span>
                            <div class="skill-level">
                                <div class="level-bar" data-level=skill.level.to_string()></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="skill-category">
                    <h3>
                        <i class=format!("fas {}", category.icon)></i>
                        " "
                        {category.name}
                    </h3>
                    {skills}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">{categories}</div>
            </div>
        </section>
    }
}
