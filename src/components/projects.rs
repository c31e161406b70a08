//! Project showcase grid.

use leptos::prelude::*;

use crate::content::PROJECTS;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .map(|project| {
            let tags = project
                .tech
                .iter()
                .map(|t| view! { <span class="tech-tag">{*t}</span> })
                .collect::<Vec<_>>();
            let link = project.link.map(|href| {
                view! {
                    <a href=href class="project-link" target="_blank" rel="noopener noreferrer">
                        <i class="fas fa-external-link-alt"></i>
                        " View"
                    </a>
                }
            });
            view! {
                <article class="project-card">
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <div class="project-tech">{tags}</div>
                    {link}
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">{cards}</div>
            </div>
        </section>
    }
}
