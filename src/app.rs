//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::contact_form::ContactForm;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::components::toaster::{Notifier, Toaster};
use crate::config::SiteConfig;
use crate::content::{OWNER, TAGLINE};
use crate::state::theme::{Theme, ThemeService};
use crate::util::dark_mode::{self, LocalStorageThemeStore};

/// Theme preference as seen by components.
///
/// `theme` mirrors the service for reactive reads; writes go through
/// [`ThemeContext::set`] so they are persisted and broadcast.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    service: StoredValue<ThemeService, LocalStorage>,
}

impl ThemeContext {
    /// Wrap `service`, applying its theme to the document now and on every change.
    pub fn new(mut service: ThemeService) -> Self {
        let (theme, set_theme) = signal(service.get());
        service.subscribe(dark_mode::apply);
        service.subscribe(move |t| set_theme.set(t));
        Self { theme, service: StoredValue::new_local(service) }
    }

    pub fn get(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn set(&self, theme: Theme) {
        self.service.update_value(|s| s.set(theme));
    }
}

/// Root application component.
///
/// Provides configuration, theme and notifier contexts, renders every page
/// section, and starts the reveal observer once the sections are mounted.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let service = ThemeService::new(LocalStorageThemeStore, dark_mode::os_prefers_dark());
    provide_context(ThemeContext::new(service));
    provide_context(Notifier::new());
    provide_context(config);

    #[cfg(feature = "csr")]
    {
        // Effects run after the first render, so every revealable element exists.
        let watcher = StoredValue::new_local(None::<crate::util::reveal::RevealWatcher>);
        Effect::new(move || watcher.set_value(crate::util::reveal::RevealWatcher::install()));
    }

    view! {
        <Title text=format!("{OWNER} | Portfolio")/>
        <Meta name="description" content=TAGLINE/>

        <NavBar/>
        <main>
            <Hero/>
            <ExperienceSection/>
            <ProjectsSection/>
            <SkillsSection/>
            <ContactForm/>
        </main>
        <Footer/>
        <Toaster/>
    }
}
