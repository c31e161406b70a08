//! Contact section: EmailJS send with a `mailto:` fallback.
//!
//! The submit button is disabled and shows a spinner while a submission is in
//! flight. Whatever the outcome, exactly one toast reports it and the button
//! comes back with its original label. Browser form validation is disabled so
//! the presence check in the fallback is the only one that runs.

use leptos::prelude::*;

use crate::components::toaster::Notifier;
use crate::config::SiteConfig;
use crate::state::contact::{ContactFields, SubmissionOutcome, SubmitState, submit};
use crate::util::mailto::open_mail_client;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifier = expect_context::<Notifier>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::default());

    let read_fields = move || ContactFields {
        name: name.get_untracked(),
        email: email.get_untracked(),
        subject: subject.get_untracked(),
        message: message.get_untracked(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(next) = state.get_untracked().begin() else {
            return;
        };
        state.set(next);

        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit(&config.email, read_fields, &config.recipient).await;
            if let SubmissionOutcome::FallbackOpened { href } = &outcome {
                open_mail_client(href);
            }
            let (text, severity) = outcome.notification();
            notifier.notify(text, severity);
            if outcome.clears_form() {
                for field in [name, email, subject, message] {
                    field.set(String::new());
                }
            }
            state.set(outcome.final_state().finish());
        });
    };

    let busy = move || state.get().is_busy();

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                    <div class="form-group">
                        <input
                            type="text"
                            id="name"
                            name="name"
                            placeholder="Your Name"
                            required=true
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Your Email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <input
                            type="text"
                            id="subject"
                            name="subject"
                            placeholder="Subject"
                            required=true
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            placeholder="Your Message"
                            required=true
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=busy>
                        <i class=move || if busy() { "fas fa-spinner fa-spin" } else { "fas fa-paper-plane" }></i>
                        {move || if busy() { " Sending..." } else { " Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
