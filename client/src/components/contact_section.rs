//! Contact section wrapping an embedded Google Form.
//!
//! The embed is visible as rendered. When the iframe reports `load` after
//! hydration it is hidden briefly and faded back in; an `error` event swaps
//! the embed for a fallback message so visitors still see the direct links.

use leptos::prelude::*;

use crate::components::nav_bar::follow_anchor;
use crate::state::content::Contact;

#[cfg(test)]
#[path = "contact_section_test.rs"]
mod contact_section_test;

/// How long the container stays hidden after iframe `load` before fading in.
#[cfg(feature = "hydrate")]
const REVEAL_DELAY_MS: u32 = 100;

/// Lifecycle of the embedded form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmbedStatus {
    #[default]
    Loading,
    /// `load` fired; hidden until the reveal timeout.
    Revealing,
    Ready,
    Failed,
}

impl EmbedStatus {
    /// Status after the iframe reports `load`.
    #[must_use]
    pub fn after_load(self) -> Self {
        match self {
            Self::Loading => Self::Revealing,
            other => other,
        }
    }

    /// Status once the reveal delay has elapsed.
    #[must_use]
    pub fn after_reveal(self) -> Self {
        match self {
            Self::Revealing => Self::Ready,
            other => other,
        }
    }

    pub fn hides_container(self) -> bool {
        self == Self::Revealing
    }
}

/// Whether `href` opens a Google Form directly.
pub fn is_google_form_link(href: &str) -> bool {
    href.contains("forms.google.com") || href.contains("docs.google.com/forms")
}

fn on_form_link_click(href: &str) {
    if is_google_form_link(href) {
        log::info!("Google Form opened via link");
    }
}

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let status = RwSignal::new(EmbedStatus::Loading);

    let on_load = move |_| {
        log::info!("Google Form loaded successfully");
        status.update(|s| *s = s.after_load());
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(REVEAL_DELAY_MS, move || {
                status.update(|s| *s = s.after_reveal());
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            status.update(|s| *s = s.after_reveal());
        }
    };

    let on_error = move |_| {
        log::error!("Failed to load Google Form");
        status.set(EmbedStatus::Failed);
    };

    let Contact { form_embed_url, form_link_url, email } = contact;

    view! {
        <section id="contact" class="section contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <p class="section-subtitle">"Have a project in mind? Send me a message."</p>

            {form_embed_url
                .map(|src| {
                    view! {
                        <div
                            class="google-form-container"
                            class:revealing=move || status.get().hides_container()
                        >
                            <Show
                                when=move || status.get() != EmbedStatus::Failed
                                fallback=|| {
                                    view! {
                                        <div class="form-error">
                                            <i class="bx bx-error"></i>
                                            <h3>"Form Loading Error"</h3>
                                            <p>
                                                "Unable to load the contact form. Please try one of the alternative options below."
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                <iframe
                                    src=src.clone()
                                    title="Contact form"
                                    {..leptos::tachys::html::attribute::loading("lazy")}
                                    on:load=on_load
                                    on:error=on_error
                                ></iframe>
                            </Show>
                        </div>
                    }
                })}

            <div class="contact-alternatives">
                {form_link_url
                    .map(|href| {
                        let link = href.clone();
                        view! {
                            <a
                                class="btn btn--primary"
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                on:click=move |_| on_form_link_click(&link)
                            >
                                "Open the form in a new tab"
                            </a>
                        }
                    })}
                {email
                    .map(|address| {
                        let mailto = format!("mailto:{address}");
                        view! {
                            <a class="btn" href=mailto>
                                {address}
                            </a>
                        }
                    })}
                <a href="#home" class="btn btn--ghost" on:click=move |ev| follow_anchor(&ev, "#home")>
                    "Back to top"
                </a>
            </div>
        </section>
    }
}
