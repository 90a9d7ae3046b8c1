//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes every section and owns the window scroll listener that keeps
//! `UiState::active_section` and `UiState::scroll_top_visible` current.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::contact_section::ContactSection;
use crate::components::loading_screen::LoadingScreen;
use crate::components::nav_bar::{NavBar, follow_anchor};
use crate::components::project_card::ProjectCard;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::site_footer::SiteFooter;
use crate::state::content::SiteContent;
use crate::state::ui::UiState;
use crate::util::scroll;

/// Recompute scroll-driven UI from the current window position.
fn sync_scroll_state(ui: RwSignal<UiState>) {
    let y = scroll::scroll_y();
    let sections = scroll::section_bounds();
    let active = scroll::active_section(y, &sections);
    let visible = scroll::scroll_top_visible(y);
    ui.maybe_update(|u| u.apply_scroll(active, visible));
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let content = expect_context::<SiteContent>();

    Effect::new(move || sync_scroll_state(ui));

    #[cfg(feature = "hydrate")]
    {
        let _scroll_listener = window_event_listener(leptos::ev::scroll, move |_| sync_scroll_state(ui));
    }

    let SiteContent { owner, tagline, about, skills, projects, services, contact, .. } = content;

    view! {
        <LoadingScreen/>
        <NavBar/>

        <main>
            <section id="home" class="section hero">
                <h1 class="hero-title">{owner.clone()}</h1>
                <p class="hero-tagline">{tagline}</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn--primary" on:click=move |ev| follow_anchor(&ev, "#projects")>
                        "View my work"
                    </a>
                    <a href="#contact" class="btn" on:click=move |ev| follow_anchor(&ev, "#contact")>
                        "Contact me"
                    </a>
                </div>
            </section>

            <section id="about" class="section about">
                <h2 class="section-title">"About Me"</h2>
                {about.into_iter().map(|p| view! { <p class="about-text">{p}</p> }).collect_view()}
            </section>

            <section id="skills" class="section skills">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {skills
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="skill-group">
                                    <h3>{group.group}</h3>
                                    <ul>
                                        {group
                                            .items
                                            .into_iter()
                                            .map(|item| view! { <li class="skill-item">{item}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="projects" class="section projects">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {projects.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </section>

            <section id="services" class="section services">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {services
                        .into_iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ContactSection contact=contact/>
        </main>

        <SiteFooter owner=owner/>
        <ScrollTopButton/>
        <ChatWidget/>
    }
}
