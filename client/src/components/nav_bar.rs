//! Fixed top navigation with section links, mobile menu, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link highlighting follows `UiState::active_section`, which the home page
//! recomputes on scroll. Menu open/close is local chrome state in `UiState`.

use leptos::html;
use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::scroll;

/// (href, label) pairs in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

/// Smooth-scroll handler for in-page anchors.
///
/// Bare `#` and non-anchor links keep their default behavior.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    let Some(id) = scroll::anchor_id(href) else {
        return;
    };
    ev.prevent_default();
    scroll::scroll_to_anchor(id);
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toggle_ref = NodeRef::<html::Button>::new();
    let links_ref = NodeRef::<html::Ul>::new();

    let menu_open = move || ui.get().menu_open;

    #[cfg(feature = "hydrate")]
    {
        let _outside_click = window_event_listener(leptos::ev::click, move |ev| {
            if !ui.get_untracked().menu_open {
                return;
            }
            let roots = [
                toggle_ref.get_untracked().map(web_sys::Element::from),
                links_ref.get_untracked().map(web_sys::Element::from),
            ];
            if !crate::util::dom::event_within(&ev, &roots) {
                ui.update(UiState::close_menu);
            }
        });
    }

    view! {
        <nav class="nav">
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=move |ev| follow_anchor(&ev, "#home")>
                    "Portfolio"
                </a>

                <ul class="nav-links" node_ref=links_ref class:active=menu_open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            let active = move || {
                                scroll::is_active_link(href, ui.get().active_section.as_deref())
                            };
                            view! {
                                <li>
                                    <a
                                        href=href
                                        class="nav-link"
                                        class:active=active
                                        on:click=move |ev| {
                                            ui.update(UiState::close_menu);
                                            follow_anchor(&ev, href);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="nav-actions">
                    <ThemeToggle/>
                    <button
                        class="mobile-toggle"
                        node_ref=toggle_ref
                        title="Toggle menu"
                        class:active=menu_open
                        on:click=move |_| ui.update(UiState::toggle_menu)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
