//! Project card that reveals itself when scrolled into view.

use leptos::html;
use leptos::prelude::*;

use crate::state::content::Project;

#[cfg(feature = "hydrate")]
const REVEAL_THRESHOLD: f64 = 0.1;
#[cfg(feature = "hydrate")]
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observe `el` and call `on_visible` the first time it intersects the viewport.
///
/// Falls back to revealing immediately when `IntersectionObserver` is unavailable.
#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::Element, on_visible: impl Fn() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::{Closure, JsValue};

    let on_visible = std::rc::Rc::new(on_visible);
    let callback_visible = std::rc::Rc::clone(&on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    callback_visible();
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(el);
            // Lives as long as the page; the card is never unmounted.
            callback.forget();
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            on_visible();
        }
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let visible = RwSignal::new(false);
    let card_ref = NodeRef::<html::Article>::new();

    card_ref.on_load(move |el| {
        #[cfg(feature = "hydrate")]
        observe_once(&el, move || visible.set(true));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = el;
        }
    });

    let Project { title, description, tags, live_url } = project;

    view! {
        <article class="project-card" node_ref=card_ref class:visible=move || visible.get()>
            <h3 class="project-title">{title}</h3>
            <p class="project-description">{description}</p>
            <ul class="project-tags">
                {tags.into_iter().map(|tag| view! { <li class="project-tag">{tag}</li> }).collect_view()}
            </ul>
            {live_url
                .map(|url| {
                    view! {
                        <a class="project-link" href=url target="_blank" rel="noopener noreferrer">
                            "View live "
                            <i class="bx bx-link-external"></i>
                        </a>
                    }
                })}
        </article>
    }
}
