//! Startup overlay that fades out shortly after the window finishes loading.

use leptos::prelude::*;

use crate::state::ui::{LoadingPhase, UiState};

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let phase = move || ui.get().loading;

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        let arm = move || {
            Timeout::new(LoadingPhase::FADE_DELAY_MS, move || {
                ui.update(|u| u.loading = u.loading.next());
                Timeout::new(LoadingPhase::HIDE_DELAY_MS, move || {
                    ui.update(|u| u.loading = u.loading.next());
                })
                .forget();
            })
            .forget();
        };

        let ready_state = web_sys::window().and_then(|w| w.document()).map(|d| d.ready_state());
        if ready_state.as_deref().is_some_and(LoadingPhase::page_loaded) {
            arm();
        } else {
            // `load` fires once per page, so the handle is never removed.
            let _load = window_event_listener(leptos::ev::load, move |_| arm());
        }
    }

    view! {
        <div
            class="loading-screen"
            class:loaded=move || phase() != LoadingPhase::Visible
            style:display=move || if phase() == LoadingPhase::Hidden { "none" } else { "flex" }
        >
            <div class="loader"></div>
        </div>
    }
}
