//! Floating scroll-to-top button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll;

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="scroll-top"
            title="Back to top"
            class:visible=move || ui.get().scroll_top_visible
            on:click=move |_| scroll::smooth_scroll_to(0.0)
        >
            <i class="bx bx-up-arrow-alt"></i>
        </button>
    }
}
