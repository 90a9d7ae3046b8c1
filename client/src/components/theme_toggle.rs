//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::LocalStore;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| {
                let current = ui.get().theme;
                let next = theme::toggle(&LocalStore, current);
                ui.update(|u| u.theme = next);
            }
        >
            <i class=move || if ui.get().theme.is_dark() { "bx bx-sun" } else { "bx bx-moon" }></i>
        </button>
    }
}
