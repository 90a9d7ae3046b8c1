//! Page footer with the current year.

use leptos::prelude::*;

use crate::util::dom;

#[component]
pub fn SiteFooter(owner: String) -> impl IntoView {
    let year = RwSignal::new(None::<u32>);

    // Effects only run in the browser, so SSR renders an empty year.
    Effect::new(move || year.set(dom::current_year()));

    view! {
        <footer class="footer">
            <p>
                "© "
                <span id="currentYear">{move || year.get().map(|y| y.to_string()).unwrap_or_default()}</span>
                " "
                {owner}
                ". All rights reserved."
            </p>
        </footer>
    }
}
