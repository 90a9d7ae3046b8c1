//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::content::SiteContent;
use crate::state::ui::UiState;
use crate::util::storage::LocalStore;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, applies the saved theme once hydrated, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::bundled();
    let title = format!("{} | Portfolio", content.owner);
    let description = content.tagline.clone();
    let ui = RwSignal::new(UiState::default());

    provide_context(ui);
    provide_context(content);

    Effect::new(move || {
        let saved = theme::read_preference(&LocalStore);
        theme::apply(saved);
        ui.update(|u| u.theme = saved);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link rel="stylesheet" href="https://unpkg.com/boxicons@2.1.4/css/boxicons.min.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
