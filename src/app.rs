use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::{PAGE_CONFIG_ELEMENT_ID, PageConfig};
use crate::ui::{LandingPage, NotFoundPage, provide_page_config};

pub fn shell(options: LeptosOptions, page: PageConfig) -> impl IntoView {
    // Read back by the client before hydrating
    let embedded = page.to_embedded_json();
    provide_context(page);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=PAGE_CONFIG_ELEMENT_ID type="application/json" inner_html=embedded></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: meta context, page config and routes
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_page_config();

    view! {
        <Title text="Pollen"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
