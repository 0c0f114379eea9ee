//! Not found (404) page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - Pollen" />

        <main class="not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" attr:class="btn btn-primary">"Back to Pollen"</A>
        </main>

        <style>
            r#"
            body {
                margin: 0;
                font-family: "Inter", system-ui, -apple-system, sans-serif;
                background: #0b0b12;
                color: #f4f4f8;
            }
            .not-found {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 1rem;
                text-align: center;
                padding: 1.5rem;
            }
            .not-found h1 { font-size: 6rem; margin: 0; color: #f5b942; }
            .not-found p { color: #a1a1b5; margin: 0 0 1rem; }
            .not-found .btn {
                padding: 0.875rem 1.75rem;
                border-radius: 0.75rem;
                font-weight: 600;
                background: #f5b942;
                color: #0b0b12;
                text-decoration: none;
            }
            "#
        </style>
    }
}
