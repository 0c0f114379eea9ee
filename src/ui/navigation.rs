//! Fixed navigation bar with the mobile menu

use leptos::prelude::*;

use crate::core::navigation::{NavController, NavEvent};
use crate::ui::config::use_page_config;

/// In-page sections linked from the menu
const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#features", "Features"),
    ("#portfolio", "Work"),
    ("#testimonials", "Clients"),
    ("#contact", "Contact"),
];

/// Feed an event to the controller, notifying subscribers only on a visible change
fn dispatch(nav: RwSignal<NavController>, event: NavEvent) {
    nav.maybe_update(|nav| {
        let was_scrolled = nav.is_scrolled();
        let change = nav.handle(event);
        change.is_some() || was_scrolled != nav.is_scrolled()
    });
}

/// Navigation bar component with the mobile menu toggle
#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_page_config();
    let nav = RwSignal::new(NavController::new(
        config.scroll_threshold,
        config.mobile_breakpoint,
    ));
    let menu_ref = NodeRef::<leptos::html::Ul>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::ui::dom::Listener;

        match listeners::install(nav, menu_ref, toggle_ref) {
            Ok(installed) => {
                let installed = StoredValue::new_local(installed);
                on_cleanup(move || {
                    installed.update_value(|listeners: &mut Vec<Listener>| listeners.clear());
                    if let Some(body) = document().body() {
                        if let Err(e) = body.style().remove_property("overflow") {
                            leptos::logging::warn!("could not release scroll lock: {e:?}");
                        }
                    }
                });
            }
            Err(e) => leptos::logging::warn!("navigation listeners unavailable: {e:?}"),
        }

        // Scroll lock follows the menu state
        Effect::new(move |_| {
            let overflow = nav.with(NavController::body_overflow);
            if let Some(body) = document().body() {
                if let Err(e) = body.style().set_property("overflow", overflow) {
                    leptos::logging::warn!("could not update scroll lock: {e:?}");
                }
            }
        });
    }

    let on_link_click = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        dispatch(
            nav,
            NavEvent::LinkClicked {
                viewport_width: crate::ui::dom::viewport_width(),
            },
        );
    };

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || nav.with(NavController::is_scrolled)>
            <div class="nav-container">
                <a href="#home" class="nav-logo">"Pollen"</a>

                <button
                    id="navToggle"
                    class="nav-toggle"
                    class:active=move || nav.with(NavController::is_open)
                    node_ref=toggle_ref
                    aria-label="Toggle navigation"
                    aria-controls="navMenu"
                    aria-expanded=move || nav.with(NavController::aria_expanded)
                    on:click=move |_| dispatch(nav, NavEvent::TogglePressed)
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>

                <ul
                    id="navMenu"
                    class="nav-menu"
                    class:active=move || nav.with(NavController::is_open)
                    node_ref=menu_ref
                >
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a href=*href class="nav-link" on:click=on_link_click>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

#[cfg(feature = "hydrate")]
mod listeners {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, Node};

    use super::dispatch;
    use crate::core::navigation::{NavController, NavEvent};
    use crate::ui::dom::{self, Listener};

    /// Window scroll, outside clicks and the Escape key
    pub fn install(
        nav: RwSignal<NavController>,
        menu: NodeRef<leptos::html::Ul>,
        toggle: NodeRef<leptos::html::Button>,
    ) -> Result<Vec<Listener>, JsValue> {
        let document = dom::document()?;

        let scroll = Listener::on_window("scroll", move |_| {
            dispatch(nav, NavEvent::Scrolled(dom::scroll_y()));
        })?;

        let click = Listener::new(&document, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let in_menu = menu
                .get_untracked()
                .is_some_and(|menu| menu.contains(Some(&target)));
            let in_toggle = toggle
                .get_untracked()
                .is_some_and(|toggle| toggle.contains(Some(&target)));
            if !in_menu && !in_toggle {
                dispatch(nav, NavEvent::ClickedOutside);
            }
        })?;

        let keydown = Listener::new(&document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                dispatch(nav, NavEvent::KeyPressed(event.key()));
            }
        })?;

        // Pick up a restored scroll position
        dispatch(nav, NavEvent::Scrolled(dom::scroll_y()));

        Ok(vec![scroll, click, keydown])
    }
}
