//! Smooth scrolling for same-page anchors

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollToOptions};

use crate::core::anchors::{AnchorTarget, scroll_destination};
use crate::ui::dom::{self, Listener};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

#[derive(Serialize)]
struct ScrollTo {
    top: f64,
    behavior: &'static str,
}

/// Intercept clicks on `#` links anywhere in the document
pub fn install(header_offset: f64) -> Result<Listener, JsValue> {
    let document = dom::document()?;
    Listener::new(&document, "click", move |event| {
        if let Err(e) = on_click(&event, header_offset) {
            leptos::logging::warn!("smooth scroll failed: {e:?}");
        }
    })
}

fn on_click(event: &web_sys::Event, header_offset: f64) -> Result<(), JsValue> {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let Some(link) = target.closest(ANCHOR_SELECTOR)? else {
        return Ok(());
    };
    let href = link.get_attribute("href").unwrap_or_default();

    match AnchorTarget::parse(&href) {
        AnchorTarget::Ignore => event.prevent_default(),
        AnchorTarget::Element(id) => {
            // Unknown ids keep the browser's default jump
            if let Some(section) = dom::document()?.get_element_by_id(&id) {
                event.prevent_default();
                let options: ScrollToOptions = dom::to_js(&ScrollTo {
                    top: scroll_destination(dom::document_top(&section), header_offset),
                    behavior: "smooth",
                })?;
                dom::window()?.scroll_to_with_scroll_to_options(&options);
            }
        }
        AnchorTarget::NotSamePage => {}
    }
    Ok(())
}
