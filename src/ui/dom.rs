//! Thin helpers over `web-sys` shared by the page enhancements

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

/// An event listener that unregisters itself when dropped
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listen on the window
    pub fn on_window<F>(event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        Self::new(&window()?, event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query(selector: &str) -> Result<Option<Element>, JsValue> {
    document()?.query_selector(selector)
}

/// Set an inline style property. Non-HTML elements are skipped.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn remove_style(element: &Element, property: &str) -> Result<(), JsValue> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().remove_property(property)?;
    }
    Ok(())
}

/// Offset of the element's top edge from the top of the document, ignoring
/// transforms, so running animations do not shift trigger positions.
pub fn document_top(element: &Element) -> f64 {
    let mut top = 0.0;
    let mut current = element.dyn_ref::<HtmlElement>().cloned();
    while let Some(html) = current {
        top += f64::from(html.offset_top());
        current = html
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    top
}

pub fn layout_height(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_height()))
        .unwrap_or_else(|| element.get_bounding_client_rect().height())
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width())
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height())
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// `name in target`
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Serialize into a plain JS object, typed as the dictionary `T`
pub fn to_js<T: JsCast>(value: &impl Serialize) -> Result<T, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?.unchecked_into())
}
