//! Deferred loading for `img[data-src]`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::ui::dom;

pub const SOURCE_ATTRIBUTE: &str = "data-src";

pub struct LazyImages {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl LazyImages {
    /// Observe every image with a deferred source. Returns `None` when there
    /// is nothing to load.
    pub fn install() -> Result<Option<Self>, JsValue> {
        let images = dom::query_all("img[data-src]")?;
        if images.is_empty() {
            return Ok(None);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let (Some(image), Some(source)) = (
                        target.dyn_ref::<HtmlImageElement>(),
                        target.get_attribute(SOURCE_ATTRIBUTE),
                    ) else {
                        continue;
                    };
                    image.set_src(&source);
                    if let Err(e) = target.remove_attribute(SOURCE_ATTRIBUTE) {
                        leptos::logging::warn!("could not clear {SOURCE_ATTRIBUTE}: {e:?}");
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for image in &images {
            observer.observe(image);
        }
        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
