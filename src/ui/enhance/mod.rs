//! Progressive enhancements installed once the landing page has hydrated.
//!
//! - Capability probe and animation path selection
//! - Hero entrance, scroll reveals and hover micro-interactions
//! - Parallax
//! - Smooth anchor scrolling
//! - Particle background
//! - Lazy images
//!
//! Every feature fails on its own: an error is logged and the feature is left
//! out, the rest of the page keeps working.

mod animator;
mod lazy_images;
mod particles;
mod smooth_scroll;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{error, log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, PageTransitionEvent};

pub use animator::{Animator, FallbackAnimator, WebAnimator};

use crate::core::capabilities::{AnimationPath, Capabilities, Environment, ParticlesDisabled};
use crate::core::config::PageConfig;
use crate::core::lifecycle::PageHide;
use crate::core::reveal::{
    DELAY_ATTRIBUTE, HeroEntrance, HoverSpec, INTENT_ATTRIBUTE, RevealDescriptor,
};
use crate::ui::dom::{self, Listener};
use lazy_images::LazyImages;
use particles::ParticleRenderer;

/// Read the environment the capability decision is made from
pub fn probe() -> Result<Environment, JsValue> {
    let window = dom::window()?;
    let animation_api = dom::document()?
        .body()
        .map(|body| dom::has_property(&body, "animate"))
        .unwrap_or(false);

    Ok(Environment {
        viewport_width: dom::viewport_width(),
        user_agent: window.navigator().user_agent().unwrap_or_default(),
        animation_api,
        graphics_api: dom::has_property(&window, "WebGL2RenderingContext"),
    })
}

struct Installed {
    animator: Box<dyn Animator>,
    particles: Option<ParticleRenderer>,
    lazy_images: Option<LazyImages>,
    listeners: Vec<Listener>,
}

impl Installed {
    fn teardown(mut self) {
        self.animator.teardown();
        if let Some(renderer) = self.particles.as_mut() {
            renderer.stop();
        }
        if let Some(images) = &self.lazy_images {
            images.disconnect();
        }
        self.listeners.clear();
    }
}

/// Handle to the installed enhancements
pub struct Enhancements {
    installed: Rc<RefCell<Option<Installed>>>,
    _pagehide: Option<Listener>,
}

impl Enhancements {
    /// Stop the render loop, disconnect observers and remove listeners.
    /// Calling it again does nothing.
    pub fn teardown(&self) {
        let installed = self.installed.borrow_mut().take();
        if let Some(installed) = installed {
            installed.teardown();
        }
    }
}

/// Install every enhancement the environment supports
pub fn install(config: &PageConfig) -> Enhancements {
    let environment = probe().unwrap_or_else(|e| {
        warn!("capability probe failed: {e:?}");
        Environment::default()
    });
    let capabilities = Capabilities::detect(&environment, config);

    let mut animator = select_animator(&capabilities, &environment, config);
    if let Err(e) = animate_page(animator.as_mut(), config, capabilities.enhanced()) {
        error!("page animations failed: {e:?}");
    }

    let mut listeners = Vec::new();
    match smooth_scroll::install(config.header_offset) {
        Ok(listener) => listeners.push(listener),
        Err(e) => warn!("smooth scrolling unavailable: {e:?}"),
    }

    let lazy_images = LazyImages::install().unwrap_or_else(|e| {
        warn!("lazy images unavailable: {e:?}");
        None
    });

    let installed = Rc::new(RefCell::new(Some(Installed {
        animator,
        particles: start_particles(capabilities.particles, config),
        lazy_images,
        listeners,
    })));

    let on_pagehide = installed.clone();
    let pagehide = Listener::on_window("pagehide", move |event| {
        let persisted = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if !PageHide::from_persisted(persisted).tears_down() {
            return;
        }
        let installed = on_pagehide.borrow_mut().take();
        if let Some(installed) = installed {
            installed.teardown();
        }
    })
    .inspect_err(|e| warn!("pagehide listener unavailable: {e:?}"))
    .ok();

    Enhancements {
        installed,
        _pagehide: pagehide,
    }
}

fn select_animator(
    capabilities: &Capabilities,
    environment: &Environment,
    config: &PageConfig,
) -> Box<dyn Animator> {
    match capabilities.animation {
        AnimationPath::Enhanced => match WebAnimator::new(config) {
            Ok(animator) => return Box::new(animator),
            Err(e) => warn!("{e}; using fallback animations"),
        },
        AnimationPath::Fallback if !environment.animation_api => {
            warn!("Web Animations API not available, using fallback animations")
        }
        AnimationPath::Fallback => log!("enhanced animations switched off"),
    }
    Box::new(FallbackAnimator::new(config))
}

fn animate_page(
    animator: &mut dyn Animator,
    config: &PageConfig,
    enhanced: bool,
) -> Result<(), JsValue> {
    if enhanced {
        for group in HeroEntrance::all(config.reveal_duration) {
            for element in dom::query_all(group.selector)? {
                let delay = element.get_attribute(DELAY_ATTRIBUTE);
                animator.entrance(&element, group.for_element(delay.as_deref()))?;
            }
        }
    }

    for element in dom::query_all(&format!("[{INTENT_ATTRIBUTE}]"))? {
        let descriptor = RevealDescriptor::from_attributes(
            element.get_attribute(INTENT_ATTRIBUTE).as_deref(),
            element.get_attribute(DELAY_ATTRIBUTE).as_deref(),
            config.reveal_duration,
        );
        animator.reveal(&element, descriptor)?;
    }

    for (selector, spec) in [
        (HoverSpec::CARD_SELECTOR, HoverSpec::card()),
        (HoverSpec::BUTTON_SELECTOR, HoverSpec::button()),
    ] {
        for element in dom::query_all(selector)? {
            animator.hover(&element, spec)?;
        }
    }

    animator.parallax()
}

fn start_particles(
    allowed: Result<(), ParticlesDisabled>,
    config: &PageConfig,
) -> Option<ParticleRenderer> {
    let container = dom::document()
        .ok()?
        .get_element_by_id(particles::CONTAINER_ID)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let result = allowed.and_then(|()| {
        ParticleRenderer::start(&container, config)
            .map_err(|e| ParticlesDisabled::RendererFailed(format!("{e:?}")))
    });

    match result {
        Ok(renderer) => Some(renderer),
        Err(reason) => {
            match &reason {
                ParticlesDisabled::RendererFailed(_) => error!("{reason}"),
                ParticlesDisabled::GraphicsUnavailable => {
                    warn!("{reason}, hiding particle background")
                }
                _ => log!("particle background disabled: {reason}"),
            }
            if let Err(e) = container.style().set_property("display", "none") {
                warn!("could not hide #{}: {e:?}", particles::CONTAINER_ID);
            }
            None
        }
    }
}
