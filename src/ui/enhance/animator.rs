//! Reveal, hover and parallax animation backends.
//!
//! [`WebAnimator`] drives Web Animations from the scroll trigger engine and
//! replays reveals in both directions. [`FallbackAnimator`] uses CSS
//! transitions behind an `IntersectionObserver`, reveals once, and only moves
//! the hero background on scroll.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Animation, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::core::config::PageConfig;
use crate::core::lifecycle::ScrollBinding;
use crate::core::motion::{Ease, Fill, Keyframe, Timing};
use crate::core::parallax::{
    BACKGROUND_SELECTOR, HERO_SELECTOR, ParallaxLayer, SECTION_SELECTOR, fallback_offset,
    fallback_transform, sections_with_parallax,
};
use crate::core::reveal::{
    HoverSpec, HoverState, OneShotReveal, RevealDescriptor, RevealState, fallback_transition,
};
use crate::core::trigger::{
    ToggleAction, ToggleActions, TriggerParseError, TriggerPoint, TriggerRange, TriggerTracker,
};
use crate::ui::dom::{self, Listener};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(method, catch, js_name = animate)]
    fn animate_raw(
        this: &Element,
        keyframes: &JsValue,
        options: &JsValue,
    ) -> Result<Animation, JsValue>;
}

fn animate(
    element: &Element,
    keyframes: &[Keyframe],
    timing: &Timing,
) -> Result<Animation, JsValue> {
    let keyframes = serde_wasm_bindgen::to_value(keyframes)?;
    let options = serde_wasm_bindgen::to_value(timing)?;
    animate_raw(element, &keyframes, &options)
}

/// One implementation per animation path, picked at startup
pub trait Animator {
    /// Scroll-triggered reveal of a `data-animate` element
    fn reveal(&mut self, element: &Element, descriptor: RevealDescriptor) -> Result<(), JsValue>;

    /// Hero entrance, played right away
    fn entrance(
        &mut self,
        _element: &Element,
        _descriptor: RevealDescriptor,
    ) -> Result<(), JsValue> {
        Ok(())
    }

    /// Pointer hover scaling
    fn hover(&mut self, _element: &Element, _spec: HoverSpec) -> Result<(), JsValue> {
        Ok(())
    }

    /// Scroll-linked background and section motion
    fn parallax(&mut self) -> Result<(), JsValue>;

    /// Stop listening and release animations
    fn teardown(&mut self);
}

struct ScrollReveal {
    element: Element,
    animation: Animation,
    tracker: TriggerTracker,
    /// Delay plus duration, in milliseconds
    total: f64,
}

impl ScrollReveal {
    fn apply(&self, action: ToggleAction) -> Result<(), JsValue> {
        let animation = &self.animation;
        let current = animation.current_time().unwrap_or(0.0);
        match action {
            ToggleAction::Play => {
                if animation.playback_rate() > 0.0 && current >= self.total {
                    return Ok(());
                }
                animation.set_playback_rate(1.0);
                animation.play()?;
            }
            ToggleAction::Resume => animation.play()?,
            ToggleAction::Pause => animation.pause()?,
            ToggleAction::Reverse => {
                if current > 0.0 {
                    animation.set_playback_rate(-1.0);
                    animation.play()?;
                }
            }
            ToggleAction::Restart => {
                animation.set_playback_rate(1.0);
                animation.set_current_time(Some(0.0));
                animation.play()?;
            }
            ToggleAction::Reset => {
                animation.pause()?;
                animation.set_playback_rate(1.0);
                animation.set_current_time(Some(0.0));
            }
            ToggleAction::Complete => {
                animation.set_playback_rate(1.0);
                animation.finish()?;
            }
            ToggleAction::None => {}
        }
        Ok(())
    }
}

/// Parallax animation seeked by scroll progress
struct Scrub {
    trigger: Element,
    animation: Animation,
    layer: ParallaxLayer,
    range: TriggerRange,
}

const SCRUB_DURATION: f64 = 1000.0;

impl Scrub {
    fn seek(&self, scroll: f64) {
        self.animation
            .set_current_time(Some(self.range.progress(scroll) * SCRUB_DURATION));
    }
}

#[derive(Default)]
struct ScrollScene {
    reveals: Vec<ScrollReveal>,
    scrubs: Vec<Scrub>,
}

impl ScrollScene {
    fn update(&mut self, scroll: f64) {
        for reveal in &mut self.reveals {
            for action in reveal.tracker.update(scroll) {
                if let Err(e) = reveal.apply(action) {
                    leptos::logging::warn!("reveal action {action:?} failed: {e:?}");
                }
            }
        }
        for scrub in &self.scrubs {
            scrub.seek(scroll);
        }
    }

    fn relayout(&mut self, start: &TriggerPoint, end: &TriggerPoint) {
        let viewport = dom::viewport_height();
        for reveal in &mut self.reveals {
            reveal
                .tracker
                .set_range(element_range(&reveal.element, start, end, viewport));
        }
        for scrub in &mut self.scrubs {
            scrub.range = scrub.layer.range(
                dom::document_top(&scrub.trigger),
                dom::layout_height(&scrub.trigger),
                viewport,
            );
        }
    }
}

fn element_range(
    element: &Element,
    start: &TriggerPoint,
    end: &TriggerPoint,
    viewport: f64,
) -> TriggerRange {
    TriggerRange::resolve(
        start,
        end,
        dom::document_top(element),
        dom::layout_height(element),
        viewport,
    )
}

struct Hover {
    element: Element,
    state: HoverState,
    running: Option<Animation>,
}

impl Hover {
    /// Start from the interrupted animation's current scale
    fn animate(&mut self, keyframes: [Keyframe; 1]) -> Result<(), JsValue> {
        if let Some(previous) = self.running.take() {
            let committed = previous.commit_styles();
            previous.cancel();
            committed?;
        }
        self.running = Some(animate(&self.element, &keyframes, &self.state.spec().timing())?);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(animation) = self.running.take() {
            animation.cancel();
        }
        if let Err(e) = dom::remove_style(&self.element, "scale") {
            leptos::logging::warn!("could not reset hover scale: {e:?}");
        }
    }
}

/// Web Animations backend
pub struct WebAnimator {
    start: TriggerPoint,
    end: TriggerPoint,
    actions: ToggleActions,
    scene: Rc<RefCell<ScrollScene>>,
    entrances: Vec<Animation>,
    hovers: Vec<Rc<RefCell<Hover>>>,
    /// Per-element hover listeners
    listeners: Vec<Listener>,
    scroll_binding: ScrollBinding,
    scroll_listeners: Vec<Listener>,
}

impl WebAnimator {
    pub fn new(config: &PageConfig) -> Result<Self, TriggerParseError> {
        Ok(Self {
            start: TriggerPoint::parse(&config.reveal_start)?,
            end: TriggerPoint::parse(&config.reveal_end)?,
            actions: ToggleActions::parse(&config.reveal_toggle_actions)?,
            scene: Rc::default(),
            entrances: Vec::new(),
            hovers: Vec::new(),
            listeners: Vec::new(),
            scroll_binding: ScrollBinding::default(),
            scroll_listeners: Vec::new(),
        })
    }

    /// Register the shared window listeners on first use. Trigger ranges are
    /// measured again on resize and once the page has fully loaded.
    fn listen(&mut self) -> Result<(), JsValue> {
        if !self.scroll_binding.claim() {
            return Ok(());
        }
        match self.window_listeners() {
            Ok(listeners) => {
                self.scroll_listeners.extend(listeners);
                Ok(())
            }
            Err(e) => {
                self.scroll_binding.release();
                Err(e)
            }
        }
    }

    fn window_listeners(&self) -> Result<[Listener; 3], JsValue> {
        let scene = self.scene.clone();
        let scroll = Listener::on_window("scroll", move |_| {
            scene.borrow_mut().update(dom::scroll_y());
        })?;
        let (start, end) = (self.start, self.end);
        let resize = Listener::on_window("resize", relayout(self.scene.clone(), start, end))?;
        let load = Listener::on_window("load", relayout(self.scene.clone(), start, end))?;
        Ok([scroll, resize, load])
    }
}

fn relayout(
    scene: Rc<RefCell<ScrollScene>>,
    start: TriggerPoint,
    end: TriggerPoint,
) -> impl FnMut(web_sys::Event) + 'static {
    move |_| {
        let mut scene = scene.borrow_mut();
        scene.relayout(&start, &end);
        scene.update(dom::scroll_y());
    }
}

impl Animator for WebAnimator {
    fn reveal(&mut self, element: &Element, descriptor: RevealDescriptor) -> Result<(), JsValue> {
        let timing = descriptor.timing();
        let animation = animate(element, &descriptor.keyframes(), &timing)?;
        animation.pause()?;

        let range = element_range(element, &self.start, &self.end, dom::viewport_height());
        let reveal = ScrollReveal {
            element: element.clone(),
            animation,
            tracker: TriggerTracker::new(range, self.actions),
            total: timing.total_ms(),
        };
        self.scene.borrow_mut().reveals.push(reveal);
        self.listen()?;

        // Elements already past their start point play at load
        let scroll = dom::scroll_y();
        let mut scene = self.scene.borrow_mut();
        if let Some(reveal) = scene.reveals.last_mut() {
            for action in reveal.tracker.update(scroll) {
                reveal.apply(action)?;
            }
        }
        Ok(())
    }

    fn entrance(&mut self, element: &Element, descriptor: RevealDescriptor) -> Result<(), JsValue> {
        let animation = animate(element, &descriptor.keyframes(), &descriptor.timing())?;
        self.entrances.push(animation);
        Ok(())
    }

    fn hover(&mut self, element: &Element, spec: HoverSpec) -> Result<(), JsValue> {
        let hover = Rc::new(RefCell::new(Hover {
            element: element.clone(),
            state: HoverState::new(spec),
            running: None,
        }));

        let on_enter = hover.clone();
        self.listeners.push(Listener::new(element, "mouseenter", move |_| {
            let mut hover = on_enter.borrow_mut();
            let keyframes = hover.state.enter();
            if let Err(e) = hover.animate(keyframes) {
                leptos::logging::warn!("hover animation failed: {e:?}");
            }
        })?);

        let on_leave = hover.clone();
        self.listeners.push(Listener::new(element, "mouseleave", move |_| {
            let mut hover = on_leave.borrow_mut();
            let keyframes = hover.state.leave();
            if let Err(e) = hover.animate(keyframes) {
                leptos::logging::warn!("hover animation failed: {e:?}");
            }
        })?);

        self.hovers.push(hover);
        Ok(())
    }

    fn parallax(&mut self) -> Result<(), JsValue> {
        let scrub_timing = Timing::seconds(SCRUB_DURATION / 1000.0, 0.0, Ease::None, Fill::Both);
        let viewport = dom::viewport_height();
        let mut scrubs = Vec::new();

        let background = dom::query(BACKGROUND_SELECTOR)?;
        if let (Some(background), Some(hero)) = (background, dom::query(HERO_SELECTOR)?) {
            let layer = ParallaxLayer::background().map_err(|e| JsValue::from_str(&e.to_string()))?;
            scrubs.push((background, hero, layer));
        }

        let sections = dom::query_all(SECTION_SELECTOR)?;
        let layer = ParallaxLayer::section().map_err(|e| JsValue::from_str(&e.to_string()))?;
        for index in sections_with_parallax(sections.len()) {
            let section = sections[index].clone();
            scrubs.push((section.clone(), section, layer));
        }

        for (target, trigger, layer) in scrubs {
            let animation = animate(&target, &layer.keyframes(), &scrub_timing)?;
            animation.pause()?;
            let range = layer.range(
                dom::document_top(&trigger),
                dom::layout_height(&trigger),
                viewport,
            );
            let scrub = Scrub {
                trigger,
                animation,
                layer,
                range,
            };
            scrub.seek(dom::scroll_y());
            self.scene.borrow_mut().scrubs.push(scrub);
        }

        self.listen()
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        self.scroll_listeners.clear();
        self.scroll_binding.release();

        let mut scene = self.scene.borrow_mut();
        for reveal in scene.reveals.drain(..) {
            reveal.animation.cancel();
        }
        for scrub in scene.scrubs.drain(..) {
            scrub.animation.cancel();
        }
        for animation in self.entrances.drain(..) {
            animation.cancel();
        }
        for hover in self.hovers.drain(..) {
            hover.borrow_mut().cancel();
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ObserverOptions<'a> {
    threshold: f64,
    root_margin: &'a str,
}

fn apply_state(element: &Element, state: RevealState) {
    let applied = dom::set_style(element, "opacity", &state.opacity.to_string())
        .and_then(|()| dom::set_style(element, "transform", &state.offset.css()));
    if let Err(e) = applied {
        leptos::logging::warn!("could not apply reveal state: {e:?}");
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// CSS transition backend
pub struct FallbackAnimator {
    threshold: f64,
    root_margin: String,
    transition: String,
    parallax_factor: f64,
    pending: Rc<RefCell<Vec<(Element, OneShotReveal)>>>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    listeners: Vec<Listener>,
}

impl FallbackAnimator {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            threshold: config.fallback_threshold,
            root_margin: config.fallback_root_margin.clone(),
            transition: fallback_transition(config.fallback_transition),
            parallax_factor: config.parallax_factor,
            pending: Rc::default(),
            observer: None,
            listeners: Vec::new(),
        }
    }

    fn observer(&mut self) -> Result<IntersectionObserver, JsValue> {
        if let Some((observer, _)) = &self.observer {
            return Ok(observer.clone());
        }

        let pending = self.pending.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut pending = pending.borrow_mut();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(index) = pending.iter().position(|(element, _)| *element == target)
                    else {
                        continue;
                    };
                    if let Some(state) = pending[index].1.on_visibility(entry.is_intersecting()) {
                        apply_state(&target, state);
                        observer.unobserve(&target);
                        pending.swap_remove(index);
                    }
                }
            },
        );

        let options: IntersectionObserverInit = dom::to_js(&ObserverOptions {
            threshold: self.threshold,
            root_margin: &self.root_margin,
        })?;
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        self.observer = Some((observer.clone(), callback));
        Ok(observer)
    }
}

impl Animator for FallbackAnimator {
    fn reveal(&mut self, element: &Element, descriptor: RevealDescriptor) -> Result<(), JsValue> {
        let from = descriptor.from_state();
        dom::set_style(element, "transition", &self.transition)?;
        dom::set_style(element, "opacity", &from.opacity.to_string())?;
        dom::set_style(element, "transform", &from.offset.css())?;

        let observer = self.observer()?;
        self.pending
            .borrow_mut()
            .push((element.clone(), OneShotReveal::new()));
        observer.observe(element);
        Ok(())
    }

    fn parallax(&mut self) -> Result<(), JsValue> {
        let backgrounds = dom::query_all(BACKGROUND_SELECTOR)?;
        if backgrounds.is_empty() {
            return Ok(());
        }

        let factor = self.parallax_factor;
        self.listeners.push(Listener::on_window("scroll", move |_| {
            let transform = fallback_transform(fallback_offset(dom::scroll_y(), factor));
            for background in &backgrounds {
                if let Err(e) = dom::set_style(background, "transform", &transform) {
                    leptos::logging::warn!("parallax update failed: {e:?}");
                }
            }
        })?);
        Ok(())
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        // Nothing may stay hidden once the observer is gone
        for (element, mut reveal) in self.pending.borrow_mut().drain(..) {
            if let Some(state) = reveal.release() {
                apply_state(&element, state);
            }
        }
    }
}
