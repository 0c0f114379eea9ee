//! Reveal and hover animation descriptors.
//!
//! Elements opt into a reveal with `data-animate` (`fade-up`, `fade-in`,
//! `fade-left`, `fade-right`) and an optional `data-delay` in seconds. Both
//! animation paths build their keyframes from the same [`RevealDescriptor`].

use crate::core::motion::{Ease, Fill, Keyframe, Offset, Timing};

pub const INTENT_ATTRIBUTE: &str = "data-animate";
pub const DELAY_ATTRIBUTE: &str = "data-delay";

/// Distance in pixels a revealed element travels
pub const REVEAL_DISTANCE: f64 = 50.0;

/// Direction an element comes in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationIntent {
    #[default]
    FadeUp,
    FadeIn,
    FadeLeft,
    FadeRight,
}

impl AnimationIntent {
    /// Unknown values fall back to `fade-up`
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "fade-in" => AnimationIntent::FadeIn,
            "fade-left" => AnimationIntent::FadeLeft,
            "fade-right" => AnimationIntent::FadeRight,
            _ => AnimationIntent::FadeUp,
        }
    }

    /// Starting offset relative to the resting position
    pub fn offset(&self) -> Offset {
        match self {
            AnimationIntent::FadeUp => Offset::new(0.0, REVEAL_DISTANCE),
            AnimationIntent::FadeIn => Offset::ZERO,
            AnimationIntent::FadeLeft => Offset::new(-REVEAL_DISTANCE, 0.0),
            AnimationIntent::FadeRight => Offset::new(REVEAL_DISTANCE, 0.0),
        }
    }
}

/// Parse `data-delay`. Missing, negative and unparsable values mean no delay.
pub fn parse_delay(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(0.0)
}

/// Visual state at either end of a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    pub opacity: f64,
    pub offset: Offset,
}

impl RevealState {
    pub const VISIBLE: RevealState = RevealState {
        opacity: 1.0,
        offset: Offset::ZERO,
    };

    pub fn keyframe(&self) -> Keyframe {
        Keyframe::faded(self.opacity, self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealDescriptor {
    pub intent: AnimationIntent,
    /// Seconds
    pub delay: f64,
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
    pub offset: Offset,
}

impl RevealDescriptor {
    pub fn new(intent: AnimationIntent, delay: f64, duration: f64) -> Self {
        Self {
            intent,
            delay,
            duration,
            ease: Ease::Power3Out,
            offset: intent.offset(),
        }
    }

    pub fn from_attributes(intent: Option<&str>, delay: Option<&str>, duration: f64) -> Self {
        let intent = intent.map(AnimationIntent::parse).unwrap_or_default();
        Self::new(intent, parse_delay(delay), duration)
    }

    /// Upward reveal over a custom distance
    pub fn rising(distance: f64, delay: f64, duration: f64) -> Self {
        Self {
            offset: Offset::new(0.0, distance),
            ..Self::new(AnimationIntent::FadeUp, delay, duration)
        }
    }

    pub fn from_state(&self) -> RevealState {
        RevealState {
            opacity: 0.0,
            offset: self.offset,
        }
    }

    pub fn rest_state(&self) -> RevealState {
        RevealState::VISIBLE
    }

    pub fn keyframes(&self) -> [Keyframe; 2] {
        [self.from_state().keyframe(), self.rest_state().keyframe()]
    }

    /// Fill is `both` so the from-state holds during the delay
    pub fn timing(&self) -> Timing {
        Timing::seconds(self.duration, self.delay, self.ease, Fill::Both)
    }
}

/// One group of the hero entrance sequence
#[derive(Debug, Clone, PartialEq)]
pub struct HeroEntrance {
    pub selector: &'static str,
    pub descriptor: RevealDescriptor,
    /// Each matched element reads its own `data-delay`
    pub per_element_delay: bool,
}

impl HeroEntrance {
    pub fn all(duration: f64) -> [HeroEntrance; 3] {
        [
            HeroEntrance {
                selector: ".title-line",
                descriptor: RevealDescriptor::rising(50.0, 0.0, duration),
                per_element_delay: true,
            },
            HeroEntrance {
                selector: ".hero-subtitle",
                descriptor: RevealDescriptor::rising(30.0, 0.5, duration),
                per_element_delay: false,
            },
            HeroEntrance {
                selector: ".hero-cta",
                descriptor: RevealDescriptor::rising(30.0, 0.7, duration),
                per_element_delay: false,
            },
        ]
    }

    /// Descriptor for one matched element
    pub fn for_element(&self, delay_attribute: Option<&str>) -> RevealDescriptor {
        if self.per_element_delay {
            RevealDescriptor {
                delay: parse_delay(delay_attribute),
                ..self.descriptor
            }
        } else {
            self.descriptor
        }
    }
}

/// Fallback reveal for a single element: reveals on the first intersection,
/// then stops observing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotReveal {
    observing: bool,
}

impl OneShotReveal {
    pub fn new() -> Self {
        Self { observing: true }
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Returns the state to apply, `None` while hidden or once revealed
    pub fn on_visibility(&mut self, intersecting: bool) -> Option<RevealState> {
        if !self.observing || !intersecting {
            return None;
        }
        self.observing = false;
        Some(RevealState::VISIBLE)
    }

    /// Stop observing without waiting for an intersection. An element that was
    /// still hidden gets the visible state so it is never left invisible.
    pub fn release(&mut self) -> Option<RevealState> {
        self.on_visibility(true)
    }
}

impl Default for OneShotReveal {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline transition used by the fallback reveal
pub fn fallback_transition(seconds: f64) -> String {
    format!("opacity {seconds}s ease, transform {seconds}s ease")
}

/// Scale response to pointer hover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverSpec {
    pub scale: f64,
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
}

impl HoverSpec {
    pub const CARD_SELECTOR: &'static str = ".feature-card, .portfolio-item, .testimonial-card";
    pub const BUTTON_SELECTOR: &'static str = ".btn";

    pub fn card() -> Self {
        Self {
            scale: 1.02,
            duration: 0.3,
            ease: Ease::Power2Out,
        }
    }

    pub fn button() -> Self {
        Self {
            scale: 1.05,
            duration: 0.2,
            ease: Ease::Power2Out,
        }
    }

    pub fn timing(&self) -> Timing {
        Timing::seconds(self.duration, 0.0, self.ease, Fill::Forwards)
    }
}

/// Target scale of a hovered element
///
/// Enter and leave produce only the target keyframe. The caller commits the
/// interrupted animation's current value first, so the new animation starts
/// from it and a leave in the middle of an enter does not jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    spec: HoverSpec,
    current: f64,
}

impl HoverState {
    pub fn new(spec: HoverSpec) -> Self {
        Self { spec, current: 1.0 }
    }

    pub fn spec(&self) -> &HoverSpec {
        &self.spec
    }

    pub fn enter(&mut self) -> [Keyframe; 1] {
        self.go_to(self.spec.scale)
    }

    pub fn leave(&mut self) -> [Keyframe; 1] {
        self.go_to(1.0)
    }

    /// Scale the element settles at once the current animation finishes
    pub fn scale(&self) -> f64 {
        self.current
    }

    fn go_to(&mut self, target: f64) -> [Keyframe; 1] {
        self.current = target;
        [Keyframe::scaled(target)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_offsets() {
        assert_eq!(AnimationIntent::parse("fade-up").offset(), Offset::new(0.0, 50.0));
        assert_eq!(AnimationIntent::parse("fade-in").offset(), Offset::ZERO);
        assert_eq!(AnimationIntent::parse("fade-left").offset(), Offset::new(-50.0, 0.0));
        assert_eq!(AnimationIntent::parse("fade-right").offset(), Offset::new(50.0, 0.0));
    }

    #[test]
    fn test_unknown_intent_is_fade_up() {
        assert_eq!(AnimationIntent::parse("zoom"), AnimationIntent::FadeUp);
        assert_eq!(AnimationIntent::parse(""), AnimationIntent::FadeUp);
    }

    #[test]
    fn test_delay_parsing() {
        assert_eq!(parse_delay(Some("0.2")), 0.2);
        assert_eq!(parse_delay(Some(" 1 ")), 1.0);
        assert_eq!(parse_delay(Some("-1")), 0.0);
        assert_eq!(parse_delay(Some("soon")), 0.0);
        assert_eq!(parse_delay(Some("NaN")), 0.0);
        assert_eq!(parse_delay(None), 0.0);
    }

    #[test]
    fn test_descriptor_from_attributes() {
        let d = RevealDescriptor::from_attributes(Some("fade-left"), Some("0.3"), 1.0);
        assert_eq!(d.intent, AnimationIntent::FadeLeft);
        assert_eq!(d.delay, 0.3);
        assert_eq!(d.from_state().opacity, 0.0);
        assert_eq!(d.from_state().offset, Offset::new(-50.0, 0.0));
        assert_eq!(d.rest_state(), RevealState::VISIBLE);

        let timing = d.timing();
        assert_eq!(timing.duration, 1000.0);
        assert_eq!(timing.delay, 300.0);
        assert_eq!(timing.fill, Fill::Both);
    }

    #[test]
    fn test_hero_entrance_sequence() {
        let [title, subtitle, cta] = HeroEntrance::all(1.0);

        assert_eq!(title.for_element(Some("0.4")).delay, 0.4);
        assert_eq!(title.for_element(None).offset, Offset::new(0.0, 50.0));

        assert_eq!(subtitle.for_element(Some("3")).delay, 0.5);
        assert_eq!(subtitle.descriptor.offset, Offset::new(0.0, 30.0));
        assert_eq!(cta.descriptor.delay, 0.7);
    }

    #[test]
    fn test_one_shot_reveal_fires_once() {
        let mut reveal = OneShotReveal::new();
        assert_eq!(reveal.on_visibility(false), None);
        assert!(reveal.is_observing());

        assert_eq!(reveal.on_visibility(true), Some(RevealState::VISIBLE));
        assert!(!reveal.is_observing());

        assert_eq!(reveal.on_visibility(false), None);
        assert_eq!(reveal.on_visibility(true), None);
    }

    #[test]
    fn test_fallback_transition() {
        assert_eq!(
            fallback_transition(0.6),
            "opacity 0.6s ease, transform 0.6s ease"
        );
    }

    #[test]
    fn test_hover_keyframes_carry_only_the_target() {
        let mut hover = HoverState::new(HoverSpec::card());
        assert_eq!(hover.enter(), [Keyframe::scaled(1.02)]);
        assert_eq!(hover.scale(), 1.02);

        // Leaving mid-enter must not restart from the enter target
        assert_eq!(hover.leave(), [Keyframe::scaled(1.0)]);
        assert_eq!(hover.scale(), 1.0);
    }

    #[test]
    fn test_released_reveal_ends_visible() {
        let mut hidden = OneShotReveal::new();
        assert_eq!(hidden.release(), Some(RevealState::VISIBLE));
        assert!(!hidden.is_observing());

        let mut revealed = OneShotReveal::new();
        revealed.on_visibility(true);
        assert_eq!(revealed.release(), None);
    }

    #[test]
    fn test_button_hover_is_quicker_and_larger() {
        let card = HoverSpec::card();
        let button = HoverSpec::button();
        assert!(button.scale > card.scale);
        assert!(button.duration < card.duration);
        assert_eq!(button.timing().fill, Fill::Forwards);
    }
}
