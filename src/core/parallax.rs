//! Scroll-linked parallax layers.

use crate::core::motion::Keyframe;
use crate::core::trigger::{TriggerParseError, TriggerPoint, TriggerRange};

pub const BACKGROUND_SELECTOR: &str = ".hero-background";
pub const HERO_SELECTOR: &str = ".hero";
pub const SECTION_SELECTOR: &str = "section";

/// A layer whose vertical offset is scrubbed by scroll progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
    /// Offset at full progress, as a percentage of the layer's height
    pub y_percent: f64,
}

impl ParallaxLayer {
    /// Hero background: drifts down by half its height while the hero scrolls out
    pub fn background() -> Result<Self, TriggerParseError> {
        Ok(Self {
            start: TriggerPoint::parse("top top")?,
            end: TriggerPoint::parse("bottom top")?,
            y_percent: 50.0,
        })
    }

    /// Section drift over the section's whole pass through the viewport
    pub fn section() -> Result<Self, TriggerParseError> {
        Ok(Self {
            start: TriggerPoint::parse("top bottom")?,
            end: TriggerPoint::parse("bottom top")?,
            y_percent: -10.0,
        })
    }

    pub fn range(
        &self,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> TriggerRange {
        TriggerRange::resolve(
            &self.start,
            &self.end,
            element_top,
            element_height,
            viewport_height,
        )
    }

    pub fn offset_at(&self, progress: f64) -> f64 {
        self.y_percent * progress.clamp(0.0, 1.0)
    }

    pub fn keyframes(&self) -> [Keyframe; 2] {
        [Keyframe::y_percent(0.0), Keyframe::y_percent(self.y_percent)]
    }
}

/// Indices of the sections that get the drift: every other one, from the first
pub fn sections_with_parallax(count: usize) -> impl Iterator<Item = usize> {
    (0..count).step_by(2)
}

/// Fallback background offset in pixels
pub fn fallback_offset(scroll: f64, factor: f64) -> f64 {
    scroll * factor
}

pub fn fallback_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_layer_spans_hero_height() {
        let layer = ParallaxLayer::background().unwrap();
        let range = layer.range(0.0, 900.0, 900.0);
        assert_eq!(range.start, 0.0);
        assert_eq!(range.end, 900.0);
        assert_eq!(layer.offset_at(range.progress(450.0)), 25.0);
        assert_eq!(layer.offset_at(range.progress(5000.0)), 50.0);
    }

    #[test]
    fn test_section_layer_spans_full_pass() {
        let layer = ParallaxLayer::section().unwrap();
        let range = layer.range(2000.0, 600.0, 800.0);
        assert_eq!(range.start, 1200.0);
        assert_eq!(range.end, 2600.0);
        assert_eq!(layer.offset_at(1.0), -10.0);
        assert_eq!(layer.keyframes()[1], Keyframe::y_percent(-10.0));
    }

    #[test]
    fn test_every_other_section() {
        assert_eq!(sections_with_parallax(5).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(sections_with_parallax(0).count(), 0);
    }

    #[test]
    fn test_fallback_offset() {
        assert_eq!(fallback_offset(300.0, 0.5), 150.0);
        assert_eq!(fallback_transform(150.0), "translateY(150px)");
    }
}
