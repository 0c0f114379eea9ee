//! Keyframes, timing and easing shared by every animation on the page.
//!
//! The types serialize (camelCase) into the argument shapes of
//! `Element.animate(keyframes, options)`.

use serde::Serialize;

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Linear, used for scroll-scrubbed motion
    None,
    /// Quadratic ease-out
    Power2Out,
    /// Cubic ease-out
    Power3Out,
    /// CSS `ease`
    Ease,
}

impl Ease {
    /// Equivalent CSS timing function
    pub fn css(&self) -> &'static str {
        match self {
            Ease::None => "linear",
            Ease::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Ease => "ease",
        }
    }
}

/// Directional translation in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn css(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// One keyframe. Unset properties are left out of the serialized object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

impl Keyframe {
    /// Opacity plus translation
    pub fn faded(opacity: f64, offset: Offset) -> Self {
        Self {
            opacity: Some(opacity),
            transform: Some(offset.css()),
            scale: None,
        }
    }

    pub fn scaled(scale: f64) -> Self {
        Self {
            scale: Some(scale.to_string()),
            ..Self::default()
        }
    }

    /// Vertical translation relative to the element's own height
    pub fn y_percent(percent: f64) -> Self {
        Self {
            transform: Some(format!("translateY({percent}%)")),
            ..Self::default()
        }
    }
}

/// How an animation applies its values outside its active interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    Forwards,
    Backwards,
    Both,
}

/// Animation timing in web units (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: &'static str,
    pub fill: Fill,
}

impl Timing {
    /// Build from durations in seconds
    pub fn seconds(duration: f64, delay: f64, ease: Ease, fill: Fill) -> Self {
        Self {
            duration: duration * 1000.0,
            delay: delay * 1000.0,
            easing: ease.css(),
            fill,
        }
    }

    /// Length of the whole animation including the delay
    pub fn total_ms(&self) -> f64 {
        self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_css() {
        assert_eq!(Offset::new(-50.0, 0.0).css(), "translate(-50px, 0px)");
        assert_eq!(Offset::ZERO.css(), "translate(0px, 0px)");
        assert!(Offset::ZERO.is_zero());
        assert!(!Offset::new(0.0, 30.0).is_zero());
    }

    #[test]
    fn test_keyframe_serializes_only_set_properties() {
        let json = serde_json::to_value(Keyframe::scaled(1.02)).unwrap();
        assert_eq!(json, serde_json::json!({ "scale": "1.02" }));

        let json = serde_json::to_value(Keyframe::faded(0.0, Offset::new(0.0, 50.0))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "opacity": 0.0, "transform": "translate(0px, 50px)" })
        );
    }

    #[test]
    fn test_timing_serializes_as_web_animation_options() {
        let timing = Timing::seconds(1.0, 0.5, Ease::Power3Out, Fill::Both);
        assert_eq!(timing.total_ms(), 1500.0);

        let json = serde_json::to_value(&timing).unwrap();
        assert_eq!(json["duration"], 1000.0);
        assert_eq!(json["delay"], 500.0);
        assert_eq!(json["fill"], "both");
        assert_eq!(json["easing"], "cubic-bezier(0.215, 0.61, 0.355, 1)");
    }

    #[test]
    fn test_y_percent_keyframe() {
        assert_eq!(
            Keyframe::y_percent(-10.0).transform.as_deref(),
            Some("translateY(-10%)")
        );
    }
}
