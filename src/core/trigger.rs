//! Scroll triggers.
//!
//! A trigger watches the scroll position against a range derived from an
//! element's position. Start and end points are written like `"top 85%"`:
//! the first edge is on the element, the second on the viewport. Crossing
//! the range boundaries fires the four toggle actions of
//! `"onEnter onLeave onEnterBack onLeaveBack"`.

/// Trigger syntax errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerParseError {
    #[error("trigger point `{0}` needs an element edge and a viewport edge")]
    MissingEdge(String),
    #[error("unknown edge `{0}`")]
    UnknownEdge(String),
    #[error("toggle actions `{0}` must name exactly four actions")]
    ActionCount(String),
    #[error("unknown toggle action `{0}`")]
    UnknownAction(String),
}

/// Relative position along an element or the viewport, 0 at the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge(pub f64);

impl Edge {
    pub const TOP: Edge = Edge(0.0);
    pub const CENTER: Edge = Edge(0.5);
    pub const BOTTOM: Edge = Edge(1.0);

    pub fn parse(token: &str) -> Result<Self, TriggerParseError> {
        match token {
            "top" => Ok(Edge::TOP),
            "center" => Ok(Edge::CENTER),
            "bottom" => Ok(Edge::BOTTOM),
            _ => token
                .strip_suffix('%')
                .and_then(|n| n.parse::<f64>().ok())
                .filter(|n| n.is_finite())
                .map(|n| Edge(n / 100.0))
                .ok_or_else(|| TriggerParseError::UnknownEdge(token.to_string())),
        }
    }
}

/// The moment an element edge meets a viewport edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    pub element: Edge,
    pub viewport: Edge,
}

impl TriggerPoint {
    pub fn parse(spec: &str) -> Result<Self, TriggerParseError> {
        let mut tokens = spec.split_whitespace();
        let (Some(element), Some(viewport), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(TriggerParseError::MissingEdge(spec.to_string()));
        };

        Ok(Self {
            element: Edge::parse(element)?,
            viewport: Edge::parse(viewport)?,
        })
    }

    /// Scroll offset at which this point is reached
    pub fn scroll_offset(
        &self,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> f64 {
        element_top + element_height * self.element.0 - viewport_height * self.viewport.0
    }
}

/// Scroll range between a start and end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRange {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

impl TriggerRange {
    pub fn resolve(
        start: &TriggerPoint,
        end: &TriggerPoint,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Self {
        let start = start.scroll_offset(element_top, element_height, viewport_height);
        let end = end.scroll_offset(element_top, element_height, viewport_height);
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Position inside the range, clamped to `0.0..=1.0`
    pub fn progress(&self, scroll: f64) -> f64 {
        let length = self.end - self.start;
        if length <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / length).clamp(0.0, 1.0)
    }

    fn zone(&self, scroll: f64) -> Zone {
        if scroll < self.start {
            Zone::Before
        } else if scroll > self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

/// What an animation does when its trigger fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub fn parse(token: &str) -> Result<Self, TriggerParseError> {
        Ok(match token {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            _ => return Err(TriggerParseError::UnknownAction(token.to_string())),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub fn parse(spec: &str) -> Result<Self, TriggerParseError> {
        let actions = spec
            .split_whitespace()
            .map(ToggleAction::parse)
            .collect::<Result<Vec<_>, _>>()?;

        let [on_enter, on_leave, on_enter_back, on_leave_back] = actions[..] else {
            return Err(TriggerParseError::ActionCount(spec.to_string()));
        };

        Ok(Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        })
    }
}

/// Edge detector that turns scroll positions into toggle actions
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerTracker {
    range: TriggerRange,
    actions: ToggleActions,
    zone: Zone,
}

impl TriggerTracker {
    pub fn new(range: TriggerRange, actions: ToggleActions) -> Self {
        Self {
            range,
            actions,
            zone: Zone::Before,
        }
    }

    pub fn range(&self) -> TriggerRange {
        self.range
    }

    /// Replace the range after a layout change. The next [`update`](Self::update)
    /// reports any boundary crossed as a result.
    pub fn set_range(&mut self, range: TriggerRange) {
        self.range = range;
    }

    pub fn is_active(&self) -> bool {
        self.zone == Zone::Active
    }

    /// Feed a scroll position, returning the actions fired in order
    pub fn update(&mut self, scroll: f64) -> Vec<ToggleAction> {
        let next = self.range.zone(scroll);
        let a = self.actions;
        let fired: &[ToggleAction] = match (self.zone, next) {
            (Zone::Before, Zone::Active) => &[a.on_enter],
            (Zone::Active, Zone::After) => &[a.on_leave],
            (Zone::After, Zone::Active) => &[a.on_enter_back],
            (Zone::Active, Zone::Before) => &[a.on_leave_back],
            (Zone::Before, Zone::After) => &[a.on_enter, a.on_leave],
            (Zone::After, Zone::Before) => &[a.on_enter_back, a.on_leave_back],
            _ => &[],
        };
        self.zone = next;

        fired
            .iter()
            .copied()
            .filter(|action| *action != ToggleAction::None)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal_tracker() -> TriggerTracker {
        let start = TriggerPoint::parse("top 85%").unwrap();
        let end = TriggerPoint::parse("bottom 20%").unwrap();
        let range = TriggerRange::resolve(&start, &end, 2000.0, 400.0, 1000.0);
        let actions = ToggleActions::parse("play none none reverse").unwrap();
        TriggerTracker::new(range, actions)
    }

    #[test]
    fn test_edges_parse() {
        assert_eq!(Edge::parse("top").unwrap(), Edge::TOP);
        assert_eq!(Edge::parse("center").unwrap(), Edge::CENTER);
        assert_eq!(Edge::parse("85%").unwrap(), Edge(0.85));
        assert!(matches!(
            Edge::parse("middle"),
            Err(TriggerParseError::UnknownEdge(_))
        ));
    }

    #[test]
    fn test_trigger_point_needs_two_edges() {
        assert!(matches!(
            TriggerPoint::parse("top"),
            Err(TriggerParseError::MissingEdge(_))
        ));
        assert!(matches!(
            TriggerPoint::parse("top top top"),
            Err(TriggerParseError::MissingEdge(_))
        ));
    }

    #[test]
    fn test_reveal_range_matches_viewport_geometry() {
        let range = reveal_tracker().range();
        // Element top reaches 85% down a 1000px viewport at 2000 - 850
        assert_eq!(range.start, 1150.0);
        // Element bottom reaches 20% down at 2400 - 200
        assert_eq!(range.end, 2200.0);
    }

    #[test]
    fn test_reveal_plays_once_and_reverses_on_leave_back() {
        let mut tracker = reveal_tracker();
        assert!(tracker.update(0.0).is_empty());
        assert_eq!(tracker.update(1200.0), vec![ToggleAction::Play]);
        assert!(tracker.is_active());
        assert!(tracker.update(1500.0).is_empty());
        // Leaving forwards and coming back are "none"
        assert!(tracker.update(3000.0).is_empty());
        assert!(tracker.update(2000.0).is_empty());
        assert_eq!(tracker.update(100.0), vec![ToggleAction::Reverse]);
    }

    #[test]
    fn test_jumping_over_range_fires_both_actions() {
        let start = TriggerPoint::parse("top bottom").unwrap();
        let end = TriggerPoint::parse("bottom top").unwrap();
        let range = TriggerRange::resolve(&start, &end, 1000.0, 200.0, 800.0);
        let actions = ToggleActions::parse("play complete restart reset").unwrap();
        let mut tracker = TriggerTracker::new(range, actions);

        assert_eq!(
            tracker.update(5000.0),
            vec![ToggleAction::Play, ToggleAction::Complete]
        );
        assert_eq!(
            tracker.update(0.0),
            vec![ToggleAction::Restart, ToggleAction::Reset]
        );
    }

    #[test]
    fn test_progress_is_clamped() {
        let range = TriggerRange {
            start: 100.0,
            end: 300.0,
        };
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(200.0), 0.5);
        assert_eq!(range.progress(900.0), 1.0);
    }

    #[test]
    fn test_inverted_points_collapse_range() {
        let start = TriggerPoint::parse("bottom top").unwrap();
        let end = TriggerPoint::parse("top bottom").unwrap();
        let range = TriggerRange::resolve(&start, &end, 1000.0, 200.0, 800.0);
        assert_eq!(range.start, range.end);
        assert_eq!(range.progress(range.start - 1.0), 0.0);
        assert_eq!(range.progress(range.start), 1.0);
    }

    #[test]
    fn test_toggle_actions_need_four_entries() {
        assert!(matches!(
            ToggleActions::parse("play none"),
            Err(TriggerParseError::ActionCount(_))
        ));
        assert!(matches!(
            ToggleActions::parse("play none none rewind"),
            Err(TriggerParseError::UnknownAction(_))
        ));
    }
}
