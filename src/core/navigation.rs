//! Navigation bar state
//!
//! Two independent toggles live here: the presentational scroll state of the
//! navbar and the mobile menu, which also owns the page scroll lock.

/// Presentational navbar state driven by the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

/// Mobile menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input events the controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Scrolled(f64),
    TogglePressed,
    LinkClicked { viewport_width: f64 },
    /// A click that landed outside both the menu and the toggle control
    ClickedOutside,
    KeyPressed(String),
}

/// A change of the menu state produced by [`NavController::handle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChange {
    Opened,
    Closed,
}

/// Navigation controller
///
/// Menu state, toggle class, `aria-expanded` and the body scroll lock are all
/// derived from one field, so they cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct NavController {
    scroll_threshold: f64,
    mobile_breakpoint: f64,
    scroll: ScrollState,
    menu: MenuState,
    last_scroll: f64,
}

impl NavController {
    pub fn new(scroll_threshold: f64, mobile_breakpoint: f64) -> Self {
        Self {
            scroll_threshold,
            mobile_breakpoint,
            scroll: ScrollState::Top,
            menu: MenuState::Closed,
            last_scroll: 0.0,
        }
    }

    pub fn handle(&mut self, event: NavEvent) -> Option<MenuChange> {
        match event {
            NavEvent::Scrolled(offset) => {
                self.scroll = if offset > self.scroll_threshold {
                    ScrollState::Scrolled
                } else {
                    ScrollState::Top
                };
                self.last_scroll = offset;
                None
            }
            NavEvent::TogglePressed => match self.menu {
                MenuState::Closed => self.open(),
                MenuState::Open => self.close(),
            },
            NavEvent::LinkClicked { viewport_width }
                if viewport_width <= self.mobile_breakpoint =>
            {
                self.close()
            }
            NavEvent::LinkClicked { .. } => None,
            NavEvent::ClickedOutside => self.close(),
            NavEvent::KeyPressed(key) if key == "Escape" => self.close(),
            NavEvent::KeyPressed(_) => None,
        }
    }

    /// Open the menu. Returns `None` when it was already open.
    pub fn open(&mut self) -> Option<MenuChange> {
        if self.menu == MenuState::Open {
            return None;
        }
        self.menu = MenuState::Open;
        Some(MenuChange::Opened)
    }

    /// Close the menu. Returns `None` when it was already closed.
    pub fn close(&mut self) -> Option<MenuChange> {
        if self.menu == MenuState::Closed {
            return None;
        }
        self.menu = MenuState::Closed;
        Some(MenuChange::Closed)
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll == ScrollState::Scrolled
    }

    /// Value of the toggle's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Whether the underlying page must not scroll
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Inline `overflow` value for the document body
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() { "hidden" } else { "" }
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(100.0, 768.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_controller() -> NavController {
        let mut nav = NavController::default();
        assert_eq!(nav.handle(NavEvent::TogglePressed), Some(MenuChange::Opened));
        nav
    }

    #[test]
    fn test_initial_state() {
        let nav = NavController::default();
        assert_eq!(nav.menu(), MenuState::Closed);
        assert!(!nav.is_scrolled());
        assert_eq!(nav.aria_expanded(), "false");
        assert_eq!(nav.body_overflow(), "");
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut nav = NavController::default();
        nav.handle(NavEvent::Scrolled(100.0));
        assert!(!nav.is_scrolled());
        nav.handle(NavEvent::Scrolled(100.5));
        assert!(nav.is_scrolled());
        assert_eq!(nav.last_scroll(), 100.5);
        nav.handle(NavEvent::Scrolled(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_scrolling_does_not_touch_menu() {
        let mut nav = open_controller();
        assert_eq!(nav.handle(NavEvent::Scrolled(500.0)), None);
        assert!(nav.is_open());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut nav = open_controller();
        assert!(nav.is_open());
        assert_eq!(nav.aria_expanded(), "true");
        assert!(nav.scroll_locked());
        assert_eq!(nav.body_overflow(), "hidden");

        assert_eq!(nav.handle(NavEvent::TogglePressed), Some(MenuChange::Closed));
        assert!(!nav.is_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn test_link_click_closes_only_on_narrow_viewports() {
        let mut nav = open_controller();
        assert_eq!(
            nav.handle(NavEvent::LinkClicked {
                viewport_width: 1024.0
            }),
            None
        );
        assert!(nav.is_open());

        assert_eq!(
            nav.handle(NavEvent::LinkClicked {
                viewport_width: 768.0
            }),
            Some(MenuChange::Closed)
        );
        assert!(!nav.is_open());
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut nav = open_controller();
        assert_eq!(nav.handle(NavEvent::ClickedOutside), Some(MenuChange::Closed));
        assert_eq!(nav.handle(NavEvent::ClickedOutside), None);
    }

    #[test]
    fn test_escape_closes_other_keys_do_not() {
        let mut nav = open_controller();
        assert_eq!(nav.handle(NavEvent::KeyPressed("Enter".to_string())), None);
        assert!(nav.is_open());
        assert_eq!(
            nav.handle(NavEvent::KeyPressed("Escape".to_string())),
            Some(MenuChange::Closed)
        );
    }

    #[test]
    fn test_close_events_on_closed_menu_are_noops() {
        let mut nav = NavController::default();
        assert_eq!(nav.handle(NavEvent::KeyPressed("Escape".to_string())), None);
        assert_eq!(
            nav.handle(NavEvent::LinkClicked {
                viewport_width: 320.0
            }),
            None
        );
        assert_eq!(nav, NavController::default());
    }
}
