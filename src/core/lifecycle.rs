//! Install and teardown bookkeeping for the page enhancements

/// What a `pagehide` means for the installed enhancements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHide {
    /// Kept in the back/forward cache. Listeners, observers and inline styles
    /// come back with the page, so nothing is torn down.
    Cached,
    Unloaded,
}

impl PageHide {
    /// From `PageTransitionEvent.persisted`
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unloaded
        }
    }

    pub fn tears_down(&self) -> bool {
        *self == PageHide::Unloaded
    }
}

/// Tracks whether the shared window scroll/resize/load listeners of an
/// animator are registered, independently of its per-element listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollBinding {
    bound: bool,
}

impl ScrollBinding {
    /// `true` exactly once until [`release`](Self::release): the caller must
    /// register the listeners now.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.bound, true)
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn release(&mut self) {
        self.bound = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_page_keeps_enhancements() {
        assert_eq!(PageHide::from_persisted(true), PageHide::Cached);
        assert!(!PageHide::from_persisted(true).tears_down());
        assert!(PageHide::from_persisted(false).tears_down());
    }

    #[test]
    fn test_scroll_binding_claimed_once() {
        let mut binding = ScrollBinding::default();
        assert!(!binding.is_bound());
        assert!(binding.claim());
        assert!(!binding.claim());
        assert!(binding.is_bound());

        binding.release();
        assert!(binding.claim());
    }
}
