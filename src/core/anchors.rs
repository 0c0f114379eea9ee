//! Same-page anchor resolution for smooth scrolling

/// What a clicked link's `href` points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    /// `""` or `"#"`: suppress the jump, do not scroll
    Ignore,
    /// `"#id"`: scroll to the element with that id
    Element(String),
    /// Any other link, left to the browser
    NotSamePage,
}

impl AnchorTarget {
    pub fn parse(href: &str) -> Self {
        match href {
            "" | "#" => AnchorTarget::Ignore,
            _ => match href.strip_prefix('#') {
                Some(id) => AnchorTarget::Element(id.to_string()),
                None => AnchorTarget::NotSamePage,
            },
        }
    }
}

/// Scroll offset that puts `target_top` just below the fixed header
pub fn scroll_destination(target_top: f64, header_offset: f64) -> f64 {
    (target_top - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_anchors_are_ignored() {
        assert_eq!(AnchorTarget::parse(""), AnchorTarget::Ignore);
        assert_eq!(AnchorTarget::parse("#"), AnchorTarget::Ignore);
    }

    #[test]
    fn test_fragment_anchor_names_element() {
        assert_eq!(
            AnchorTarget::parse("#contact"),
            AnchorTarget::Element("contact".to_string())
        );
    }

    #[test]
    fn test_other_links_are_not_intercepted() {
        assert_eq!(AnchorTarget::parse("/about"), AnchorTarget::NotSamePage);
        assert_eq!(
            AnchorTarget::parse("https://example.com/#top"),
            AnchorTarget::NotSamePage
        );
    }

    #[test]
    fn test_destination_subtracts_header() {
        assert_eq!(scroll_destination(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_destination(30.0, 80.0), 0.0);
    }
}
