use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

/// Height of the sticky nav bar, subtracted so a section's top isn't hidden under it.
pub const NAV_OFFSET: f64 = -80.0;

/// Where activating a link should take the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Smooth-scroll to the element with this id.
    InPage(String),
    /// Leave navigation (or download) to the browser.
    Platform,
}

impl LinkTarget {
    pub fn classify(href: &str, download: bool) -> Self {
        if download {
            return Self::Platform;
        }
        match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => Self::InPage(id.to_string()),
            _ => Self::Platform,
        }
    }
}

impl From<&str> for LinkTarget {
    fn from(href: &str) -> Self {
        Self::classify(href, false)
    }
}

/// The scrollable surface the navigator drives.
pub trait Viewport {
    /// Top edge of the element with `id`, relative to the viewport.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y + NAV_OFFSET
}

/// Smooth-scrolls to the anchor `id`, returning the requested offset.
/// Does nothing when no element has that id.
pub fn navigate(viewport: &impl Viewport, id: &str) -> Option<f64> {
    let top = match viewport.element_top(id) {
        Some(top) => top,
        None => {
            log::debug!("no element with id '{id}', skipping scroll");
            return None;
        }
    };
    let y = scroll_target(top, viewport.scroll_y());
    viewport.smooth_scroll_to(y);
    Some(y)
}

/// Browser window. The location hash is never touched so the native jump
/// doesn't fire before the smooth scroll.
pub struct BrowserViewport {
    window: web_sys::Window,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.window.document()?.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Click handler for links. In-page targets have the default jump
/// suppressed and are smooth-scrolled to; everything else is left alone.
pub fn on_link_click(ev: &MouseEvent, target: &LinkTarget) {
    let LinkTarget::InPage(id) = target else {
        return;
    };
    ev.prevent_default();
    if let Some(viewport) = BrowserViewport::new() {
        navigate(&viewport, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeViewport {
        tops: HashMap<String, f64>,
        scroll_y: f64,
        requests: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        fn new(scroll_y: f64, tops: &[(&str, f64)]) -> Self {
            Self {
                tops: tops.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
                scroll_y,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_offset_accounts_for_nav() {
        let vp = FakeViewport::new(1200.0, &[("about", 350.0)]);
        assert_eq!(navigate(&vp, "about"), Some(350.0 + 1200.0 - 80.0));
        assert_eq!(*vp.requests.borrow(), vec![1470.0]);
    }

    #[test]
    fn test_negative_top_scrolls_up() {
        let vp = FakeViewport::new(2000.0, &[("about", -900.0)]);
        assert_eq!(navigate(&vp, "about"), Some(1020.0));
    }

    #[test]
    fn test_missing_anchor_is_noop() {
        let vp = FakeViewport::new(500.0, &[("about", 10.0)]);
        assert_eq!(navigate(&vp, "nonexistent"), None);
        assert!(vp.requests.borrow().is_empty());
    }

    #[test]
    fn test_repeated_navigation_retargets() {
        let vp = FakeViewport::new(0.0, &[("about", 700.0), ("contact", 2400.0)]);
        navigate(&vp, "contact");
        navigate(&vp, "about");
        assert_eq!(*vp.requests.borrow(), vec![2320.0, 620.0]);
    }

    #[test]
    fn test_classify_hrefs() {
        assert_eq!(
            LinkTarget::from("#about"),
            LinkTarget::InPage("about".to_string())
        );
        assert_eq!(LinkTarget::from("mailto:x@y.com"), LinkTarget::Platform);
        assert_eq!(LinkTarget::from("https://github.com/x"), LinkTarget::Platform);
        assert_eq!(LinkTarget::from("#"), LinkTarget::Platform);
        assert_eq!(LinkTarget::from("/images/cv.pdf"), LinkTarget::Platform);
    }

    #[test]
    fn test_download_links_not_intercepted() {
        assert_eq!(LinkTarget::classify("#resume", true), LinkTarget::Platform);
        assert_eq!(
            LinkTarget::classify("#resume", false),
            LinkTarget::InPage("resume".to_string())
        );
    }
}
