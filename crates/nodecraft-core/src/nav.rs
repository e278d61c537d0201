use crate::constants::{
    HEADER_HEIGHT_FALLBACK, HEADER_HIDE_AFTER, HEADER_SCROLLED_AT, SECTION_ACTIVE_BAND,
};

/// Header presentation derived from scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderLook {
    pub scrolled: bool,
    pub hidden: bool,
}

#[derive(Clone, Debug, Default)]
pub struct HeaderTracker {
    last_scroll_y: f64,
}

impl HeaderTracker {
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
        }
    }

    /// Hidden while scrolling down past the hide line, shown on any upward move.
    pub fn on_scroll(&mut self, scroll_y: f64) -> HeaderLook {
        let look = HeaderLook {
            scrolled: scroll_y > HEADER_SCROLLED_AT,
            hidden: scroll_y > self.last_scroll_y && scroll_y > HEADER_HIDE_AFTER,
        };
        self.last_scroll_y = scroll_y;
        look
    }
}

/// Pick the active section: the last one whose top sits inside the band
/// around the viewport top.
pub fn active_section<'a, I>(sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| (-SECTION_ACTIVE_BAND..=SECTION_ACTIVE_BAND).contains(top))
        .map(|(id, _)| id)
        .last()
}

/// Document offset to scroll to so the section clears the fixed header.
pub fn scroll_target(section_top: f64, page_y_offset: f64, header_height: Option<f64>) -> f64 {
    section_top + page_y_offset - header_height.unwrap_or(HEADER_HEIGHT_FALLBACK)
}

/// `#id` hrefs map to a section id; anything else is not an in-page link.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Mobile menu open state. Body scroll is locked while open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
