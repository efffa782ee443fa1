//! Header view state.
//!
//! All interactive state of the header lives in [`NavState`]: three
//! independent flags, each gating one visual branch. Components hold it in a
//! single `RwSignal<NavState>` and mutate it only through the methods below.

use crate::SCROLL_THRESHOLD_PX;

/// Whether a vertical scroll offset puts the navbar in its opaque style.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Interactive state of one mounted header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Mobile panel expanded
    pub is_menu_open: bool,
    /// Page scrolled past the threshold
    pub is_scrolled: bool,
    /// Lead form overlay shown
    pub is_popup_visible: bool,
}

impl NavState {
    /// Record a new scroll offset. Returns `true` when the navbar style flips.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.is_scrolled;
        self.is_scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    /// Collapse the mobile panel after a link in it is followed.
    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    pub fn open_popup(&mut self) {
        self.is_popup_visible = true;
    }

    pub fn close_popup(&mut self) {
        self.is_popup_visible = false;
    }
}

/// Classes for the fixed navbar.
pub fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 z-50 w-full transition-all duration-300 bg-white shadow-md text-black"
    } else {
        "fixed top-0 left-0 z-50 w-full transition-all duration-300 bg-transparent text-black"
    }
}

/// Classes for the wordmark link.
pub fn brand_class(scrolled: bool) -> &'static str {
    if scrolled {
        "text-2xl md:text-3xl font-bold text-blue-900"
    } else {
        "text-2xl md:text-3xl font-bold text-black"
    }
}
