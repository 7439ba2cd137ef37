//! Mobile navigation open/closed state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile navigation menu.
///
/// Rendered on three elements (toggle control, link list, body); the DOM layer
/// always writes all three from this single flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu unconditionally. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Handle a document click. Closes only when the click landed outside the
    /// toggle and link list while the menu is open.
    pub fn dismiss_outside(&mut self, inside_nav: bool) -> bool {
        if inside_nav || !self.open {
            return false;
        }
        self.close()
    }
}

/// Whether a click counts as inside the menu. Each argument is `None` when
/// that element is absent, otherwise whether it contains the click target.
#[must_use]
pub fn click_inside(toggle_hit: Option<bool>, links_hit: Option<bool>) -> bool {
    toggle_hit == Some(true) || links_hit == Some(true)
}
