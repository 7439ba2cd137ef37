//! Browser-independent page behavior controller.
//!
//! `ControllerCore` owns every piece of session state and turns user input and
//! layout measurements into [`Action`]s. The DOM layer in [`crate::dom`]
//! measures, forwards, and applies; it never decides.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::anchor::{AnchorHref, scroll_top};
use crate::config::Config;
use crate::modal::{Modal, ModalTarget};
use crate::nav::NavMenu;
use crate::reveal::{card_delay, card_in_view, header_scrolled};
use crate::skills::SkillBars;

/// DOM mutations for the host to apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set or clear the `active` marker on the toggle control and link list.
    SetNavOpen(bool),
    /// Set or clear the body scroll-lock class.
    SetScrollLock(bool),
    /// Grow every skill bar to its `data-width` and mark it animated.
    FillSkillBars,
    SetHeaderScrolled(bool),
    /// Stagger and fade in the service card at `index` (query order).
    RevealCard { index: usize, delay: String },
    SetModalVisible(bool),
    /// Swap the modal frame's real source in.
    LoadFrame(String),
    /// Smooth-scroll the window to this vertical offset.
    ScrollTo { top: f64 },
}

/// Layout measurements taken by the host for one scroll check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Bounding-rect top of the skills section, if present.
    pub skills_top: Option<f64>,
    /// Bounding-rect tops of the service cards, in query order.
    pub card_tops: Vec<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct ControllerCore {
    pub config: Config,
    nav: NavMenu,
    skills: SkillBars,
    modal: Modal,
}

impl ControllerCore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Navigation ---

    pub fn on_toggle_click(&mut self) -> Vec<Action> {
        let open = self.nav.toggle();
        vec![Action::SetNavOpen(open), self.scroll_lock()]
    }

    /// Any link inside the menu closes it, whatever its current state.
    pub fn on_nav_link_click(&mut self) -> Vec<Action> {
        self.nav.close();
        vec![Action::SetNavOpen(false), self.scroll_lock()]
    }

    /// Document-level click; `inside_nav` is true when the target is within
    /// the toggle control or the link list.
    pub fn on_document_click(&mut self, inside_nav: bool) -> Vec<Action> {
        if self.nav.dismiss_outside(inside_nav) {
            vec![Action::SetNavOpen(false), self.scroll_lock()]
        } else {
            Vec::new()
        }
    }

    // --- Scroll ---

    /// Run the scroll-position checks: header style, skill bars, cards.
    pub fn on_scroll(&mut self, sample: &ScrollSample) -> Vec<Action> {
        let cfg = &self.config;
        let mut actions = vec![Action::SetHeaderScrolled(header_scrolled(
            sample.scroll_y,
            cfg.header_scroll_threshold_px,
        ))];

        if self.skills.check(sample.skills_top, sample.viewport_height, cfg.skills_viewport_divisor) {
            actions.push(Action::FillSkillBars);
        }

        for (index, top) in sample.card_tops.iter().enumerate() {
            if card_in_view(*top, sample.viewport_height, cfg.cards_viewport_divisor) {
                actions.push(Action::RevealCard { index, delay: card_delay(index, cfg.card_stagger_ms) });
            }
        }
        actions
    }

    /// Whether the skill bars still need a scroll check.
    #[must_use]
    pub fn skills_pending(&self) -> bool {
        !self.skills.is_animated()
    }

    // --- Modal ---

    /// Open the modal. `deferred_frame` is the frame's deferred source as
    /// measured now; it is loaded the first time one is offered.
    pub fn open_modal(&mut self, deferred_frame: Option<String>) -> Vec<Action> {
        let load_frame = self.modal.open(deferred_frame);
        let mut actions = vec![Action::SetModalVisible(true), self.scroll_lock()];
        if let Some(src) = load_frame {
            actions.push(Action::LoadFrame(src));
        }
        actions
    }

    pub fn on_modal_click(&mut self, target: ModalTarget) -> Vec<Action> {
        if self.modal.on_click(target) {
            vec![Action::SetModalVisible(false), self.scroll_lock()]
        } else {
            Vec::new()
        }
    }

    pub fn on_key_down(&mut self, key: &str) -> Vec<Action> {
        if self.modal.on_key(key) {
            vec![Action::SetModalVisible(false), self.scroll_lock()]
        } else {
            Vec::new()
        }
    }

    // --- Anchors ---

    /// Resolve a same-page anchor click. `target_offset` looks an element up
    /// by id and returns its `offsetTop`; an unknown id yields no action.
    pub fn on_anchor_click<F>(&self, href: &str, header_height: f64, target_offset: F) -> Vec<Action>
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        let AnchorHref::Fragment(id) = AnchorHref::parse(href) else {
            return Vec::new();
        };
        target_offset(id)
            .map(|offset| vec![Action::ScrollTo { top: scroll_top(offset, header_height) }])
            .unwrap_or_default()
    }

    /// The body lock is shared by both overlays.
    fn scroll_lock(&self) -> Action {
        Action::SetScrollLock(self.nav.is_open() || self.modal.is_open())
    }
}
