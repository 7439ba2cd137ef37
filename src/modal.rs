//! Hire-me modal state and its deferred frame.
//!
//! The modal frame ships with `src="about:blank"` and the real URL in
//! `data-src`. The frame is checked at open time; once its real URL has been
//! handed out it is never handed out again, so later opens do not reload it.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::FRAME_PLACEHOLDER_SRC;

/// Where a click inside the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The dimmed backdrop element itself.
    Backdrop,
    /// An element marked with `data-modal-close` (or a descendant of one).
    CloseControl,
    /// Anything else, e.g. the dialog content.
    Content,
}

impl ModalTarget {
    /// Classify a click from the facts the DOM layer gathers.
    ///
    /// `close_control_in_modal` is `None` when no `[data-modal-close]`
    /// element encloses the target, otherwise whether that control sits
    /// inside the modal. The backdrop wins over everything else.
    #[must_use]
    pub fn classify(is_backdrop: bool, close_control_in_modal: Option<bool>) -> Self {
        if is_backdrop {
            Self::Backdrop
        } else if close_control_in_modal == Some(true) {
            Self::CloseControl
        } else {
            Self::Content
        }
    }

    #[must_use]
    pub fn closes(self) -> bool {
        matches!(self, Self::Backdrop | Self::CloseControl)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
    frame_loaded: bool,
}

impl Modal {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Open the modal. Idempotent.
    ///
    /// `deferred_frame` is the frame's deferred source as measured at this
    /// open (see [`deferred_source`]). It is returned for loading the first
    /// time one is offered and never again.
    pub fn open(&mut self, deferred_frame: Option<String>) -> Option<String> {
        self.open = true;
        if self.frame_loaded {
            return None;
        }
        let src = deferred_frame?;
        self.frame_loaded = true;
        Some(src)
    }

    /// Close the modal. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Close on a backdrop or close-control click. Returns whether it was open.
    pub fn on_click(&mut self, target: ModalTarget) -> bool {
        target.closes() && self.close()
    }

    /// Close on `Escape` while open; every other key is ignored.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}

/// Decide whether a frame should defer its load.
///
/// Only a frame whose current `src` is the placeholder and which carries a
/// non-empty `data-src` is deferred.
#[must_use]
pub fn deferred_source(current_src: Option<&str>, data_src: Option<&str>) -> Option<String> {
    match (current_src, data_src) {
        (Some(FRAME_PLACEHOLDER_SRC), Some(src)) if !src.is_empty() => Some(src.to_owned()),
        _ => None,
    }
}
