//! Viewport containment check.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Bounding box in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    #[must_use]
    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.top(), rect.left(), rect.bottom(), rect.right())
    }
}

/// Whether `rect` lies entirely inside a `width` × `height` viewport.
#[must_use]
pub fn is_in_viewport(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}
