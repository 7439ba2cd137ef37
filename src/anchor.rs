//! Same-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Classification of an anchor `href`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// The bare `#` placeholder link.
    Placeholder,
    /// A same-page fragment; holds the id without the leading `#`.
    Fragment(&'a str),
    /// Not a same-page link.
    External,
}

impl<'a> AnchorHref<'a> {
    #[must_use]
    pub fn parse(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some("") => Self::Placeholder,
            Some(id) => Self::Fragment(id),
            None => Self::External,
        }
    }
}

/// Scroll offset that puts a target's top edge just below the fixed header.
#[must_use]
pub fn scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}
