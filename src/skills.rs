//! One-shot skill-bar animation trigger.
//!
//! DESIGN
//! ======
//! The trigger is global and fires at most once per page load. Scrolling the
//! section out of view and back never re-arms it.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillBars {
    animated: bool,
}

impl SkillBars {
    #[must_use]
    pub fn is_animated(self) -> bool {
        self.animated
    }

    /// Evaluate the trigger against the skills section position.
    ///
    /// Returns `true` exactly once: the first time the section top is above
    /// `viewport_height / divisor`. A missing section never fires.
    pub fn check(&mut self, section_top: Option<f64>, viewport_height: f64, divisor: f64) -> bool {
        if self.animated {
            return false;
        }
        let Some(top) = section_top else {
            return false;
        };
        if top < viewport_height / divisor {
            self.animated = true;
            return true;
        }
        false
    }
}

/// Parse a `data-width` value into a percentage clamped to 0–100.
#[must_use]
pub fn target_width(raw: &str) -> Option<f64> {
    let Ok(value) = raw.trim().trim_end_matches('%').trim().parse::<f64>() else {
        return None;
    };
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(0.0, 100.0))
}

/// What filling one bar writes.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFill {
    /// Inline width, or `None` when `data-width` is unusable.
    pub width: Option<String>,
    /// The bar is marked animated even when its width is unusable.
    pub animated: bool,
}

#[must_use]
pub fn bar_fill(raw: &str) -> BarFill {
    BarFill { width: target_width(raw).map(width_css), animated: true }
}

/// Inline CSS width for a percentage.
#[must_use]
pub fn width_css(percent: f64) -> String {
    format!("{percent}%")
}
