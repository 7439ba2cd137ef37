//! Scroll-position styling: header switch and service-card fade-in.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Whether the header should carry the scrolled style. Re-evaluated on every
/// scroll; strictly greater than the threshold.
#[must_use]
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether a card's top edge is above `viewport_height / divisor`.
#[must_use]
pub fn card_in_view(card_top: f64, viewport_height: f64, divisor: f64) -> bool {
    card_top < viewport_height / divisor
}

/// CSS `animation-delay` for the card at `index`, e.g. `0s`, `0.1s`, `0.3s`.
#[must_use]
pub fn card_delay(index: usize, stagger_ms: u32) -> String {
    let total_ms = u64::try_from(index).unwrap_or(u64::MAX).saturating_mul(u64::from(stagger_ms));
    let whole = total_ms / 1000;
    let frac = total_ms % 1000;
    if frac == 0 {
        return format!("{whole}s");
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}s", frac.trim_end_matches('0'))
}
