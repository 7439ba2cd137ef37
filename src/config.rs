//! Controller configuration read from an optional inline JSON script.
//!
//! The page may embed
//! `<script type="application/json" id="folio-config">{...}</script>`;
//! every field is optional and falls back to the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_CARD_STAGGER_MS, DEFAULT_CARDS_VIEWPORT_DIVISOR, DEFAULT_HEADER_SCROLL_THRESHOLD_PX,
    DEFAULT_LOG_LEVEL, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_SKILLS_VIEWPORT_DIVISOR, DEFAULT_TRACKED_DOWNLOAD,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Header gains the scrolled style strictly above this offset.
    pub header_scroll_threshold_px: f64,
    /// Skills fire once the section top is above `viewport_height / divisor`.
    pub skills_viewport_divisor: f64,
    /// Cards reveal once their top is above `viewport_height / divisor`.
    pub cards_viewport_divisor: f64,
    /// Animation delay step between consecutive service cards.
    pub card_stagger_ms: u32,
    pub resize_debounce_ms: u32,
    /// Substring matched against link hrefs for download logging.
    pub tracked_download: String,
    pub log_level: String,
    pub greeting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_scroll_threshold_px: DEFAULT_HEADER_SCROLL_THRESHOLD_PX,
            skills_viewport_divisor: DEFAULT_SKILLS_VIEWPORT_DIVISOR,
            cards_viewport_divisor: DEFAULT_CARDS_VIEWPORT_DIVISOR,
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            tracked_download: DEFAULT_TRACKED_DOWNLOAD.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            greeting: true,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed JSON, unknown keys, or values
    /// that would make the thresholds meaningless.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.header_scroll_threshold_px.is_finite() && self.header_scroll_threshold_px >= 0.0) {
            return Err(Error::Config("headerScrollThresholdPx must be a non-negative number".into()));
        }
        if !(self.skills_viewport_divisor.is_finite() && self.skills_viewport_divisor > 0.0) {
            return Err(Error::Config("skillsViewportDivisor must be positive".into()));
        }
        if !(self.cards_viewport_divisor.is_finite() && self.cards_viewport_divisor > 0.0) {
            return Err(Error::Config("cardsViewportDivisor must be positive".into()));
        }
        if self.tracked_download.trim().is_empty() {
            return Err(Error::Config("trackedDownload must not be empty".into()));
        }
        if self.tracked_download.contains(['"', '\\']) {
            return Err(Error::Config("trackedDownload must not contain quotes or backslashes".into()));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `logLevel` is not a `log` level name.
    pub fn level(&self) -> Result<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| Error::Config(format!("unknown logLevel: {}", self.log_level)))
    }

    /// Level to hand to the console logger, falling back to `info`.
    #[must_use]
    pub fn level_or_default(&self) -> log::Level {
        self.level().unwrap_or(log::Level::Info)
    }
}
