//! Selectors, class names, and default thresholds shared by the controller.
//!
//! The selector and class strings are a contract with the page markup and
//! stylesheet; renaming one here requires the same rename there.

// ── Navigation ──────────────────────────────────────────────────

pub const SEL_HAMBURGER: &str = ".hamburger";
pub const SEL_NAV_LINKS: &str = ".nav-links";
pub const SEL_NAV_LINK_ANCHORS: &str = ".nav-links a";

/// Marker applied to the toggle control and the link list while open.
pub const CLASS_ACTIVE: &str = "active";

/// Body class that suppresses page scrolling under an open overlay.
pub const CLASS_SCROLL_LOCK: &str = "nav-open";

// ── Skills ──────────────────────────────────────────────────────

pub const SEL_SKILL_BARS: &str = ".skill-progress";
pub const SEL_SKILLS_SECTION: &str = ".about-skills";
pub const ATTR_SKILL_WIDTH: &str = "data-width";
pub const CLASS_ANIMATED: &str = "animated";

// ── Modal ───────────────────────────────────────────────────────

pub const SEL_MODAL_TRIGGERS: &str = ".hire-me-trigger";
pub const ID_MODAL: &str = "hireMeModal";
pub const SEL_MODAL_BACKDROP: &str = ".modal-backdrop";
pub const SEL_MODAL_CLOSE: &str = "[data-modal-close]";
pub const SEL_MODAL_FRAME: &str = "iframe";
pub const CLASS_MODAL_VISIBLE: &str = "show";

/// Inert frame source that marks a frame as not yet loaded.
pub const FRAME_PLACEHOLDER_SRC: &str = "about:blank";

// ── Anchors / header / cards ────────────────────────────────────

pub const SEL_HASH_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_HEADER: &str = "header";
pub const CLASS_HEADER_SCROLLED: &str = "scrolled";
pub const SEL_SERVICE_CARDS: &str = ".service-card";
pub const CLASS_FADE_IN_UP: &str = "fade-in-up";

// ── Lazy images ─────────────────────────────────────────────────

pub const SEL_LAZY_IMAGES: &str = "img[data-src]";
pub const CLASS_LAZY: &str = "lazy";

/// Deferred source attribute used by both lazy images and the modal frame.
pub const ATTR_DEFERRED_SRC: &str = "data-src";

// ── Config ──────────────────────────────────────────────────────

pub const ID_CONFIG_SCRIPT: &str = "folio-config";

pub const DEFAULT_HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_SKILLS_VIEWPORT_DIVISOR: f64 = 1.3;
pub const DEFAULT_CARDS_VIEWPORT_DIVISOR: f64 = 1.2;
pub const DEFAULT_CARD_STAGGER_MS: u32 = 100;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 150;
pub const DEFAULT_TRACKED_DOWNLOAD: &str = "Maseka_Jonathan_CV.pdf";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const GREETING_BANNER: &str = "
    🚀 Maseka Jonathan Portfolio Website
    📧 Contact: contact@masekajonathan.com
    💼 WordPress Developer & SEO Expert
    📝 Contact form ready for submissions
    ";
