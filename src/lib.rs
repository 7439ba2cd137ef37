//! Page behavior controller for a static portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the site's HTML. It
//! wires navigation, modal, scroll-triggered animations, smooth anchor
//! scrolling, lazy images, and download logging to the document. All
//! decisions are made by the browser-independent [`controller::ControllerCore`];
//! the [`dom`] layer only measures, forwards events, and applies
//! [`controller::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Testable core and the `Action` list it emits |
//! | [`nav`] | Mobile navigation open/closed state |
//! | [`skills`] | One-shot skill-bar trigger and width parsing |
//! | [`modal`] | Hire-me modal state and deferred frame source |
//! | [`anchor`] | Same-page anchor parsing and scroll offset |
//! | [`reveal`] | Header scroll style and service-card stagger |
//! | [`lazy`] | Load-once registry for deferred images |
//! | [`util`] | Debounce and viewport containment helpers |
//! | [`config`] | Inline JSON configuration |
//! | [`dom`] | Browser glue (listeners, element lookup, startup) |
//! | [`consts`] | Selectors, class names, default thresholds |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod error;
pub mod lazy;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod skills;
pub mod util;

pub use error::{Error, Result};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::wire::boot();
}
