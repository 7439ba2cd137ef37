//! Small helpers shared by the DOM layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper keeps its decision logic pure so it can be tested natively;
//! only the thin browser wrappers touch `web_sys` or timers.

pub mod debounce;
pub mod viewport;
