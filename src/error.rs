//! Crate error type.
//!
//! ERROR HANDLING
//! ==============
//! DOM helpers propagate with `?`; event handlers are the boundary where an
//! error is logged and dropped. Missing optional markup is never an error,
//! the owning feature just does not bind.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A browser API call was rejected.
    #[error("javascript error: {0}")]
    Js(String),

    /// `window` or `document` is unavailable (non-browser host).
    #[error("missing global: {0}")]
    MissingGlobal(&'static str),

    /// Inline configuration could not be parsed or failed validation.
    #[error("config invalid: {0}")]
    Config(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
