//! Browser glue: element lookup, listener registration, and measurements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under `dom` needs a real browser. Decisions live in
//! [`crate::controller`]; this layer resolves elements, forwards events, and
//! applies the returned actions.
//!
//! TRADE-OFFS
//! ==========
//! Listeners are registered for the page lifetime, so their closures are
//! leaked with `Closure::forget` instead of being stored and dropped.

pub mod page;
pub mod wire;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{Error, Result};
use crate::util::viewport::{Rect, is_in_viewport};

/// The global `window`.
///
/// # Errors
///
/// Returns [`Error::MissingGlobal`] outside a browser.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::MissingGlobal("window"))
}

/// The window's `document`.
///
/// # Errors
///
/// Returns [`Error::MissingGlobal`] when the window has no document.
pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(Error::MissingGlobal("document"))
}

/// First element matching `selector`, if any.
///
/// # Errors
///
/// Returns [`Error::Js`] for an invalid selector.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`Error::Js`] for an invalid selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Like [`query_all`], keeping only HTML elements (which carry inline style).
///
/// # Errors
///
/// Returns [`Error::Js`] for an invalid selector.
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
        .collect())
}

/// Add or remove one class.
///
/// # Errors
///
/// Returns [`Error::Js`] if the token list rejects the class name.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Register a page-lifetime event listener.
///
/// # Errors
///
/// Returns [`Error::Js`] if the target refuses the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Log a handler failure. Handlers are the error boundary.
pub fn report(context: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}

/// Viewport width and height in CSS pixels.
///
/// Falls back to the root element's client size when `innerWidth` /
/// `innerHeight` are not numbers.
///
/// # Errors
///
/// Returns [`Error::Js`] if the window properties cannot be read.
pub fn viewport_size(window: &Window) -> Result<(f64, f64)> {
    let root = window.document().and_then(|doc| doc.document_element());
    let width = window
        .inner_width()?
        .as_f64()
        .or_else(|| root.as_ref().map(|el| f64::from(el.client_width())))
        .unwrap_or(0.0);
    let height = window
        .inner_height()?
        .as_f64()
        .or_else(|| root.as_ref().map(|el| f64::from(el.client_height())))
        .unwrap_or(0.0);
    Ok((width, height))
}

/// Whether `element` is fully visible in the current viewport.
#[wasm_bindgen(js_name = isInViewport)]
pub fn element_in_viewport(element: &Element) -> bool {
    let Ok(window) = window() else {
        return false;
    };
    match viewport_size(&window) {
        Ok((width, height)) => is_in_viewport(Rect::from_dom(&element.get_bounding_client_rect()), width, height),
        Err(err) => {
            log::warn!("viewport check: {err}");
            false
        }
    }
}
