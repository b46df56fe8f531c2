//! Selector lookups with absence signaled by log, never by panic.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Resolve a selector to its first match in document order. A miss (or an
/// invalid selector) is a valid result: it is logged as a warning and
/// returned as `None`.
pub fn query_one(selector: &str) -> Option<Element> {
    let document = document()?;
    match document.query_selector(selector) {
        Ok(Some(element)) => Some(element),
        Ok(None) => {
            warn(&format!("no element matches selector `{selector}`"));
            None
        }
        Err(_) => {
            warn(&format!("invalid selector `{selector}`"));
            None
        }
    }
}

/// Resolve a selector to every match in document order. An empty collection
/// is valid and logged as a warning.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => {
            warn(&format!("invalid selector `{selector}`"));
            return Vec::new();
        }
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    if elements.is_empty() {
        warn(&format!("no elements match selector `{selector}`"));
    }
    elements
}

pub(crate) fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

pub(crate) fn error(message: &str) {
    console::error_1(&JsValue::from_str(message));
}
