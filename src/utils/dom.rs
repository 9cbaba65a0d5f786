//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find an element by id as an `HtmlElement`.
pub fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Collect every element matching `selector`.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach an event listener that lives as long as the page.
///
/// The closure is intentionally leaked using `forget()` since the page never
/// tears these listeners down.
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl Fn(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(Event)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {} listener", event);
    }
    closure.forget();
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Open a URL in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && window.open_with_url_and_target(url, "_blank").is_err()
    {
        log::warn!("could not open {}", url);
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

// =============================================================================
// Smooth Scrolling
// =============================================================================

/// Make every in-page anchor matching `selector` scroll smoothly to its
/// target instead of jumping.
pub fn install_smooth_scroll(document: &Document, selector: &str) {
    for anchor in query_all(document, selector) {
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}
