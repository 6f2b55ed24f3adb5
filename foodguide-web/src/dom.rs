use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// Stop the page behind an overlay from scrolling, or restore it.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Current `overflow` of the body, empty when unset or unavailable.
#[must_use]
pub fn body_overflow() -> String {
    body()
        .and_then(|b| b.style().get_property_value("overflow").ok())
        .unwrap_or_default()
}

/// Smoothly scroll the element matching `selector` (e.g. `#foods`) into view.
///
/// Returns `false` when the selector matches nothing.
pub fn smooth_scroll_to(selector: &str) -> bool {
    let Some(target) = document().and_then(|doc| doc.query_selector(selector).ok().flatten())
    else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
