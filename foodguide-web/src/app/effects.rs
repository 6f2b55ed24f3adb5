use crate::app::state::PageHandle;
use foodguide_core::PageAction;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Whether a key event should close the topmost overlay.
#[must_use]
pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Attach one document-level `keydown` listener for the page's lifetime.
///
/// Escape closes the image viewer when it is open, otherwise the detail
/// modal; the reducer decides which.
#[hook]
pub fn use_escape_listener(page: &PageHandle) {
    let dispatcher = page.dispatcher();
    use_effect_with((), move |()| {
        let listener = crate::dom::document().map(|doc| {
            EventListener::new(&doc, "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>()
                    && is_escape(&key_event.key())
                {
                    dispatcher.dispatch(PageAction::Escape);
                }
            })
        });
        move || drop(listener)
    });
}

/// Keep the body from scrolling while the detail modal is open.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with(locked, |locked| {
        crate::dom::set_body_scroll_locked(*locked);
        || {}
    });
}
